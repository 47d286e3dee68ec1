// SSD1675B command definitions

use crate::HEIGHT;

/// Controller opcodes used by this driver.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Driver output control: gate line count and scan direction
    DriverOutputControl = 0x01,
    /// Data entry mode: RAM address increment direction
    DataEntryMode = 0x11,
    /// Software reset
    SoftReset = 0x12,
    /// Temperature sensor selection
    TempSensorControl = 0x18,
    /// Commit the staged update sequence
    MasterActivation = 0x20,
    /// Select the update sequence run by master activation
    DisplayUpdateCtrl2 = 0x22,
    /// Write to B/W RAM
    WriteRamBw = 0x24,
    /// Border waveform control
    BorderWaveform = 0x3C,
    /// RAM X address start/end (in bytes)
    SetRamXRange = 0x44,
    /// RAM Y address start/end (in rows)
    SetRamYRange = 0x45,
    /// RAM X address counter
    SetRamXCounter = 0x4E,
    /// RAM Y address counter
    SetRamYCounter = 0x4F,
}

impl Command {
    /// Wire value of the opcode
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

// Data entry: X increment, Y increment
pub const DATA_ENTRY_X_INC_Y_INC: u8 = 0x01;
pub const BORDER_WAVEFORM_LUT1: u8 = 0x01;
pub const INTERNAL_TEMP_SENSOR: u8 = 0x80;

// Display update control 2:
// CLOCK_ON | ANALOG_ON | TEMP_LOAD | LUT_LOAD | DISPLAY_MODE_1 | ANALOG_OFF | CLOCK_OFF
pub const UPDATE_FULL: u8 = 0xF7;

const LAST_ROW: u16 = HEIGHT as u16 - 1;
const LAST_ROW_LO: u8 = (LAST_ROW & 0xFF) as u8;
const LAST_ROW_HI: u8 = (LAST_ROW >> 8) as u8;
// 0x0F -> (15 + 1) * 8 = 128 columns
const LAST_X_BYTE: u8 = (crate::ROW_BYTES - 1) as u8;

/// Register writes issued after the hardware and software reset, in order.
pub const INIT_SEQUENCE: [(Command, &[u8]); 8] = [
    (
        Command::DriverOutputControl,
        &[LAST_ROW_LO, LAST_ROW_HI, 0x00],
    ),
    (Command::DataEntryMode, &[DATA_ENTRY_X_INC_Y_INC]),
    (Command::SetRamXRange, &[0x00, LAST_X_BYTE]),
    (
        Command::SetRamYRange,
        &[LAST_ROW_LO, LAST_ROW_HI, 0x00, 0x00],
    ),
    (Command::BorderWaveform, &[BORDER_WAVEFORM_LUT1]),
    (Command::TempSensorControl, &[INTERNAL_TEMP_SENSOR]),
    (Command::SetRamXCounter, &[0x00]),
    (Command::SetRamYCounter, &[LAST_ROW_LO, LAST_ROW_HI]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcodes_match_datasheet() {
        assert_eq!(Command::DriverOutputControl.opcode(), 0x01);
        assert_eq!(Command::DataEntryMode.opcode(), 0x11);
        assert_eq!(Command::SoftReset.opcode(), 0x12);
        assert_eq!(Command::TempSensorControl.opcode(), 0x18);
        assert_eq!(Command::MasterActivation.opcode(), 0x20);
        assert_eq!(Command::DisplayUpdateCtrl2.opcode(), 0x22);
        assert_eq!(Command::WriteRamBw.opcode(), 0x24);
        assert_eq!(Command::BorderWaveform.opcode(), 0x3C);
        assert_eq!(Command::SetRamXRange.opcode(), 0x44);
        assert_eq!(Command::SetRamYRange.opcode(), 0x45);
        assert_eq!(Command::SetRamXCounter.opcode(), 0x4E);
        assert_eq!(Command::SetRamYCounter.opcode(), 0x4F);
    }

    #[test]
    fn init_payloads_cover_full_panel() {
        assert_eq!(INIT_SEQUENCE[0].1, &[0xF9, 0x00, 0x00]);
        assert_eq!(INIT_SEQUENCE[2].1, &[0x00, 0x0F]);
        assert_eq!(INIT_SEQUENCE[3].1, &[0xF9, 0x00, 0x00, 0x00]);
        assert_eq!(INIT_SEQUENCE[7].1, &[0xF9, 0x00]);
    }
}
