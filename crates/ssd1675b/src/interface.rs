//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the SSD1675B controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The SSD1675B requires:
//! - SPI bus (MOSI + SCK) at [`SPI_FREQUENCY_HZ`], [`SPI_MODE`], 8-bit words
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!   - **BUSY**: Busy status (input, active high)
//!
//! ## Example
//!
//! ```rust,ignore
//! use ssd1675b::{DisplayInterface, Interface};
//!
//! let mut interface = Interface::new(spi_device, dc_pin, rst_pin, busy_pin);
//!
//! // Soft reset
//! interface.send_command(0x12)?;
//!
//! // Every byte goes out as its own transfer
//! interface.send_data(&[0xFF, 0x00, 0xFF])?;
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::{MODE_0, Mode, SpiDevice};

/// SPI clock the controller is driven at
pub const SPI_FREQUENCY_HZ: u32 = 10_000_000;

/// SPI clock polarity/phase
pub const SPI_MODE: Mode = MODE_0;

/// Reset line timings in milliseconds: high, low, high (settle)
pub const RESET_TIMINGS_MS: [u32; 3] = [20, 20, 200];

/// Trait for hardware interface to SSD1675B controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation, or with a fake in tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the command byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must set DC high once, then transmit every byte
    /// as an independent transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails. Bytes after the
    /// failing one are not sent.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// RST high, low, then high again, holding each level for the
    /// corresponding entry of [`RESET_TIMINGS_MS`].
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Sample the BUSY line, `true` while the controller is refreshing
    fn is_busy(&mut self) -> Result<bool, Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug, PartialEq)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::Spi(e) => write!(f, "SPI error: {e:?}"),
            InterfaceError::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for SSD1675B
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
/// The pins are borrowed for the life of the interface and handed back by
/// [`Interface::release`].
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BUSY` - Busy pin implementing [`InputPin`]
#[derive(Debug)]
pub struct Interface<SPI, DC, RST, BUSY> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Busy pin (active high)
    busy: BUSY,
}

impl<SPI, DC, RST, BUSY> Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    /// Create a new Interface
    ///
    /// No I/O is performed. The SPI device must already be configured for
    /// [`SPI_FREQUENCY_HZ`] and [`SPI_MODE`].
    pub fn new(spi: SPI, dc: DC, rst: RST, busy: BUSY) -> Self {
        Self { spi, dc, rst, busy }
    }

    /// Give back the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST, BUSY) {
        (self.spi, self.dc, self.rst, self.busy)
    }
}

impl<SPI, DC, RST, BUSY, PinErr> DisplayInterface for Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        for byte in data {
            self.spi
                .write(core::slice::from_ref(byte))
                .map_err(InterfaceError::Spi)?;
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        let [high, low, settle] = RESET_TIMINGS_MS;
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(high);
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(low);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(settle);
        Ok(())
    }

    fn is_busy(&mut self) -> Result<bool, Self::Error> {
        self.busy.is_high().map_err(InterfaceError::Pin)
    }
}
