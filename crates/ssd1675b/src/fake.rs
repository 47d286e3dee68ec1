//! Recording interface for unit tests.
//!
//! Logs every framing step instead of driving pins, so tests can assert on
//! the exact command/data stream without hardware.

use embedded_hal::delay::DelayNs;

use crate::interface::DisplayInterface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Command(u8),
    Data(u8),
    Reset,
    BusyRead(bool),
}

#[derive(Debug, PartialEq, Eq)]
pub struct FakeError;

#[derive(Debug, Default)]
pub struct FakeInterface {
    pub events: Vec<Event>,
    /// BUSY reads high this many more times
    pub busy_reads: u32,
    /// Fail the n-th transfer (command or data byte), counting from 1
    pub fail_transfer: Option<usize>,
    pub fail_busy_read: bool,
    transfers: usize,
}

impl FakeInterface {
    pub fn with_busy(busy_reads: u32) -> Self {
        Self {
            busy_reads,
            ..Self::default()
        }
    }

    fn transfer(&mut self) -> Result<(), FakeError> {
        self.transfers += 1;
        if self.fail_transfer == Some(self.transfers) {
            return Err(FakeError);
        }
        Ok(())
    }

    pub fn commands(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Data bytes sent after the last occurrence of `command`, up to the next command
    pub fn payload_after(&self, command: u8) -> Vec<u8> {
        let start = self
            .events
            .iter()
            .rposition(|e| *e == Event::Command(command))
            .expect("command was sent");
        self.events[start + 1..]
            .iter()
            .take_while(|e| !matches!(e, Event::Command(_)))
            .filter_map(|e| match e {
                Event::Data(b) => Some(*b),
                _ => None,
            })
            .collect()
    }
}

impl DisplayInterface for FakeInterface {
    type Error = FakeError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.transfer()?;
        self.events.push(Event::Command(command));
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.transfer()?;
            self.events.push(Event::Data(byte));
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.events.push(Event::Reset);
        for ms in crate::interface::RESET_TIMINGS_MS {
            delay.delay_ms(ms);
        }
        Ok(())
    }

    fn is_busy(&mut self) -> Result<bool, Self::Error> {
        if self.fail_busy_read {
            return Err(FakeError);
        }
        let busy = self.busy_reads > 0;
        if busy {
            self.busy_reads -= 1;
        }
        self.events.push(Event::BusyRead(busy));
        Ok(busy)
    }
}

/// Delay that only counts
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub calls: u32,
    pub total_ms: u32,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ms += ns / 1_000_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += ms;
    }
}
