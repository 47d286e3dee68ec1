//! SSD1675B ePaper Display Driver
//!
//! Drives the 2.13" 122x250 black/white panel (GDEH0213B73, sold as the
//! Waveshare 2.13" e-Paper HAT v2) over SPI with embedded-hal v1.0 traits.
//!
//! ## Architecture
//!
//! - [`Interface`] owns the SPI device and the DC / RST / BUSY pins and frames
//!   command and data bytes. Anything implementing [`DisplayInterface`] can
//!   stand in for it.
//! - [`FrameBuffer`] is the padded 128x250 canvas. It is an embedded-graphics
//!   `DrawTarget` and can also be used as a draw source.
//! - The [`encoder`] turns a canvas into the controller's column-mirrored RAM
//!   stream.
//! - [`Display`] runs the init sequence, writes frames and waits for the
//!   refresh to finish.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ssd1675b::{Builder, Display, FrameBuffer, Interface};
//! use embedded_graphics::{prelude::*, pixelcolor::BinaryColor, primitives::*};
//!
//! let interface = Interface::new(spi, dc, rst, busy);
//! let config = Builder::new().refresh_timeout_ms(10_000).build()?;
//! let mut display = Display::with_init(interface, config, &mut delay)?;
//!
//! let mut frame = FrameBuffer::new();
//! Circle::new(Point::new(20, 40), 60)
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut frame)?;
//!
//! display.draw(display.bounds(), &frame, Point::zero(), &mut delay)?;
//!
//! // Blank the panel before letting go of the hardware
//! display.halt(&mut delay)?;
//! let (spi, dc, rst, busy) = display.release().release();
//! ```
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

mod command;
pub mod config;
pub mod display;
pub mod encoder;
pub mod error;
pub mod framebuffer;
pub mod interface;
pub mod refresh;

#[cfg(test)]
mod fake;

pub use command::Command;
pub use config::{Builder, Config};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use framebuffer::{FrameBuffer, Uniform};
pub use interface::{DisplayInterface, Interface, InterfaceError, SPI_FREQUENCY_HZ, SPI_MODE};
pub use refresh::{Cancel, Never};

/// Visible panel width in pixels
pub const VISIBLE_WIDTH: usize = 122;

/// Width of one controller RAM row in pixels, the visible width rounded up to a byte
pub const RAM_WIDTH: usize = 128;

/// Panel height in pixels (gate lines)
pub const HEIGHT: usize = 250;

/// Bytes per RAM row
pub const ROW_BYTES: usize = RAM_WIDTH / 8;

/// Bytes written to B/W RAM per frame
pub const FRAME_BYTES: usize = ROW_BYTES * HEIGHT;
