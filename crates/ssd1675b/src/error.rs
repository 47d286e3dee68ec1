//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! None of these are retried by the driver. After an [`Error`] from
//! `init` or `draw` the controller state is unknown and
//! [`Display::init`](crate::display::Display::init) must run again before the
//! next frame.
//!
//! ## Example
//!
//! ```
//! use ssd1675b::{Builder, BuilderError};
//!
//! let result = Builder::new().busy_poll_interval_ms(0).build();
//! assert!(matches!(result, Err(BuilderError::ZeroPollInterval)));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// BUSY stayed high past the configured refresh timeout
    RefreshTimedOut {
        /// Time spent sleeping between polls before giving up
        waited_ms: u32,
    },
    /// The wait for refresh completion was cancelled
    Cancelled,
}

impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Error::RefreshTimedOut { waited_ms } => f
                .debug_struct("RefreshTimedOut")
                .field("waited_ms", waited_ms)
                .finish(),
            Error::Cancelled => f.write_str("Cancelled"),
        }
    }
}

impl<I: DisplayInterface> PartialEq for Error<I>
where
    I::Error: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::Interface(a), Error::Interface(b)) => a == b,
            (Error::RefreshTimedOut { waited_ms: a }, Error::RefreshTimedOut { waited_ms: b }) => {
                a == b
            }
            (Error::Cancelled, Error::Cancelled) => true,
            _ => false,
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::RefreshTimedOut { waited_ms } => {
                write!(f, "Refresh timed out after {waited_ms} ms")
            }
            Error::Cancelled => write!(f, "Refresh wait cancelled"),
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// The busy poll interval must be at least 1 ms
    ZeroPollInterval,
    /// A refresh timeout of 0 ms would fail every refresh
    ///
    /// Use [`Builder::no_refresh_timeout()`](crate::config::Builder::no_refresh_timeout)
    /// to wait without a bound.
    ZeroTimeout,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::ZeroPollInterval => write!(f, "Busy poll interval must be non-zero"),
            BuilderError::ZeroTimeout => write!(f, "Refresh timeout must be non-zero"),
        }
    }
}

impl core::error::Error for BuilderError {}
