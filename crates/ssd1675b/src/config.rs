//! Display configuration types and builder
//!
//! Only the refresh wait is tunable. The wire parameters and the register
//! values written by [`Display::init`](crate::display::Display::init) are
//! fixed for this controller revision.

pub use crate::error::BuilderError;

/// Interval between BUSY polls while a refresh is running
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10;

/// Upper bound on a single refresh
pub const DEFAULT_REFRESH_TIMEOUT_MS: u32 = 30_000;

/// Display configuration
///
/// Use [`Builder`] to create a Config, or [`Config::default()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Sleep between BUSY reads
    pub busy_poll_interval_ms: u32,
    /// Give up on a refresh after this long, `None` waits forever
    pub refresh_timeout_ms: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            busy_poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            refresh_timeout_ms: Some(DEFAULT_REFRESH_TIMEOUT_MS),
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1675b::Builder;
///
/// let config = Builder::new()
///     .busy_poll_interval_ms(5)
///     .refresh_timeout_ms(10_000)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.refresh_timeout_ms, Some(10_000));
/// ```
pub struct Builder {
    busy_poll_interval_ms: u32,
    refresh_timeout_ms: Option<u32>,
}

impl Default for Builder {
    fn default() -> Self {
        let config = Config::default();
        Builder {
            busy_poll_interval_ms: config.busy_poll_interval_ms,
            refresh_timeout_ms: config.refresh_timeout_ms,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sleep between BUSY reads
    pub fn busy_poll_interval_ms(mut self, value: u32) -> Self {
        self.busy_poll_interval_ms = value;
        self
    }

    /// Bound each refresh wait
    pub fn refresh_timeout_ms(mut self, value: u32) -> Self {
        self.refresh_timeout_ms = Some(value);
        self
    }

    /// Wait for BUSY to clear without a time bound
    pub fn no_refresh_timeout(mut self) -> Self {
        self.refresh_timeout_ms = None;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::ZeroPollInterval` or `BuilderError::ZeroTimeout`
    /// for zero durations.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.busy_poll_interval_ms == 0 {
            return Err(BuilderError::ZeroPollInterval);
        }
        if self.refresh_timeout_ms == Some(0) {
            return Err(BuilderError::ZeroTimeout);
        }
        Ok(Config {
            busy_poll_interval_ms: self.busy_poll_interval_ms,
            refresh_timeout_ms: self.refresh_timeout_ms,
        })
    }
}
