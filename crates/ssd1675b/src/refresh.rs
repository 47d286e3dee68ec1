//! Waiting for a refresh to finish
//!
//! After master activation the controller holds BUSY high until the panel
//! has been driven. [`wait_until_idle`] polls the line with a fixed sleep in
//! between, bounded by [`Config::refresh_timeout_ms`] and a [`Cancel`] signal.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use log::{trace, warn};

use crate::config::Config;
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Cancellation signal checked between BUSY polls
///
/// Implemented for [`AtomicBool`], so a flag shared with an interrupt handler
/// or another thread can stop a refresh wait.
pub trait Cancel {
    /// `true` once the wait should stop
    fn is_cancelled(&self) -> bool;
}

impl Cancel for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<C: Cancel + ?Sized> Cancel for &C {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Signal that never fires
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl Cancel for Never {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Poll BUSY until it reads low.
///
/// BUSY is read first and the sleep only happens while it is high, so a
/// controller that is busy for `n` reads costs `n + 1` reads and `n` sleeps.
/// An idle controller wins over a pending cancel or an expired timeout.
pub fn wait_until_idle<I, D, C>(
    interface: &mut I,
    delay: &mut D,
    config: &Config,
    cancel: &C,
) -> Result<(), Error<I>>
where
    I: DisplayInterface,
    D: DelayNs,
    C: Cancel + ?Sized,
{
    let mut waited_ms: u32 = 0;
    let mut polls: u32 = 0;
    loop {
        polls = polls.saturating_add(1);
        if !interface.is_busy().map_err(Error::Interface)? {
            trace!("busy cleared after {} polls", polls);
            return Ok(());
        }
        if cancel.is_cancelled() {
            warn!("refresh wait cancelled after {} ms", waited_ms);
            return Err(Error::Cancelled);
        }
        if let Some(limit) = config.refresh_timeout_ms {
            if waited_ms >= limit {
                warn!("refresh timed out after {} ms", waited_ms);
                return Err(Error::RefreshTimedOut { waited_ms });
            }
        }
        delay.delay_ms(config.busy_poll_interval_ms);
        waited_ms = waited_ms.saturating_add(config.busy_poll_interval_ms);
    }
}
