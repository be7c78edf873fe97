//! Cancellable timer handles
//!
//! A page keeps its pending animation timeouts and its game clock in these
//! slots and clears them in `on_cleanup`, so nothing fires after the player
//! has gone back to the dashboard.

use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Holds at most one pending timeout
#[derive(Clone, Default)]
pub struct TimerSlot(Rc<RefCell<Option<Timeout>>>);

impl TimerSlot {
    /// Replace any pending timeout with a new one.
    ///
    /// Must not be called from inside this slot's own callback.
    pub fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        *self.0.borrow_mut() = Some(Timeout::new(millis(delay), callback));
    }

    /// Cancel the pending timeout, if any
    pub fn clear(&self) {
        if let Some(timeout) = self.0.borrow_mut().take() {
            timeout.cancel();
        }
    }
}

/// Holds at most one repeating interval
#[derive(Clone, Default)]
pub struct ClockSlot(Rc<RefCell<Option<Interval>>>);

impl ClockSlot {
    pub fn is_running(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Start ticking unless already running
    pub fn start(&self, period: Duration, tick: impl FnMut() + 'static) {
        if self.is_running() {
            return;
        }
        *self.0.borrow_mut() = Some(Interval::new(millis(period), tick));
    }

    pub fn stop(&self) {
        if let Some(interval) = self.0.borrow_mut().take() {
            interval.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(1200)), 1200);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
