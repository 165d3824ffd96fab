use std::thread;
use std::time::Duration;

/// Fixed waits around each delivery, giving the remote client time to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Before the first recipient, after the deliverer is prepared.
    pub startup: Duration,
    /// After a successful delivery, unless it was the last one.
    pub between: Duration,
    /// After a failed delivery, unless it was the last one.
    pub after_failure: Duration,
    /// After the last successful delivery.
    pub final_settle: Duration,
}

impl Pacing {
    pub fn none() -> Self {
        Self {
            startup: Duration::ZERO,
            between: Duration::ZERO,
            after_failure: Duration::ZERO,
            final_settle: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            startup: Duration::from_secs(5),
            between: Duration::from_secs(8),
            after_failure: Duration::from_secs(5),
            final_settle: Duration::from_secs(8),
        }
    }
}

pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoSleep;

impl Sleeper for NoSleep {
    fn sleep(&mut self, _duration: Duration) {}
}
