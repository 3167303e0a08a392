//! Live Ticker: a cancellable once-per-period task bound to the clocked-in state.

use std::time::{Duration, Instant};

/// Refresh period while clocked in.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the ticker; the first tick is due one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Disarm the ticker. No tick fires after this until `start` is called again.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Arm while clocked in, cancel while clocked out. An already running
    /// ticker keeps its schedule.
    pub fn follow(&mut self, is_clocked_in: bool, now: Instant) {
        match (is_clocked_in, self.is_running()) {
            (true, false) => self.start(now),
            (false, true) => self.cancel(),
            _ => {}
        }
    }

    /// Fire at most once. Periods missed while the caller was busy are
    /// skipped, not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(mut due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        while due <= now {
            due += self.period;
        }
        self.next_due = Some(due);
        true
    }

    /// How long an event loop may block before the next tick; `None` when
    /// the ticker is not running.
    pub fn wait_timeout(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
