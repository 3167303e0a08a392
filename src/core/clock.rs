//! Clock port: every "now" the core needs goes through here.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local, NaiveDate};
use std::cell::Cell;

pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Local calendar day of `now()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

/// Wall clock of the local machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at a given instant; only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now: Cell::new(now) }
    }

    /// Build from an RFC 3339 string, e.g. `2026-10-18T09:00:00+02:00`.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let dt = DateTime::parse_from_rfc3339(raw)
            .map_err(|_| AppError::InvalidInstant(raw.to_string()))?;
        Ok(Self::new(dt.with_timezone(&Local)))
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}
