use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_duration_to_seconds;

/// Default daily target: 8 hours.
pub const DAILY_LIMIT_SECONDS: u64 = 8 * 3600;

/// Daily work target the remaining time is counted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyLimit(u64);

impl Default for DailyLimit {
    fn default() -> Self {
        Self(DAILY_LIMIT_SECONDS)
    }
}

impl DailyLimit {
    pub fn from_seconds(seconds: u64) -> AppResult<Self> {
        if seconds == 0 {
            return Err(AppError::InvalidDuration(
                "daily limit must be greater than zero".into(),
            ));
        }
        Ok(Self(seconds))
    }

    /// Parse strings such as `8h`, `7h30m`, `450m` or `7:30`.
    pub fn parse(raw: &str) -> AppResult<Self> {
        Self::from_seconds(parse_duration_to_seconds(raw)?)
    }

    pub fn seconds(&self) -> u64 {
        self.0
    }
}
