use crate::core::clock::Clock;
use chrono::NaiveDate;
use std::fmt;

/// Format of the stored day marker, e.g. `Sun Oct 18 2026`.
pub const DAY_MARKER_FORMAT: &str = "%a %b %d %Y";

/// The local calendar day a persisted entry log belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMarker(String);

impl DayMarker {
    pub fn for_date(date: NaiveDate) -> Self {
        Self(date.format(DAY_MARKER_FORMAT).to_string())
    }

    pub fn today<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::for_date(clock.today())
    }

    /// Wrap a marker read back from storage. Compared verbatim.
    pub fn from_stored(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
