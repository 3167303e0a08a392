use super::entry_kind::EntryKind;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// One recorded clock event.
///
/// Serialized as `{"time": <epoch millis>, "type": "IN" | "OUT"}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeEntry {
    pub time: i64, // epoch milliseconds
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl TimeEntry {
    pub fn new(time: i64, kind: EntryKind) -> Self {
        Self { time, kind }
    }

    /// Local wall-clock time of the entry, `None` if the stored value is out of range.
    pub fn local_time(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.time).single()
    }

    pub fn time_str(&self) -> String {
        self.local_time()
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string())
    }
}
