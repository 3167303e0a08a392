use super::time_entry::TimeEntry;
use serde::Serialize;

/// What the presentation layer reads after every computation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub total_time_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_time_display: Option<String>,
    pub is_clocked_in: bool,
    pub entries: Vec<TimeEntry>,
}
