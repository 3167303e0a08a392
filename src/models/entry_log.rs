use super::entry_kind::EntryKind;
use super::time_entry::TimeEntry;
use serde::Serialize;

/// Today's ordered, append-only list of clock events.
///
/// Entries at even positions are `IN`, odd positions are `OUT`. An odd
/// length means the user is currently clocked in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntryLog {
    entries: Vec<TimeEntry>,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from raw entries, rejecting sequences that do not
    /// alternate IN/OUT starting with IN or carry times outside the
    /// representable calendar range.
    pub fn from_entries(entries: Vec<TimeEntry>) -> Option<Self> {
        let valid = entries
            .iter()
            .enumerate()
            .all(|(i, e)| e.kind == EntryKind::for_position(i) && e.local_time().is_some());

        valid.then_some(Self { entries })
    }

    /// Parse the persisted JSON form. Returns `None` for malformed input.
    pub fn from_json(raw: &str) -> Option<Self> {
        let entries: Vec<TimeEntry> = serde_json::from_str(raw).ok()?;
        Self::from_entries(entries)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TimeEntry> {
        self.entries.last()
    }

    pub fn is_clocked_in(&self) -> bool {
        self.entries.len() % 2 != 0
    }

    /// Kind of the next entry, derived purely from length parity.
    pub fn next_kind(&self) -> EntryKind {
        EntryKind::for_position(self.entries.len())
    }

    /// Append a new entry at `at_millis` and return it.
    pub fn append(&mut self, at_millis: i64) -> TimeEntry {
        let entry = TimeEntry::new(at_millis, self.next_kind());
        self.entries.push(entry);
        entry
    }
}
