//! Entry Log Store: today's log and its day marker on top of a key-value backend.

use crate::errors::AppResult;
use crate::models::day_marker::DayMarker;
use crate::models::entry_log::EntryLog;
use crate::models::time_entry::TimeEntry;
use std::collections::HashMap;

/// Key holding the JSON-encoded entry log.
pub const ENTRIES_KEY: &str = "timeEntries";
/// Key holding the day marker the log belongs to.
pub const DATE_KEY: &str = "timeEntriesDate";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

/// In-memory backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    values: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// What was found under [`ENTRIES_KEY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredLog {
    Missing,
    /// Raw value that could not be read back as an alternating log.
    Malformed(String),
    Present(EntryLog),
}

impl StoredLog {
    /// Missing and malformed logs both read as an empty log.
    pub fn into_log(self) -> EntryLog {
        match self {
            StoredLog::Present(log) => log,
            StoredLog::Missing | StoredLog::Malformed(_) => EntryLog::new(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, StoredLog::Malformed(_))
    }
}

pub struct EntryLogStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> EntryLogStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn load_entries(&self) -> AppResult<StoredLog> {
        let loaded = match self.backend.get(ENTRIES_KEY)? {
            None => StoredLog::Missing,
            Some(raw) => match EntryLog::from_json(&raw) {
                Some(log) => StoredLog::Present(log),
                None => StoredLog::Malformed(raw),
            },
        };
        Ok(loaded)
    }

    pub fn save_entries(&mut self, log: &EntryLog) -> AppResult<()> {
        self.backend.set(ENTRIES_KEY, &log.to_json()?)
    }

    pub fn clear_entries(&mut self) -> AppResult<()> {
        self.backend.remove(ENTRIES_KEY)
    }

    pub fn load_marker(&self) -> AppResult<Option<DayMarker>> {
        Ok(self.backend.get(DATE_KEY)?.map(DayMarker::from_stored))
    }

    pub fn save_marker(&mut self, marker: &DayMarker) -> AppResult<()> {
        self.backend.set(DATE_KEY, marker.as_str())
    }

    /// Append an entry stamped `at_millis` (kind from parity) and persist the
    /// whole log. `log` is only updated once the write has succeeded.
    pub fn append(&mut self, log: &mut EntryLog, at_millis: i64) -> AppResult<TimeEntry> {
        let mut updated = log.clone();
        let entry = updated.append(at_millis);
        self.save_entries(&updated)?;
        *log = updated;
        Ok(entry)
    }
}
