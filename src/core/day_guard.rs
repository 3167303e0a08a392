//! Day-Boundary Guard: a log only survives within the calendar day it was written.

use crate::core::store::{EntryLogStore, KeyValueStore};
use crate::errors::AppResult;
use crate::models::day_marker::DayMarker;
use crate::models::entry_log::EntryLog;

/// How the start-up check went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Stored marker missing or from another day: the log was discarded.
    Reset { previous: Option<DayMarker> },
    /// Same day: the stored log was loaded. `malformed` is set when the
    /// stored value was unreadable and an empty log was used instead.
    Resumed { malformed: bool },
}

impl GuardOutcome {
    pub fn is_reset(&self) -> bool {
        matches!(self, GuardOutcome::Reset { .. })
    }
}

pub struct DayGuard;

impl DayGuard {
    /// Compare the stored marker with `today` and return the log to start from.
    pub fn run<S: KeyValueStore>(
        store: &mut EntryLogStore<S>,
        today: &DayMarker,
    ) -> AppResult<(EntryLog, GuardOutcome)> {
        let stored_log = store.load_entries()?;
        let stored_marker = store.load_marker()?;

        if stored_marker.as_ref() != Some(today) {
            store.clear_entries()?;
            store.save_marker(today)?;
            return Ok((
                EntryLog::new(),
                GuardOutcome::Reset {
                    previous: stored_marker,
                },
            ));
        }

        let malformed = stored_log.is_malformed();
        Ok((stored_log.into_log(), GuardOutcome::Resumed { malformed }))
    }
}
