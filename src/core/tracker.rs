//! The tracker wires store, guard and calculator together and exposes the
//! single toggle action.

use crate::core::calculator::{DailyLimit, Totals, compute};
use crate::core::clock::Clock;
use crate::core::day_guard::{DayGuard, GuardOutcome};
use crate::core::store::{EntryLogStore, KeyValueStore};
use crate::errors::AppResult;
use crate::models::day_marker::DayMarker;
use crate::models::entry_log::EntryLog;
use crate::models::snapshot::Snapshot;
use crate::models::time_entry::TimeEntry;

pub struct Tracker<S: KeyValueStore, C: Clock> {
    store: EntryLogStore<S>,
    clock: C,
    limit: Option<DailyLimit>,
    log: EntryLog,
    is_clocked_in: bool,
    totals: Totals,
    outcome: GuardOutcome,
}

impl<S: KeyValueStore, C: Clock> Tracker<S, C> {
    /// Run the day-boundary check and seed state and totals.
    pub fn open(backend: S, clock: C, limit: Option<DailyLimit>) -> AppResult<Self> {
        let mut store = EntryLogStore::new(backend);
        let today = DayMarker::today(&clock);
        let (log, outcome) = DayGuard::run(&mut store, &today)?;

        let mut tracker = Self {
            store,
            clock,
            limit,
            is_clocked_in: log.is_clocked_in(),
            log,
            totals: Totals::zero(limit),
            outcome,
        };
        tracker.refresh();
        Ok(tracker)
    }

    /// Clock in when out, out when in. Returns the recorded entry.
    pub fn toggle(&mut self) -> AppResult<TimeEntry> {
        let now = self.clock.now_millis();
        let entry = self.store.append(&mut self.log, now)?;
        self.is_clocked_in = !self.is_clocked_in;
        self.refresh();
        Ok(entry)
    }

    /// Recompute totals at the current instant.
    pub fn refresh(&mut self) -> Totals {
        self.totals = compute(
            &self.log,
            self.clock.now_millis(),
            self.is_clocked_in,
            self.limit,
        );
        self.totals
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            total_time_display: self.totals.total_display(),
            remaining_time_display: self.totals.remaining_display(),
            is_clocked_in: self.is_clocked_in,
            entries: self.log.entries().to_vec(),
        }
    }

    pub fn entries(&self) -> &EntryLog {
        &self.log
    }

    pub fn is_clocked_in(&self) -> bool {
        self.is_clocked_in
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn limit(&self) -> Option<DailyLimit> {
        self.limit
    }

    /// Result of the day-boundary check done by `open`.
    pub fn outcome(&self) -> &GuardOutcome {
        &self.outcome
    }
}
