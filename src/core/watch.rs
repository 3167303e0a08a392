//! Event loop behind `watch`: toggles and ticks are handled one at a time.

use crate::core::calculator::Totals;
use crate::core::clock::Clock;
use crate::core::store::KeyValueStore;
use crate::core::ticker::Ticker;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::models::snapshot::Snapshot;
use crate::models::time_entry::TimeEntry;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    Toggle,
    Quit,
}

/// Why the frame is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame<'a> {
    Initial,
    Tick,
    Toggled(&'a TimeEntry),
}

/// Counters returned when the loop ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WatchStats {
    pub ticks: usize,
    pub toggles: usize,
}

/// Drive `tracker` from `events` until `Quit` arrives or every sender is gone.
///
/// The ticker only runs while clocked in and is cancelled on every way out
/// of the loop, errors included, since it lives on this stack frame.
pub fn run_loop<S, C, R>(
    tracker: &mut Tracker<S, C>,
    events: &Receiver<WatchEvent>,
    mut ticker: Ticker,
    mut render: R,
) -> AppResult<WatchStats>
where
    S: KeyValueStore,
    C: Clock,
    R: FnMut(Frame<'_>, &Snapshot, Totals),
{
    let mut stats = WatchStats::default();

    render(Frame::Initial, &tracker.snapshot(), tracker.totals());
    ticker.follow(tracker.is_clocked_in(), Instant::now());

    loop {
        let event = match ticker.wait_timeout(Instant::now()) {
            Some(timeout) => match events.recv_timeout(timeout) {
                Ok(ev) => Some(ev),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => Some(WatchEvent::Quit),
            },
            None => Some(events.recv().unwrap_or(WatchEvent::Quit)),
        };

        match event {
            None => {}
            Some(WatchEvent::Toggle) => {
                let entry = tracker.toggle()?;
                ticker.follow(tracker.is_clocked_in(), Instant::now());
                stats.toggles += 1;
                render(Frame::Toggled(&entry), &tracker.snapshot(), tracker.totals());
            }
            Some(WatchEvent::Quit) => {
                ticker.cancel();
                return Ok(stats);
            }
        }

        // checked after every event so a steady input stream cannot starve ticks
        if ticker.poll(Instant::now()) {
            tracker.refresh();
            stats.ticks += 1;
            render(Frame::Tick, &tracker.snapshot(), tracker.totals());
        }
    }
}
