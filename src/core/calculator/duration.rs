use super::limit::DailyLimit;
use crate::models::entry_log::EntryLog;
use crate::models::time_entry::TimeEntry;
use crate::utils::time::format_hms;

/// Worked time in milliseconds.
///
/// Every complete `(IN, OUT)` pair adds `out - in`. A trailing IN adds
/// `now - in` only when `open_until` is `Some(now)`, i.e. the caller is
/// clocked in; otherwise it adds nothing. Negative spans count as zero.
pub fn total_millis(entries: &[TimeEntry], open_until: Option<i64>) -> i64 {
    let closed: i64 = entries
        .chunks(2)
        .filter_map(|pair| match pair {
            [start, end] => Some(span(start.time, end.time)),
            _ => None,
        })
        .fold(0i64, i64::saturating_add);

    let open = match (entries.len() % 2, entries.last(), open_until) {
        (1, Some(last), Some(now)) => span(last.time, now),
        _ => 0,
    };

    closed.saturating_add(open)
}

/// `end - start` in milliseconds, zero when `end` is not after `start`.
pub fn span(start: i64, end: i64) -> i64 {
    end.saturating_sub(start).max(0)
}

/// Worked time in whole seconds (sub-second remainder truncated).
pub fn total_seconds(entries: &[TimeEntry], open_until: Option<i64>) -> u64 {
    (total_millis(entries, open_until) / 1000) as u64
}

/// Seconds left until `limit`, never negative.
pub fn remaining_seconds(total: u64, limit: DailyLimit) -> u64 {
    limit.seconds().saturating_sub(total)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub total_seconds: u64,
    pub remaining_seconds: Option<u64>,
}

impl Totals {
    /// Totals of an empty day.
    pub fn zero(limit: Option<DailyLimit>) -> Self {
        Self {
            total_seconds: 0,
            remaining_seconds: limit.map(|l| l.seconds()),
        }
    }

    pub fn total_display(&self) -> String {
        format_hms(self.total_seconds)
    }

    pub fn remaining_display(&self) -> Option<String> {
        self.remaining_seconds.map(format_hms)
    }
}

/// Compute today's totals at `now_millis`.
pub fn compute(
    log: &EntryLog,
    now_millis: i64,
    is_clocked_in: bool,
    limit: Option<DailyLimit>,
) -> Totals {
    let open_until = is_clocked_in.then_some(now_millis);
    let total = total_seconds(log.entries(), open_until);

    Totals {
        total_seconds: total,
        remaining_seconds: limit.map(|l| remaining_seconds(total, l)),
    }
}
