pub mod config;
pub mod init;
pub mod log;
pub mod status;
pub mod toggle;
pub mod watch;

use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::day_guard::GuardOutcome;
use crate::core::tracker::Tracker;
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub type CliTracker<'a> = Tracker<SqliteKv<'a>, &'a dyn Clock>;

/// Open today's tracker on the configured database and record what the
/// day-boundary check did in the internal log.
pub fn open_tracker<'a>(
    pool: &'a DbPool,
    cfg: &Config,
    clock: &'a dyn Clock,
) -> AppResult<CliTracker<'a>> {
    let tracker = Tracker::open(SqliteKv::new(&pool.conn), clock, cfg.daily_limit()?)?;

    match tracker.outcome() {
        GuardOutcome::Reset { previous: Some(prev) } => ttlog_or_warn(
            &pool.conn,
            "day_reset",
            prev.as_str(),
            &format!("Entries of {} discarded, new day {}", prev, clock.today()),
        ),
        GuardOutcome::Reset { previous: None } => ttlog_or_warn(
            &pool.conn,
            "day_reset",
            "",
            &format!("First run, day {}", clock.today()),
        ),
        GuardOutcome::Resumed { malformed: true } => ttlog_or_warn(
            &pool.conn,
            "malformed_log",
            crate::core::store::ENTRIES_KEY,
            "Stored entries unreadable, starting from an empty log",
        ),
        GuardOutcome::Resumed { malformed: false } => {}
    }

    Ok(tracker)
}
