use crate::config::Config;
use crate::core::clock::Clock;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::punch;

use super::open_tracker;
use super::status::summary_line;

/// Write the punch to the internal log and print it.
pub fn report_punch(pool: &DbPool, entry: &TimeEntry, via: &str) {
    let (operation, verb) = if entry.kind.is_in() {
        ("clock_in", "Clocked IN")
    } else {
        ("clock_out", "Clocked OUT")
    };
    let message = format!("{} at {}", verb, entry.time_str());

    ttlog_or_warn(
        &pool.conn,
        operation,
        via,
        &format!("{} [{}]", message, entry.time),
    );
    punch(entry.kind.is_in(), message);
}

/// Flip the clock state and show the updated totals.
pub fn handle(cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database_path())?;
    let mut tracker = open_tracker(&pool, cfg, clock)?;

    let entry = tracker.toggle()?;

    report_punch(&pool, &entry, "toggle");
    println!("{}", summary_line(&tracker.snapshot(), tracker.totals()));

    Ok(())
}
