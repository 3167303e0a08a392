use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{Totals, span};
use crate::core::clock::Clock;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::snapshot::Snapshot;
use crate::utils::colors::{GREEN, RED, color_for_kind, color_for_remaining, colorize};
use crate::utils::format_hms;
use crate::utils::formatting::{bold, pad_right};
use crate::utils::table::{Column, Table};

use super::open_tracker;

/// One-line summary: worked time, remaining time, clock state.
pub fn summary_line(snapshot: &Snapshot, totals: Totals) -> String {
    let state = if snapshot.is_clocked_in {
        colorize("IN", GREEN)
    } else {
        colorize("OUT", RED)
    };

    let mut line = format!(
        "⏱  {} {}",
        pad_right("Worked", 9),
        bold(&snapshot.total_time_display)
    );

    if let (Some(remaining), Some(secs)) =
        (&snapshot.remaining_time_display, totals.remaining_seconds)
    {
        line.push_str(&format!(
            " | Remaining {}",
            colorize(remaining, color_for_remaining(secs))
        ));
    }

    line.push_str(&format!(" | {}", state));
    line
}

/// Table of today's entries. OUT rows carry the length of the interval they close.
pub fn entries_table(snapshot: &Snapshot, separator_char: &str) -> String {
    let mut table = Table::new(
        vec![
            Column::new("#", 3),
            Column::new("Kind", 4),
            Column::new("Time", 8),
            Column::new("Interval", 8),
        ],
        separator_char,
    );

    for (i, entry) in snapshot.entries.iter().enumerate() {
        let interval = if entry.kind.is_out() && i > 0 {
            let start = snapshot.entries[i - 1].time;
            format_hms((span(start, entry.time) / 1000) as u64)
        } else if i + 1 == snapshot.entries.len() && entry.kind.is_in() {
            "running".to_string()
        } else {
            String::new()
        };

        table.add_row(vec![
            (i + 1).to_string(),
            colorize(
                &pad_right(entry.kind.label(), 4),
                color_for_kind(entry.kind.is_in()),
            ),
            entry.time_str(),
            interval,
        ]);
    }

    table.render()
}

/// Show the current state of today's clock.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Status { json, entries } = cmd {
        let pool = DbPool::open(&cfg.database_path())?;
        let tracker = open_tracker(&pool, cfg, clock)?;
        let snapshot = tracker.snapshot();

        if *json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            return Ok(());
        }

        println!("📅 {}", clock.today().format("%A %Y-%m-%d"));
        println!("{}", summary_line(&snapshot, tracker.totals()));

        if *entries {
            println!();
            if snapshot.entries.is_empty() {
                println!("No entries today.");
            } else {
                print!("{}", entries_table(&snapshot, &cfg.separator_char));
            }
        }
    }

    Ok(())
}
