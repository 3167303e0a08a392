use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::ticker::Ticker;
use crate::core::watch::{Frame, WatchEvent, run_loop};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use super::open_tracker;
use super::status::summary_line;
use super::toggle::report_punch;

/// Map one line typed by the user to an event.
pub fn parse_input(line: &str) -> WatchEvent {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => WatchEvent::Quit,
        _ => WatchEvent::Toggle,
    }
}

/// Live view of today's clock.
pub fn handle(cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database_path())?;
    let mut tracker = open_tracker(&pool, cfg, clock)?;

    let (tx, rx) = mpsc::channel();

    let ctrlc_tx = tx.clone();
    ctrlc::set_handler(move || {
        let _ = ctrlc_tx.send(WatchEvent::Quit);
    })
    .map_err(|e| AppError::Other(format!("cannot install Ctrl-C handler: {}", e)))?;

    // stdin reader: one event per line, Quit on EOF
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let event = match line {
                Ok(l) => parse_input(&l),
                Err(_) => WatchEvent::Quit,
            };
            if tx.send(event).is_err() || event == WatchEvent::Quit {
                return;
            }
        }
        let _ = tx.send(WatchEvent::Quit);
    });

    info("Enter = toggle, q = quit");

    let stats = run_loop(
        &mut tracker,
        &rx,
        Ticker::default(),
        |frame, snapshot, totals| {
            if let Frame::Toggled(entry) = frame {
                println!();
                report_punch(&pool, entry, "watch");
            }
            print!("\r\x1b[2K{}", summary_line(snapshot, totals));
            let _ = io::stdout().flush();
        },
    )?;

    println!();
    info(format!(
        "Watch ended ({} toggle(s), {} refresh(es))",
        stats.toggles, stats.ticks
    ));

    Ok(())
}
