use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 60;

// static pattern, cannot fail to compile
static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());

fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// ANSI colour for an internal log operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" => Colour::Green,
        "clock_out" => Colour::Red,
        "day_reset" => Colour::Yellow,
        "malformed_log" => Colour::RGB(255, 80, 80),
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// `operation (target)` with the operation coloured, cut to `MAX_OP_WIDTH`
/// visible characters.
fn render_op_target(row: &LogRow) -> String {
    let color = color_for_operation(&row.operation);

    let visible = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    let truncated = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match truncated.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Internal log lines, formatted for the terminal.
    pub fn render_log(pool: &DbPool) -> AppResult<Vec<String>> {
        let rows = load_log(&pool.conn)?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let rendered: Vec<(String, String, &LogRow)> = rows
            .iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.date.clone());
                (date, render_op_target(r), r)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rendered.iter().map(|(d, _, _)| d.len()).max().unwrap_or(10);
        let op_w = rendered
            .iter()
            .map(|(_, op, _)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        let lines = rendered
            .into_iter()
            .map(|(date, op, row)| {
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op).chars().count()));
                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    row.id,
                    date,
                    op,
                    padding,
                    row.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect();

        Ok(lines)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let lines = Self::render_log(pool)?;
        println!("📜 Internal log:\n");
        if lines.is_empty() {
            println!("(empty)");
        }
        for line in lines {
            println!("{}", line);
        }
        Ok(())
    }
}
