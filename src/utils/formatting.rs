//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Horizontal rule built from the configured separator character.
pub fn separator(ch: &str, width: usize) -> String {
    let unit = if ch.is_empty() { "-" } else { ch };
    unit.repeat(width).chars().take(width).collect()
}
