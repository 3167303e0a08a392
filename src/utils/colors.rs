/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// IN → green, OUT → red.
pub fn color_for_kind(is_in: bool) -> &'static str {
    if is_in { GREEN } else { RED }
}

/// Remaining time color:
/// 0 → green (target reached)
/// under one hour left → yellow
/// otherwise → reset
pub fn color_for_remaining(seconds: u64) -> &'static str {
    if seconds == 0 {
        GREEN
    } else if seconds < 3600 {
        YELLOW
    } else {
        RESET
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
