//! Time utilities: HH:MM:SS rendering and parsing of human durations ("8h", "7h30m", ...).

use crate::errors::{AppError, AppResult};

/// Render a number of seconds as `HH:MM:SS`.
///
/// Hours grow past two digits instead of wrapping (`123:00:05`).
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Parse a duration into seconds.
///
/// Accepted forms: `8h`, `7h30m`, `450m`, `27000s`, `1h15m30s`, `7:30`,
/// `7:30:15` and a bare number of hours (`8`).
pub fn parse_duration_to_seconds(input: &str) -> AppResult<u64> {
    let s = input.trim().to_lowercase();
    let invalid = || AppError::InvalidDuration(input.to_string());

    if s.is_empty() {
        return Err(invalid());
    }

    // H:MM or H:MM:SS
    if s.contains(':') {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() > 3 {
            return Err(invalid());
        }
        let mut fields = parts.iter().map(|p| p.parse::<u64>().map_err(|_| invalid()));
        let h = fields.next().ok_or_else(invalid)??;
        let m = fields.next().ok_or_else(invalid)??;
        let sec = fields.next().transpose()?.unwrap_or(0);
        if m > 59 || sec > 59 {
            return Err(invalid());
        }
        return hms_to_seconds(h, m, sec).ok_or_else(invalid);
    }

    // bare number → hours
    if let Ok(h) = s.parse::<u64>() {
        return h.checked_mul(3600).ok_or_else(invalid);
    }

    // unit-suffixed components
    let mut total = 0u64;
    let mut digits = String::new();
    for c in s.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let value: u64 = digits.parse().map_err(|_| invalid())?;
        digits.clear();
        let unit = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(invalid()),
        };
        total = value
            .checked_mul(unit)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(invalid)?;
    }

    if !digits.is_empty() {
        return Err(invalid());
    }

    Ok(total)
}

fn hms_to_seconds(h: u64, m: u64, s: u64) -> Option<u64> {
    h.checked_mul(3600)?.checked_add(m * 60 + s)
}
