#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command for the binary with HOME pointed at `home` and a UTC local clock.
pub fn rtc(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimeclock");
    cmd.env("HOME", home).env("TZ", "UTC");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh HOME directory for a CLI test.
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create home");
    path.to_string_lossy().to_string()
}

/// Local instant on 2025-03-10 at the given wall-clock time.
pub fn local(h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 3, 10, h, m, s)
        .single()
        .expect("unambiguous local time")
}

pub fn json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("valid JSON on stdout")
}
