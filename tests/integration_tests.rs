use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{json, rtc, setup_home, setup_test_db};

#[test]
fn test_init_creates_database() {
    let home = setup_home("init");
    let db_path = setup_test_db("init");

    rtc(&home)
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_status_on_fresh_database() {
    let home = setup_home("fresh");
    let db_path = setup_test_db("fresh");

    rtc(&home)
        .args(["--db", &db_path, "--now", "2025-03-10T09:00:00Z", "status"])
        .assert()
        .success()
        .stdout(contains("00:00:00"))
        .stdout(contains("08:00:00"))
        .stdout(contains("OUT"));
}

#[test]
fn test_toggle_in_then_status_counts_running_interval() {
    let home = setup_home("running");
    let db_path = setup_test_db("running");

    rtc(&home)
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rtc(&home)
        .args(["--db", &db_path, "--now", "2025-03-10T09:00:00Z", "toggle"])
        .assert()
        .success()
        .stdout(contains("Clocked IN at 09:00:00"));

    let out = rtc(&home)
        .args([
            "--db",
            &db_path,
            "--now",
            "2025-03-10T10:30:00Z",
            "status",
            "--json",
        ])
        .output()
        .expect("run status");
    assert!(out.status.success());

    let v = json(&out.stdout);
    assert_eq!(v["totalTimeDisplay"], "01:30:00");
    assert_eq!(v["remainingTimeDisplay"], "06:30:00");
    assert_eq!(v["isClockedIn"], true);
    assert_eq!(v["entries"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(v["entries"][0]["type"], "IN");
}

#[test]
fn test_toggle_in_and_out() {
    let home = setup_home("in_out");
    let db_path = setup_test_db("in_out");

    rtc(&home)
        .args(["--db", &db_path, "--now", "2025-03-10T09:00:00Z", "toggle"])
        .assert()
        .success();

    rtc(&home)
        .args(["--db", &db_path, "--now", "2025-03-10T10:00:00Z", "toggle"])
        .assert()
        .success()
        .stdout(contains("Clocked OUT at 10:00:00"))
        .stdout(contains("01:00:00"))
        .stdout(contains("07:00:00"));

    // clocked out: totals no longer move
    let out = rtc(&home)
        .args([
            "--db",
            &db_path,
            "--now",
            "2025-03-10T15:00:00Z",
            "status",
            "--json",
        ])
        .output()
        .expect("run status");

    let v = json(&out.stdout);
    assert_eq!(v["totalTimeDisplay"], "01:00:00");
    assert_eq!(v["remainingTimeDisplay"], "07:00:00");
    assert_eq!(v["isClockedIn"], false);
    assert_eq!(v["entries"][1]["type"], "OUT");
    assert_eq!(v["entries"][1]["time"], 1_741_600_800_000i64);
}

#[test]
fn test_entries_table() {
    let home = setup_home("table");
    let db_path = setup_test_db("table");

    for t in ["08:00:00", "12:00:00", "12:45:00"] {
        rtc(&home)
            .args(["--db", &db_path, "--now", &format!("2025-03-10T{t}Z"), "toggle"])
            .assert()
            .success();
    }

    rtc(&home)
        .args([
            "--db",
            &db_path,
            "--now",
            "2025-03-10T13:00:00Z",
            "status",
            "--entries",
        ])
        .assert()
        .success()
        .stdout(contains("04:15:00"))
        .stdout(contains("04:00:00"))
        .stdout(contains("running"))
        .stdout(contains("12:45:00"));
}

#[test]
fn test_new_day_resets_log() {
    let home = setup_home("new_day");
    let db_path = setup_test_db("new_day");

    rtc(&home)
        .args(["--db", &db_path, "--now", "2025-03-10T09:00:00Z", "toggle"])
        .assert()
        .success();

    let out = rtc(&home)
        .args([
            "--db",
            &db_path,
            "--now",
            "2025-03-11T09:00:00Z",
            "status",
            "--json",
        ])
        .output()
        .expect("run status");

    let v = json(&out.stdout);
    assert_eq!(v["totalTimeDisplay"], "00:00:00");
    assert_eq!(v["remainingTimeDisplay"], "08:00:00");
    assert_eq!(v["isClockedIn"], false);
    assert_eq!(v["entries"].as_array().map(|a| a.len()), Some(0));

    // first toggle of the new day is an IN again
    rtc(&home)
        .args(["--db", &db_path, "--now", "2025-03-11T09:05:00Z", "toggle"])
        .assert()
        .success()
        .stdout(contains("Clocked IN"));
}

#[test]
fn test_internal_log_records_operations() {
    let home = setup_home("log");
    let db_path = setup_test_db("log");

    rtc(&home)
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for t in ["09:00:00", "10:00:00"] {
        rtc(&home)
            .args(["--db", &db_path, "--now", &format!("2025-03-10T{t}Z"), "toggle"])
            .assert()
            .success();
    }

    rtc(&home)
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("day_reset"))
        .stdout(contains("clock_in"))
        .stdout(contains("clock_out"));
}

#[test]
fn test_limit_can_be_switched_off() {
    let home = setup_home("no_limit");
    let db_path = setup_test_db("no_limit");

    let conf_dir = std::path::Path::new(&home).join(".rtimeclock");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("rtimeclock.conf"),
        format!("database: {}\ndaily_limit: 8h\ntrack_limit: false\n", db_path),
    )
    .unwrap();

    let out = rtc(&home)
        .args(["--now", "2025-03-10T09:00:00Z", "status", "--json"])
        .output()
        .expect("run status");
    assert!(out.status.success());

    let v = json(&out.stdout);
    assert!(v.get("remainingTimeDisplay").is_none());

    rtc(&home)
        .args(["--now", "2025-03-10T09:00:00Z", "status"])
        .assert()
        .success()
        .stdout(contains("Remaining").not());
}

#[test]
fn test_custom_daily_limit() {
    let home = setup_home("custom_limit");
    let db_path = setup_test_db("custom_limit");

    let conf_dir = std::path::Path::new(&home).join(".rtimeclock");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("rtimeclock.conf"),
        format!("database: {}\ndaily_limit: 7h30m\n", db_path),
    )
    .unwrap();

    let out = rtc(&home)
        .args(["--now", "2025-03-10T09:00:00Z", "status", "--json"])
        .output()
        .expect("run status");

    let v = json(&out.stdout);
    assert_eq!(v["remainingTimeDisplay"], "07:30:00");
}

#[test]
fn test_invalid_daily_limit_is_reported() {
    let home = setup_home("bad_limit");
    let db_path = setup_test_db("bad_limit");

    let conf_dir = std::path::Path::new(&home).join(".rtimeclock");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("rtimeclock.conf"),
        format!("database: {}\ndaily_limit: soon\n", db_path),
    )
    .unwrap();

    rtc(&home)
        .args(["status"])
        .assert()
        .failure()
        .stderr(contains("daily_limit"));
}

#[test]
fn test_invalid_now_is_rejected() {
    let home = setup_home("bad_now");
    let db_path = setup_test_db("bad_now");

    rtc(&home)
        .args(["--db", &db_path, "--now", "yesterday", "toggle"])
        .assert()
        .failure()
        .stderr(contains("Invalid instant"));
}

#[test]
fn test_config_print() {
    let home = setup_home("config_print");

    rtc(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("daily_limit: 8h"))
        .stdout(contains("track_limit: true"));
}
