use predicates::str::contains;
use std::fs;

mod common;
use common::{Kiosk, rc};

fn count_lines_with(haystack: &str, needle: &str) -> usize {
    haystack.lines().filter(|l| l.contains(needle)).count()
}

#[test]
fn test_init_creates_store() {
    let k = Kiosk::new("init");

    k.cmd(&["--db", &k.db, "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&k.db).exists());
}

#[test]
fn test_init_writes_named_config_file() {
    let k = Kiosk::new("init_config_file");
    let conf = k.temp_out("site/kiosk.conf");

    rc().env("NO_COLOR", "1")
        .env("HOME", &k.dir)
        .args(["--config-file", &conf, "--db", &k.db, "init"])
        .assert()
        .success()
        .stdout(contains(conf.as_str()));

    let written = fs::read_to_string(&conf).expect("config written");
    assert!(written.contains("database:"));
    assert!(written.contains(&k.db));
}

#[test]
fn test_roster_lists_both_files() {
    let k = Kiosk::new("roster_list");

    k.cmd(&["roster"])
        .assert()
        .success()
        .stdout(contains("Jane Doe"))
        .stdout(contains("Roe, Rick"))
        .stdout(contains("0012345"))
        .stdout(contains("3 people on the roster"));
}

#[test]
fn test_roster_lookup_email_id() {
    let k = Kiosk::new("roster_lookup");

    k.cmd(&["roster", "--lookup", "0012345"])
        .assert()
        .success()
        .stdout(contains("Ann Officer"));

    k.cmd(&["roster", "--lookup", "12ab"])
        .assert()
        .success()
        .stdout(contains("must contain only numbers"));
}

#[test]
fn test_checkin_known_member() {
    let k = Kiosk::new("checkin_known");

    k.cmd(&["checkin", "123456"])
        .assert()
        .success()
        .stdout(contains("Welcome, Jane Doe! You are marked present."));

    k.cmd(&["list"])
        .assert()
        .success()
        .stdout(contains("123456"))
        .stdout(contains("Jane Doe"));
}

#[test]
fn test_repeat_checkin_overwrites() {
    let k = Kiosk::new("checkin_twice");

    k.cmd(&["checkin", "123456"]).assert().success();
    k.cmd(&["checkin", "123456"]).assert().success();

    let out = k.stdout_of(&["list", "--collection", "attendance"]);
    assert_eq!(count_lines_with(&out, "123456"), 1);
}

#[test]
fn test_checkin_unknown_id_fails() {
    let k = Kiosk::new("checkin_unknown");

    k.cmd(&["checkin", "999999"])
        .assert()
        .failure()
        .stderr(contains("not in the roster"));

    k.cmd(&["list"])
        .assert()
        .success()
        .stdout(contains("No attendance records"));
}

#[test]
fn test_checkin_non_numeric_fails() {
    let k = Kiosk::new("checkin_alpha");

    k.cmd(&["checkin", "abc123"])
        .assert()
        .failure()
        .stderr(contains("Invalid identifier"));
}

#[test]
fn test_guest_registration_and_export() {
    let k = Kiosk::new("guest_export");

    k.cmd(&["guest", "999999", "John", "Smith"])
        .assert()
        .success()
        .stdout(contains("Welcome, John Smith! You are registered as a guest."));

    let out = k.temp_out("guests.csv");
    k.cmd(&[
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--collection",
        "guests",
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("slu_id,name,timestamp"));
    assert!(content.contains("999999,John Smith,"));
}

#[test]
fn test_export_json_attendance() {
    let k = Kiosk::new("export_json");
    k.cmd(&["checkin", "222222"]).assert().success();

    let out = k.temp_out("attendance.json");
    k.cmd(&["export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed[0]["slu_id"], "222222");
    assert_eq!(parsed[0]["name"], "Roe, Rick");
}

#[test]
fn test_export_requires_absolute_path() {
    let k = Kiosk::new("export_relative");
    k.cmd(&["checkin", "123456"]).assert().success();

    k.cmd(&["export", "--file", "relative.csv", "--force"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_log_records_operations() {
    let k = Kiosk::new("log_print");
    k.cmd(&["checkin", "123456"]).assert().success();
    k.cmd(&["guest", "999999", "John Smith"]).assert().success();

    k.cmd(&["log", "--print"])
        .assert()
        .success()
        .stdout(contains("(123456)"))
        .stdout(contains("Jane Doe marked present"))
        .stdout(contains("John Smith registered as guest"));
}

#[test]
fn test_db_info_and_check() {
    let k = Kiosk::new("db_info");
    k.cmd(&["guest", "999999", "John Smith"]).assert().success();

    k.cmd(&["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("guests:"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_backup_compressed() {
    let k = Kiosk::new("backup");
    k.cmd(&["checkin", "123456"]).assert().success();

    let dest = k.temp_out("backup/rollcall-copy.sqlite");
    k.cmd(&["backup", "--file", &dest, "--compress"])
        .assert()
        .success();

    assert!(k.dir.join("backup/rollcall-copy.zip").exists());
    assert!(!k.dir.join("backup/rollcall-copy.sqlite").exists());
}
