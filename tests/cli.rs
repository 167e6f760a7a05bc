use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("appsize-stats").unwrap()
}

fn db_arg(dir: &TempDir) -> String {
    dir.path().join("apps_sizes.db").to_string_lossy().into_owned()
}

#[test]
fn init_update_summary_happy_path() {
    let dir = TempDir::new().unwrap();
    let db = db_arg(&dir);

    cmd()
        .args(["init", "--db-path", &db])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    cmd()
        .args(["update", "firefox", "88.5", "--db-path", &db])
        .assert()
        .success()
        .stdout(predicate::str::contains("firefox"));

    cmd()
        .args(["update", "firefox", "11.5", "--db-path", &db])
        .assert()
        .success();

    cmd()
        .args(["summary", "--db-path", &db])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updates recorded:   2"))
        .stdout(predicate::str::contains("Weekly total size:  100.00"))
        .stdout(predicate::str::contains("Most updated app:   firefox"))
        .stdout(predicate::str::contains("Mean update size:   50.00"));
}

#[test]
fn summary_of_empty_table_reports_absent_stats() {
    let dir = TempDir::new().unwrap();
    let db = db_arg(&dir);

    cmd().args(["init", "--db-path", &db]).assert().success();
    cmd()
        .args(["summary", "--db-path", &db])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly total size:  0.00"))
        .stdout(predicate::str::contains("Most updated app:   n/a"))
        .stdout(predicate::str::contains("Median update size: n/a"));
}

#[test]
fn summary_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let db = db_arg(&dir);

    cmd().args(["init", "--db-path", &db]).assert().success();
    cmd()
        .args(["update", "firefox", "88.5", "--db-path", &db])
        .assert()
        .success();

    let out = cmd()
        .args(["summary", "--json", "--db-path", &db])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["record_count"], 1);
    assert_eq!(report["most_updated_app"], "firefox");
    assert_eq!(report["weekly_total"], 88.5);
}

#[test]
fn second_init_requires_force() {
    let dir = TempDir::new().unwrap();
    let db = db_arg(&dir);

    cmd().args(["init", "--db-path", &db]).assert().success();
    cmd()
        .args(["init", "--db-path", &db])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cmd()
        .args(["update", "firefox", "88.5", "--db-path", &db])
        .assert()
        .success();
    cmd()
        .args(["init", "--force", "--db-path", &db])
        .assert()
        .success();
    cmd()
        .args(["summary", "--db-path", &db])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updates recorded:   0"));
}

#[test]
fn update_without_init_fails() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["update", "firefox", "88.5", "--db-path", &db_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn update_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();
    let db = db_arg(&dir);
    cmd().args(["init", "--db-path", &db]).assert().success();

    cmd()
        .args(["update", "", "88.5", "--db-path", &db])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));

    cmd()
        .args(["update", "firefox", "-3", "--db-path", &db])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));

    // non-numeric size never reaches the store
    cmd()
        .args(["update", "firefox", "big", "--db-path", &db])
        .assert()
        .failure();
}

#[test]
fn update_accepts_explicit_date() {
    let dir = TempDir::new().unwrap();
    let db = db_arg(&dir);
    cmd().args(["init", "--db-path", &db]).assert().success();

    cmd()
        .args(["update", "firefox", "88.5", "--date", "2026-08-01", "--db-path", &db])
        .assert()
        .success();
    cmd()
        .args(["list", "--db-path", &db])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-08-01"))
        .stdout(predicate::str::contains("firefox"));
}

#[test]
fn export_writes_json_file() {
    let dir = TempDir::new().unwrap();
    let db = db_arg(&dir);
    cmd().args(["init", "--db-path", &db]).assert().success();
    cmd()
        .args(["update", "firefox", "88.5", "--db-path", &db])
        .assert()
        .success();

    cmd()
        .args(["export", "--db-path", &db])
        .assert()
        .success()
        .stdout(predicate::str::contains("apps_sizes.json"));

    let json_path = dir.path().join("apps_sizes.json");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(json[0]["name"], "firefox");
}
