use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tinyclean(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tinyclean").unwrap();
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

// ─── Help & version ──────────────────────────────────────────────────────────

#[test]
fn test_no_args_prints_usage() {
    let home = TempDir::new().unwrap();
    tinyclean(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("macOS cleanup assistant"))
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn test_help_variants() {
    let home = TempDir::new().unwrap();
    for flag in ["-h", "--help", "help"] {
        tinyclean(&home)
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    tinyclean(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tinyclean"));
}

#[test]
fn test_scan_help_lists_flags() {
    let home = TempDir::new().unwrap();
    tinyclean(&home)
        .args(["scan", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--projects-path"))
        .stdout(predicate::str::contains("--days"));
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_command_fails_with_usage() {
    let home = TempDir::new().unwrap();
    tinyclean(&home)
        .arg("purge")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("unknown command \"purge\""));
}

#[test]
fn test_empty_project_path_is_rejected() {
    let home = TempDir::new().unwrap();
    tinyclean(&home)
        .args(["scan", "-projects-path", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty path"));
}

fn stderr_of(home: &TempDir, args: &[&str]) -> String {
    let assert = tinyclean(home).args(args).assert().failure();
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn test_parse_error_reported_once() {
    let home = TempDir::new().unwrap();

    let stderr = stderr_of(&home, &["scan", "-days=soon"]);
    assert_eq!(stderr.matches("invalid value 'soon'").count(), 1, "{stderr}");
    assert!(!stderr.contains("Caused by"), "{stderr}");

    let stderr = stderr_of(&home, &["scan", "-projects-path="]);
    assert_eq!(stderr.matches("empty path").count(), 1, "{stderr}");

    let stderr = stderr_of(&home, &["scan", "-bogus"]);
    assert_eq!(stderr.matches("unexpected argument").count(), 1, "{stderr}");
}

#[test]
fn test_config_error_reported_once() {
    let home = TempDir::new().unwrap();
    let stderr = stderr_of(&home, &["-v", "--config", "/no/such/tinyclean.toml", "scan"]);
    assert_eq!(stderr.matches("Config error").count(), 1, "{stderr}");
    assert!(stderr.starts_with("Error: "), "{stderr}");
}

#[test]
fn test_missing_config_file_is_fatal() {
    let home = TempDir::new().unwrap();
    tinyclean(&home)
        .args(["--config", "/no/such/tinyclean.toml", "scan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tinyclean.toml"));
}

// ─── Scan command ────────────────────────────────────────────────────────────

#[test]
fn test_scan_empty_home_reports_nothing() {
    let home = TempDir::new().unwrap();
    tinyclean(&home)
        .args(["scan", "-apps=false", "-caches=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TinyClean PLAN"))
        .stdout(predicate::str::contains("No candidates found."));
}

#[test]
fn test_scan_reports_projects_and_caches() {
    let home = TempDir::new().unwrap();
    let h = home.path();
    fs::create_dir_all(h.join("Projects/site/.git")).unwrap();
    fs::create_dir_all(h.join("Projects/scratch")).unwrap();
    fs::create_dir_all(h.join(".Trash")).unwrap();

    tinyclean(&home)
        .args(["scan", "-dry-run", "-apps=false", "-days=14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TinyClean DRY-RUN"))
        .stdout(predicate::str::contains("days=14"))
        .stdout(predicate::str::contains("Projects (2)"))
        .stdout(predicate::str::contains("git repo; check clean + unused for 14 days"))
        .stdout(predicate::str::contains("non-git; check last modified > 14 days"))
        .stdout(predicate::str::contains("empty directory"))
        .stdout(predicate::str::contains("Nothing was deleted because dry-run is enabled."));
}

#[test]
fn test_scan_custom_project_paths() {
    let home = TempDir::new().unwrap();
    let root = home.path().join("src");
    fs::create_dir_all(root.join("alpha")).unwrap();
    let root = root.to_str().unwrap().to_string();

    tinyclean(&home)
        .args(["scan", "--apps=false", "--caches=false"])
        .args(["--projects-path", &root, "--projects-path", &root])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects (1)"))
        .stdout(predicate::str::contains("Total candidates: 1"));
}

#[test]
fn test_scan_truncates_unless_verbose() {
    let home = TempDir::new().unwrap();
    for i in 0..10 {
        fs::create_dir_all(home.path().join(format!("code/p{i}"))).unwrap();
    }

    tinyclean(&home)
        .args(["scan", "-apps=false", "-caches=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 more (use --verbose to see all)"));

    tinyclean(&home)
        .args(["--verbose", "scan", "-apps=false", "-caches=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total candidates: 10"))
        .stdout(predicate::str::contains("more (use --verbose").not());
}

#[test]
fn test_config_file_sets_defaults() {
    let home = TempDir::new().unwrap();
    let cfg_dir = home.path().join(".tinyclean");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(
        cfg_dir.join("config.toml"),
        "stale_days = 120\nproject_paths = [\"~/work\"]\n",
    )
    .unwrap();
    fs::create_dir_all(home.path().join("work/thing")).unwrap();

    tinyclean(&home)
        .args(["scan", "-apps=false", "-caches=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("days=120"))
        .stdout(predicate::str::contains("work/thing"));
}
