use assert_cmd::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
}

fn commit_on(dir: &Path, date: &str, message: &str) {
    commit_authored(dir, date, date, message);
}

fn commit_authored(dir: &Path, author_date: &str, commit_date: &str, message: &str) {
    assert!(Command::new("git")
        .args(["commit", "--allow-empty", "-m", message])
        .env("GIT_AUTHOR_DATE", format!("{author_date}T12:00:00+0000"))
        .env("GIT_COMMITTER_DATE", format!("{commit_date}T12:00:00+0000"))
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn preview_with(dir: &Path, backend: &str) -> String {
    let mut cmd = Command::cargo_bin("daylog").unwrap();
    cmd.arg("--repo")
        .arg(dir)
        .args(["--backend", backend, "preview"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

fn seeded_repo(dir: &Path) {
    init_git_repo(dir);
    commit_on(dir, "2025-01-01", "asd");
    commit_on(dir, "2025-01-01", "Merge pull request #1 from dev");
    commit_on(dir, "2025-01-02", "fix bug");
    commit_on(dir, "2025-01-02", "Fix bug");
    commit_on(dir, "2025-01-03", "add firewall level");
    commit_on(dir, "2025-01-03", "chore: bump deps");
}

const SEEDED_REPORT: &str = "2025-01-03\n- Add firewall level\n\n2025-01-02\n- Fix bug\n";

#[test]
fn generate_writes_changelog_from_git_history() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    seeded_repo(dir.path());

    let mut cmd = Command::cargo_bin("daylog").unwrap();
    cmd.current_dir(dir.path()).args(["--repo"]).arg(dir.path()).arg("generate");
    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stdout.contains("Generated"));
    assert!(stderr.contains("VERSION"));

    let written = fs::read_to_string(dir.path().join("docs/changelog.txt")).unwrap();
    assert_eq!(written, SEEDED_REPORT);
}

#[test]
fn gix_backend_matches_git_backend() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    seeded_repo(dir.path());

    assert_eq!(preview_with(dir.path(), "gix"), SEEDED_REPORT);
    assert_eq!(preview_with(dir.path(), "git"), SEEDED_REPORT);
}

#[test]
fn backends_join_multi_line_subjects() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    commit_on(dir.path(), "2025-01-01", "add scanner\nwith ports");

    let expected = "2025-01-01\n- Add scanner with ports\n";
    assert_eq!(preview_with(dir.path(), "git"), expected);
    assert_eq!(preview_with(dir.path(), "gix"), expected);
}

#[test]
fn backends_date_commits_by_author() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    commit_authored(dir.path(), "2025-01-01", "2025-01-05", "rebased feature");

    let expected = "2025-01-01\n- Rebased feature\n";
    assert_eq!(preview_with(dir.path(), "git"), expected);
    assert_eq!(preview_with(dir.path(), "gix"), expected);
}

#[test]
fn generate_copies_version_marker() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("history.log"), "2025-02-01|Add level\n").unwrap();
    fs::write(dir.path().join("VERSION"), "2.0.1\n").unwrap();

    let mut cmd = Command::cargo_bin("daylog").unwrap();
    cmd.current_dir(dir.path())
        .arg("--repo")
        .arg(dir.path())
        .arg("--log-file")
        .arg(dir.path().join("history.log"))
        .arg("generate");
    cmd.assert().success();

    assert_eq!(fs::read_to_string(dir.path().join("docs/VERSION")).unwrap(), "2.0.1\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("docs/changelog.txt")).unwrap(),
        "2025-02-01\n- Add level\n"
    );
}

#[test]
fn failing_log_source_writes_nothing() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }

    let mut cmd = Command::cargo_bin("daylog").unwrap();
    cmd.arg("--repo").arg(dir.path()).arg("generate");
    cmd.assert().failure();
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn preview_json_respects_max_days() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("history.log");
    fs::write(
        &log,
        "2025-03-03|third day\n2025-03-02|second day\n2025-03-01|first day\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("daylog").unwrap();
    cmd.arg("--repo")
        .arg(dir.path())
        .arg("--log-file")
        .arg(&log)
        .args(["--max-days", "2", "preview", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let days = v["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2025-03-03");
    assert_eq!(days[0]["changes"][0], "Third day");
    assert_eq!(v["max_days"], 2);
}

#[test]
fn config_file_extends_noise_rules() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("history.log");
    fs::write(&log, "2025-03-01|wip\n2025-03-01|Add scanner\n").unwrap();
    fs::write(
        dir.path().join("daylog.toml"),
        "[noise]\nexact = [\"wip\"]\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("daylog").unwrap();
    cmd.arg("--repo")
        .arg(dir.path())
        .arg("--log-file")
        .arg(&log)
        .arg("preview");
    let out = cmd.assert().success().get_output().stdout.clone();
    assert_eq!(String::from_utf8(out).unwrap(), "2025-03-01\n- Add scanner\n");
}

#[test]
fn classify_reports_each_subject() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("daylog").unwrap();
    cmd.arg("--repo")
        .arg(dir.path())
        .args(["classify", "chore: bump deps", "add port scanner"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("noise"));
    assert!(lines[1].contains("Add port scanner"));
}
