use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::JobWorkspace;

// The logger may target either stream; search both.
fn combined_output(output: &std::process::Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_ext_counter"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ext_counter"));
}

#[test]
fn logs_one_line_per_extension_in_order() {
    let ws = JobWorkspace::with_names(&["a.txt", "b.txt", "a.txt", "noext", "c.tar.gz"]);
    let assert = Command::new(env!("CARGO_BIN_EXE_ext_counter"))
        .args(["--config", ws.config_path().to_str().expect("utf-8 path")])
        .assert()
        .success();

    let logs = combined_output(assert.get_output());
    let summary: Vec<&str> = logs
        .lines()
        .filter(|l| l.contains("ext_counter::summary"))
        .filter_map(|l| l.rsplit("] ").next())
        .collect();
    assert_eq!(summary, vec!["noextension: 1", "tar: 1", "txt: 2"]);
    assert_eq!(ws.read_report(), "noextension,1\ntar,1\ntxt,2\n");
}

#[test]
fn missing_config_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let assert = Command::new(env!("CARGO_BIN_EXE_ext_counter")).current_dir(dir.path()).assert().failure();
    assert!(combined_output(assert.get_output()).contains("app-config.json"));
}

#[test]
fn malformed_input_fails_and_writes_nothing() {
    let ws = JobWorkspace::with_input("{\"nm\":\"a.txt\"}\nnot json\n");
    Command::new(env!("CARGO_BIN_EXE_ext_counter"))
        .args(["--config", ws.config_path().to_str().expect("utf-8 path")])
        .assert()
        .failure();
    assert!(!ws.report_path().exists());
}

#[test]
fn startup_reports_worker_count_and_summary_follows_report() {
    let ws = JobWorkspace::with_names(&["a.rs", "b.rs"]);
    let assert = Command::new(env!("CARGO_BIN_EXE_ext_counter"))
        .args(["--config", ws.config_path().to_str().expect("utf-8 path"), "--jobs", "1"])
        .assert()
        .success();

    let logs = combined_output(assert.get_output());
    assert!(logs.contains("jobs=1"), "missing worker count in: {logs}");
    assert!(!logs.contains("parallel="));

    let wrote = logs.find("wrote 1 extension rows").expect("report write is logged");
    let summary = logs.find("rs: 2").expect("summary is logged");
    assert!(wrote < summary, "summary logged before the report was written");
}
