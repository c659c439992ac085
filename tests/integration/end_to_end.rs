// tests/integration/end_to_end.rs
use std::fs;

use clap::Parser;
use ext_counter::cli::Args;
use ext_counter_infra::read_report;
use ext_counter_shared_kernel::{ConfigurationError, ExtCounterError, MalformedInputError, RecordCount};

#[path = "../common/mod.rs"]
mod common;
use common::JobWorkspace;

fn args_for(ws: &JobWorkspace, extra: &[&str]) -> Args {
    let config = ws.config_path();
    let mut argv = vec!["ext_counter", "--config", config.to_str().expect("utf-8 path")];
    argv.extend_from_slice(extra);
    Args::parse_from(argv)
}

#[test]
fn reference_dataset_produces_sorted_report() {
    let ws = JobWorkspace::with_names(&["a.txt", "b.txt", "a.txt", "noext", "c.tar.gz"]);
    let output = ext_counter::run(&args_for(&ws, &["--jobs", "1"])).expect("pipeline succeeds");

    assert_eq!(ws.read_report(), "noextension,1\ntar,1\ntxt,2\n");
    assert_eq!(output.report_path, ws.report_path());
    assert_eq!(output.raw_records, 5);
    assert_eq!(output.distinct_records, 4);
}

#[test]
fn report_round_trips_through_reader() {
    let ws = JobWorkspace::with_names(&["x.rs", "y.rs", "z.md", "README", "Makefile", "img.PNG"]);
    let output = ext_counter::run(&args_for(&ws, &[])).expect("pipeline succeeds");

    let reread = read_report(&ws.report_path()).expect("report readable");
    assert_eq!(reread, output.counts);
    let total: RecordCount = reread.iter().map(|c| c.count).sum();
    assert_eq!(total, output.distinct_records as u64);
}

#[test]
fn empty_input_writes_empty_report() {
    let ws = JobWorkspace::with_input("");
    let output = ext_counter::run(&args_for(&ws, &[])).expect("pipeline succeeds");
    assert!(output.counts.is_empty());
    assert_eq!(ws.read_report(), "");
}

#[test]
fn previous_report_is_overwritten() {
    let ws = JobWorkspace::with_names(&["a.txt"]);
    fs::write(ws.report_path(), "stale,99\nold,1\n").expect("seed report");

    ext_counter::run(&args_for(&ws, &[])).expect("pipeline succeeds");
    assert_eq!(ws.read_report(), "txt,1\n");
}

#[test]
fn custom_report_name_is_honoured() {
    let ws = JobWorkspace::with_names(&["a.txt"]);
    let output = ext_counter::run(&args_for(&ws, &["--output-name", "counts.csv"])).expect("pipeline succeeds");
    assert_eq!(output.report_path, ws.path().join("counts.csv"));
    assert!(!ws.report_path().exists());
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let names: Vec<String> = (0..5_000).map(|i| format!("f{}.e{}", i % 1_700, i % 13)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let seq = JobWorkspace::with_names(&refs);
    let par = JobWorkspace::with_names(&refs);
    ext_counter::run(&args_for(&seq, &["--jobs", "1"])).expect("sequential run");
    ext_counter::run(&args_for(&par, &["--jobs", "4"])).expect("parallel run");

    assert_eq!(seq.read_report(), par.read_report());
}

#[test]
fn malformed_line_aborts_without_report() {
    let ws = JobWorkspace::with_input("{\"nm\":\"a.txt\"}\n{\"nm\": oops}\n{\"nm\":\"b.txt\"}\n");
    let err = ext_counter::run(&args_for(&ws, &[])).unwrap_err();

    let inner = err
        .chain()
        .find_map(|e| e.downcast_ref::<ExtCounterError>())
        .expect("typed error in chain");
    match inner.root() {
        ExtCounterError::MalformedInput(MalformedInputError::Json { line, .. }) => assert_eq!(*line, 2),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!ws.report_path().exists());
}

#[test]
fn missing_input_file_is_a_configuration_error() {
    let ws = JobWorkspace::with_names(&["a.txt"]);
    fs::remove_file(ws.path().join("files.json")).expect("remove input");

    let err = ext_counter::run(&args_for(&ws, &[])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigurationError>(),
        Some(ConfigurationError::InputNotFound { .. })
    ));
}
