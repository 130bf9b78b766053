use crate::{generate_args, EXPECTED_ROWS};
use tempfile::TempDir;
use tsdg::run_generate;

#[test]
fn test_generate_csv() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("metrics.csv");

    let summary = run_generate(&generate_args(output.clone())).unwrap();

    assert_eq!(summary.total_rows, EXPECTED_ROWS);
    assert_eq!(summary.metrics.unwrap().rows_written, EXPECTED_ROWS);

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len() as u64, EXPECTED_ROWS + 1);
    assert_eq!(
        lines[0],
        "timestamp,host,region,requests,latency,temperature,status"
    );
    assert!(lines[1].starts_with("2024-01-01T00:00:00Z,web-1,us-east,0,"));
    assert!(lines[4].starts_with("2024-01-01T00:00:00Z,web-2,eu-west,0,"));
    assert!(lines[5].starts_with("2024-01-01T00:00:10Z,web-1,us-east,1,"));
}

#[test]
fn test_generate_csv_without_header() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("metrics.csv");
    let mut args = generate_args(output.clone());
    args.no_header = true;

    run_generate(&args).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().count() as u64, EXPECTED_ROWS);
    assert!(content.starts_with("2024-01-01T00:00:00Z,"));
}

#[test]
fn test_same_seed_same_file() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.csv");
    let second = temp_dir.path().join("second.csv");

    run_generate(&generate_args(first.clone())).unwrap();
    run_generate(&generate_args(second.clone())).unwrap();

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_seed_override_changes_random_columns() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.csv");
    let second = temp_dir.path().join("second.csv");

    run_generate(&generate_args(first.clone())).unwrap();
    let mut args = generate_args(second.clone());
    args.seed = Some(7);
    let summary = run_generate(&args).unwrap();

    assert_eq!(summary.seed, 7);
    assert_ne!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("metrics.csv");
    let mut args = generate_args(output.clone());
    args.dry_run = true;

    let summary = run_generate(&args).unwrap();

    assert_eq!(summary.total_rows, EXPECTED_ROWS);
    assert!(summary.metrics.is_none());
    assert!(!output.exists());
}
