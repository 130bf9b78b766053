use crate::{generate_args, EXPECTED_ROWS};
use tempfile::TempDir;
use tsdg::{run_generate, OutputFormat};

#[test]
fn test_generate_jsonl_from_extension() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("metrics.jsonl");

    run_generate(&generate_args(output.clone())).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len() as u64, EXPECTED_ROWS);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["timestamp"], "2024-01-01T00:00:00Z");
    assert_eq!(first["host"], "web-1");
    assert_eq!(first["region"], "us-east");
    assert_eq!(first["requests"], 0);
    assert_eq!(first["temperature"], 20.0);
    assert!(lines[0].starts_with(r#"{"timestamp":"#));
}

#[test]
fn test_explicit_format_overrides_extension() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("metrics.out");
    let mut args = generate_args(output.clone());
    args.format = Some(OutputFormat::Jsonl);

    run_generate(&args).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    for line in content.lines() {
        let json: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(json.is_object());
    }
}
