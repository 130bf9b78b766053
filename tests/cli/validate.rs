use crate::{EXPECTED_ROWS, FIXTURE};
use std::path::PathBuf;
use tsdg::{run_validate, ValidateArgs};
use tsdg_core::ConfigError;

#[test]
fn test_validate_reports_sizes() {
    let summary = run_validate(&ValidateArgs {
        config: PathBuf::from(FIXTURE),
    })
    .unwrap();

    assert_eq!(summary.series, 4);
    assert_eq!(summary.timestamps, 6);
    assert_eq!(summary.total_rows, EXPECTED_ROWS);
    assert_eq!(summary.seed, 42);
    assert_eq!(
        summary.to_string(),
        "series: 4, timestamps: 6, total rows: 24, seed: 42"
    );
}

#[test]
fn test_validate_unknown_distribution() {
    let err = run_validate(&ValidateArgs {
        config: PathBuf::from("tests/fixtures/unknown_distribution.yaml"),
    })
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::UnknownDistribution(_))
    ));
    assert!(format!("{err:#}").contains("pareto"));
}

#[test]
fn test_validate_missing_file() {
    let err = run_validate(&ValidateArgs {
        config: PathBuf::from("tests/fixtures/does_not_exist.yaml"),
    })
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Io(_))
    ));
}
