//! Command handler integration tests.
//!
//! Each test loads a fixture configuration, runs a command handler the same
//! way the binary does, and inspects the written file.

mod csv_output;
mod jsonl_output;
mod validate;

use std::path::PathBuf;
use tsdg::GenerateArgs;

pub const FIXTURE: &str = "tests/fixtures/metrics.yaml";

/// Series (2 hosts x 2 regions) times timestamps (one minute at 10s).
pub const EXPECTED_ROWS: u64 = 24;

pub fn generate_args(output: PathBuf) -> GenerateArgs {
    GenerateArgs {
        config: PathBuf::from(FIXTURE),
        output,
        format: None,
        seed: None,
        no_header: false,
        dry_run: false,
    }
}
