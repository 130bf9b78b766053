//! Command-line interface for tsdg
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate a CSV file
//! tsdg generate --config metrics.yaml --output metrics.csv
//!
//! # Report what would be generated without writing anything
//! tsdg generate --config metrics.yaml --output metrics.jsonl --dry-run
//!
//! # Validate a configuration
//! tsdg validate --config metrics.yaml
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default: `info`).

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tsdg::{run_generate, run_validate, GenerateArgs, ValidateArgs};

#[derive(Parser)]
#[command(name = "tsdg")]
#[command(about = "Generate synthetic multi-series time-series data")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate rows and write them to a file
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Validate a configuration and report its size
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            let summary = run_generate(&args)?;
            println!("{summary}");
        }
        Commands::Validate { args } => {
            let summary = run_validate(&args)?;
            println!("{summary}");
        }
    }

    Ok(())
}
