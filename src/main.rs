//! # sleep-etl entry point
//!
//! ```text
//! main()
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Resolve config: defaults < --config file < flags
//!   ├─> Initialise logging (stderr, optional rotated files)
//!   └─> Run the ETL, print the summary, report the saved path
//! ```
//!
//! With no arguments it reads `Sleep_health_and_lifestyle_dataset.csv` and
//! writes `clean_sleep.csv` in the working directory.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Summary goes to stdout

mod cli;

use anyhow::{Context as _, Result};
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = cli.resolve_config()?;

    sleep_etl::logging::init(config.log_dir.as_deref()).context("Failed to initialise logging")?;

    cli::run(&config)
}
