//! # sleep-etl
//!
//! Batch cleaner for sleep health and lifestyle CSV exports. It turns an
//! inconsistently formatted raw table into an analysis-ready one with
//! predictable column names, types and value domains.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sleep_etl::config::EtlConfig;
//! use sleep_etl::driver::run_etl;
//!
//! # fn example() -> sleep_etl::error::Result<()> {
//! let outcome = run_etl(&EtlConfig::default())?;
//! println!("{}", outcome.summary);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`pipeline`]: the ordered cleaning stages, one file per stage
//! - [`summary`]: descriptive statistics over a cleaned table
//! - [`io`]: CSV loading and persistence
//! - [`driver`]: load → pipeline → summary → save
//! - [`config`]: input/output locations and optional extras
//! - [`error`]: fatal error types
//! - [`logging`]: `tracing` subscriber setup
//!
//! ## Bad values are not errors
//!
//! Unparsable numbers, malformed blood pressure readings, unknown genders and
//! implausible measurements all become nulls. Only load and save failures
//! abort a run.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod driver;
pub mod error;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod summary;
