//! End-to-end run: load, clean, summarise, persist.

use crate::config::EtlConfig;
use crate::error::Result;
use crate::io::{load_table, save_table};
use crate::pipeline::{RunReport, run_pipeline};
use crate::summary::{Summary, summarize};
use std::path::PathBuf;
use tracing::info;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct EtlOutcome {
    pub summary: Summary,
    pub report: RunReport,
    pub output: PathBuf,
}

/// Run the whole ETL for `config`.
///
/// The cleaned table is only considered durable once this returns `Ok`.
///
/// # Errors
///
/// Fails if the input cannot be loaded or the output cannot be written.
pub fn run_etl(config: &EtlConfig) -> Result<EtlOutcome> {
    let raw = load_table(&config.input)?;
    let (mut cleaned, report) = run_pipeline(raw)?;
    let summary = summarize(&cleaned)?;

    let output = config.output_path();
    save_table(&mut cleaned, &output)?;

    if let Some(path) = &config.summary_json {
        let json = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        info!(path = %path.display(), "Wrote summary JSON");
    }

    Ok(EtlOutcome {
        summary,
        report,
        output,
    })
}
