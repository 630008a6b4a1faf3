//! The cleaning pipeline.
//!
//! Five stages run in a fixed order, each taking the table by value and
//! returning a new one:
//!
//! ```text
//! raw table
//!   │
//!   ├─> StandardizeColumns   headers → canonical snake_case
//!   ├─> ParseBloodPressure   "120/80" → sbp, dbp
//!   ├─> NormalizeCategories  gender, bmi_category, sleep_disorder
//!   ├─> DeriveFeatures       numeric coercion, ordinal buckets
//!   └─> CleanRecords         dedupe, unique person_id, range repair
//!   │
//! cleaned table
//! ```
//!
//! Later stages rely on the column names and types produced by earlier ones,
//! so the order in [`Stage::ALL`] is significant.

pub mod categories;
pub mod columns;
pub mod features;
pub mod fields;
pub mod records;
pub mod values;

use crate::error::Result;
use polars::prelude::DataFrame;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One transforming stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    StandardizeColumns,
    ParseBloodPressure,
    NormalizeCategories,
    DeriveFeatures,
    CleanRecords,
}

impl Stage {
    /// Stages in execution order.
    pub const ALL: [Self; 5] = [
        Self::StandardizeColumns,
        Self::ParseBloodPressure,
        Self::NormalizeCategories,
        Self::DeriveFeatures,
        Self::CleanRecords,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::StandardizeColumns => "standardize_columns",
            Self::ParseBloodPressure => "parse_blood_pressure",
            Self::NormalizeCategories => "normalize_categories",
            Self::DeriveFeatures => "derive_features",
            Self::CleanRecords => "clean_records",
        }
    }

    pub fn apply(self, df: DataFrame) -> Result<DataFrame> {
        match self {
            Self::StandardizeColumns => columns::standardize_columns(df),
            Self::ParseBloodPressure => fields::parse_blood_pressure(df),
            Self::NormalizeCategories => categories::normalize_categories(df),
            Self::DeriveFeatures => features::derive_features(df),
            Self::CleanRecords => records::clean_records(df),
        }
    }
}

/// Report generated after a pipeline run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub rows_before: usize,
    pub columns_before: usize,
    pub rows_after: usize,
    pub columns_after: usize,
    pub stages_applied: usize,
    pub duration: Duration,
}

impl RunReport {
    /// One-line description of the run.
    pub fn summary(&self) -> String {
        format!(
            "Pipeline completed: rows {} → {}, columns {} → {}, {} stages, {:.2}s",
            self.rows_before,
            self.rows_after,
            self.columns_before,
            self.columns_after,
            self.stages_applied,
            self.duration.as_secs_f64()
        )
    }
}

/// Run every stage in order.
///
/// # Errors
///
/// Only internal polars failures surface here; bad values become nulls.
pub fn run_pipeline(df: DataFrame) -> Result<(DataFrame, RunReport)> {
    let start = Instant::now();
    let rows_before = df.height();
    let columns_before = df.width();

    let mut df = df;
    let mut stages_applied = 0;
    for stage in Stage::ALL {
        debug!(stage = stage.name(), rows = df.height(), "Applying stage");
        df = stage.apply(df)?;
        stages_applied += 1;
    }

    let report = RunReport {
        rows_before,
        columns_before,
        rows_after: df.height(),
        columns_after: df.width(),
        stages_applied,
        duration: start.elapsed(),
    };
    info!("{}", report.summary());
    Ok((df, report))
}

/// Clean a raw table, discarding the report.
pub fn clean_table(df: DataFrame) -> Result<DataFrame> {
    run_pipeline(df).map(|(df, _)| df)
}
