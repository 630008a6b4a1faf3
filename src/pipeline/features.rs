//! Numeric coercion and ordinal bucket features.

use super::columns::{
    AGE, BMI, DAILY_STEPS, HEART_RATE, PHYSICAL_ACTIVITY_LEVEL, QUALITY_OF_SLEEP, SLEEP_DURATION,
    STRESS_LEVEL,
};
use super::values::{has_column, to_numeric};
use crate::error::Result;
use polars::prelude::*;
use tracing::{debug, info};

/// Columns coerced to `Float64` when present.
pub const NUMERIC_COLUMNS: [&str; 8] = [
    AGE,
    SLEEP_DURATION,
    QUALITY_OF_SLEEP,
    STRESS_LEVEL,
    PHYSICAL_ACTIVITY_LEVEL,
    HEART_RATE,
    DAILY_STEPS,
    BMI,
];

/// Fixed right-closed binning of a numeric column into labels.
///
/// `cuts` are the upper edges of every bucket but the last, so a value equal
/// to a cut belongs to the lower bucket. `labels` has one more entry than
/// `cuts`.
#[derive(Debug, Clone, Copy)]
pub struct Binning {
    pub source: &'static str,
    pub target: &'static str,
    pub cuts: &'static [f64],
    pub labels: &'static [&'static str],
}

impl Binning {
    pub fn label(&self, value: f64) -> Option<&'static str> {
        if value.is_nan() {
            return None;
        }
        let idx = self
            .cuts
            .iter()
            .position(|cut| value <= *cut)
            .unwrap_or(self.cuts.len());
        self.labels.get(idx).copied()
    }

    fn apply(&self, df: &DataFrame) -> Result<Series> {
        let values = df
            .column(self.source)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let labels: StringChunked = values
            .f64()?
            .into_iter()
            .map(|v| v.and_then(|v| self.label(v)))
            .collect();
        Ok(labels.with_name(self.target.into()).into_series())
    }
}

pub const SLEEP_DURATION_GROUPS: Binning = Binning {
    source: SLEEP_DURATION,
    target: "sleep_duration_group",
    cuts: &[5.0, 7.0, 9.0],
    labels: &["<5h", "5-7h", "7-9h", "9h+"],
};

pub const SLEEP_QUALITY_GROUPS: Binning = Binning {
    source: QUALITY_OF_SLEEP,
    target: "sleep_quality_group",
    cuts: &[4.0, 7.0],
    labels: &["Low", "Medium", "High"],
};

pub const STRESS_GROUPS: Binning = Binning {
    source: STRESS_LEVEL,
    target: "stress_group",
    cuts: &[3.0, 6.0],
    labels: &["Low", "Medium", "High"],
};

pub const BINNINGS: [Binning; 3] = [SLEEP_DURATION_GROUPS, SLEEP_QUALITY_GROUPS, STRESS_GROUPS];

pub fn derive_features(df: DataFrame) -> Result<DataFrame> {
    let mut df = df;

    let mut coerced = 0;
    for name in NUMERIC_COLUMNS {
        if !has_column(&df, name) {
            continue;
        }
        let before = df.column(name)?.null_count();
        let values = to_numeric(&df, name)?;
        let invalid = values.null_count().saturating_sub(before);
        df.with_column(values)?;
        if invalid > 0 {
            debug!(column = name, invalid, "Non-numeric values set to missing");
        }
        coerced += 1;
    }
    info!(columns = coerced, "Coerced numeric columns");

    for binning in &BINNINGS {
        if !has_column(&df, binning.source) {
            debug!("No {} column, skipping {}", binning.source, binning.target);
            continue;
        }
        let groups = binning.apply(&df)?;
        df.with_column(groups)?;
        info!("Derived {} from {}", binning.target, binning.source);
    }

    Ok(df)
}
