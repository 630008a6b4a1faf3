//! Composite field parsing: `blood_pressure` ("120/80") becomes numeric
//! `sbp` and `dbp` columns.

use super::columns::{BLOOD_PRESSURE, DBP, SBP};
use super::values::has_column;
use crate::error::Result;
use polars::prelude::*;
use regex::Regex;
use std::ops::RangeInclusive;
use tracing::{debug, info};

/// Whole-value pattern: two or three digits, a slash, two or three digits.
pub const BLOOD_PRESSURE_PATTERN: &str = r"^(\d{2,3})\s*/\s*(\d{2,3})$";

pub const SBP_RANGE: RangeInclusive<f64> = 70.0..=250.0;
pub const DBP_RANGE: RangeInclusive<f64> = 40.0..=150.0;

/// Splits "SBP/DBP" readings and applies the plausibility bounds.
#[derive(Debug, Clone)]
pub struct BloodPressureParser {
    pattern: Regex,
}

impl BloodPressureParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(BLOOD_PRESSURE_PATTERN)?,
        })
    }

    /// Parse one reading into `(sbp, dbp)`.
    ///
    /// A value that does not match yields `(None, None)`; a component outside
    /// its range is `None` on its own.
    pub fn parse(&self, raw: &str) -> (Option<f64>, Option<f64>) {
        let Some(caps) = self.pattern.captures(raw.trim()) else {
            return (None, None);
        };
        let component = |idx: usize, range: &RangeInclusive<f64>| {
            caps.get(idx)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .filter(|v| range.contains(v))
        };
        (component(1, &SBP_RANGE), component(2, &DBP_RANGE))
    }
}

pub fn parse_blood_pressure(df: DataFrame) -> Result<DataFrame> {
    if !has_column(&df, BLOOD_PRESSURE) {
        debug!("No {BLOOD_PRESSURE} column, skipping");
        return Ok(df);
    }

    let parser = BloodPressureParser::new()?;
    let readings = df
        .column(BLOOD_PRESSURE)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let (sbp, dbp): (Vec<Option<f64>>, Vec<Option<f64>>) = readings
        .str()?
        .into_iter()
        .map(|v| v.map_or((None, None), |raw| parser.parse(raw)))
        .unzip();

    let mut df = df;
    df.with_column(Series::new(SBP.into(), sbp))?;
    df.with_column(Series::new(DBP.into(), dbp))?;

    info!(
        sbp_missing = df.column(SBP)?.null_count(),
        dbp_missing = df.column(DBP)?.null_count(),
        "Parsed blood pressure"
    );
    Ok(df)
}
