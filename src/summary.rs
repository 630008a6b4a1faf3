//! Descriptive summary of a cleaned table. Read-only.

use crate::error::Result;
use crate::pipeline::columns::{
    DAILY_STEPS, DBP, HAS_SLEEP_DISORDER, QUALITY_OF_SLEEP, SBP, SLEEP_DURATION, STRESS_LEVEL,
};
use crate::pipeline::values::has_column;
use polars::prelude::*;
use serde::Serialize;
use std::fmt;

/// Columns reported with min / median / max, in print order.
pub const SUMMARY_COLUMNS: [&str; 6] = [
    SLEEP_DURATION,
    QUALITY_OF_SLEEP,
    STRESS_LEVEL,
    DAILY_STEPS,
    SBP,
    DBP,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub name: String,
    pub min: Option<f64>,
    pub median: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub rows: usize,
    pub columns: usize,
    /// Whether the table carries `has_sleep_disorder` at all.
    #[serde(skip)]
    pub has_disorder_flag: bool,
    /// Mean of `has_sleep_disorder`, if the column exists and has values.
    pub disorder_rate: Option<f64>,
    pub stats: Vec<ColumnStats>,
}

pub fn summarize(df: &DataFrame) -> Result<Summary> {
    let has_disorder_flag = has_column(df, HAS_SLEEP_DISORDER);
    let disorder_rate = if has_disorder_flag {
        df.column(HAS_SLEEP_DISORDER)?
            .as_materialized_series()
            .mean()
    } else {
        None
    };

    let mut stats = Vec::new();
    for name in SUMMARY_COLUMNS {
        if !has_column(df, name) {
            continue;
        }
        let values = df
            .column(name)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let ca = values.f64()?;
        stats.push(ColumnStats {
            name: name.to_owned(),
            min: ca.min(),
            median: ca.median(),
            max: ca.max(),
        });
    }

    Ok(Summary {
        rows: df.height(),
        columns: df.width(),
        has_disorder_flag,
        disorder_rate,
        stats,
    })
}

fn fmt_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |v| v.to_string())
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== ETL Summary ===")?;
        writeln!(f, "Rows: {}", self.rows)?;
        write!(f, "Cols: {}", self.columns)?;
        match self.disorder_rate {
            Some(rate) => write!(
                f,
                "\nSleep disorder rate: {rate:.4} ({:.2}%)",
                rate * 100.0
            )?,
            None if self.has_disorder_flag => write!(f, "\nSleep disorder rate: n/a")?,
            None => {}
        }
        for stat in &self.stats {
            write!(
                f,
                "\n{} (min/median/max): {} {} {}",
                stat.name,
                fmt_stat(stat.min),
                fmt_stat(stat.median),
                fmt_stat(stat.max)
            )?;
        }
        Ok(())
    }
}
