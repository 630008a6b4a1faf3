//! Record-level cleaning: duplicate removal, `person_id` uniqueness and
//! range repair.

use super::columns::{AGE, DAILY_STEPS, HEART_RATE, PERSON_ID, SLEEP_DURATION};
use super::values::has_column;
use crate::error::Result;
use polars::prelude::*;
use tracing::{debug, info};

/// Closed interval of plausible values for a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plausibility {
    pub column: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Plausibility {
    pub fn admits(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Null out values outside `[min, max]`; nulls stay null.
    fn repair(&self, df: &DataFrame) -> Result<Series> {
        let values = df
            .column(self.column)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let repaired: Float64Chunked = values
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| self.admits(*x)))
            .collect();
        Ok(repaired.with_name(self.column.into()).into_series())
    }
}

pub const PLAUSIBLE_RANGES: [Plausibility; 4] = [
    Plausibility {
        column: AGE,
        min: 0.0,
        max: 110.0,
    },
    Plausibility {
        column: SLEEP_DURATION,
        min: 0.0,
        max: 16.0,
    },
    Plausibility {
        column: HEART_RATE,
        min: 30.0,
        max: 220.0,
    },
    Plausibility {
        column: DAILY_STEPS,
        min: 0.0,
        max: 100_000.0,
    },
];

pub fn clean_records(df: DataFrame) -> Result<DataFrame> {
    let rows_in = df.height();
    let mut df = df
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;
    info!(removed = rows_in - df.height(), "Dropped duplicate rows");

    if has_column(&df, PERSON_ID) {
        let rows_before = df.height();
        df = df
            .lazy()
            .with_column(
                col(PERSON_ID)
                    .cast(DataType::String)
                    .str()
                    .strip_chars(lit(NULL))
                    .alias(PERSON_ID),
            )
            .filter(col(PERSON_ID).is_first_distinct())
            .collect()?;
        info!(
            removed = rows_before - df.height(),
            "Dropped rows with a repeated {PERSON_ID}"
        );
    } else {
        debug!("No {PERSON_ID} column, skipping uniqueness check");
    }

    for range in &PLAUSIBLE_RANGES {
        if !has_column(&df, range.column) {
            continue;
        }
        let before = df.column(range.column)?.null_count();
        let repaired = range.repair(&df)?;
        let nulled = repaired.null_count().saturating_sub(before);
        df.with_column(repaired)?;
        if nulled > 0 {
            info!(
                column = range.column,
                repaired = nulled,
                "Out-of-range values set to missing"
            );
        }
    }

    Ok(df)
}
