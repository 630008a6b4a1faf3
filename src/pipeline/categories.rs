//! Free-text categorical columns mapped onto a fixed vocabulary.

use super::columns::{BMI_CATEGORY, GENDER, HAS_SLEEP_DISORDER, SLEEP_DISORDER};
use super::values::{collapse_synonym, has_column, map_text, title_case};
use crate::error::Result;
use polars::prelude::*;
use tracing::{debug, info};

/// Sentinel for "no sleep disorder", also used for missing values.
pub const NO_DISORDER: &str = "None";

pub const BMI_SYNONYMS: &[(&str, &str)] = &[
    ("Normal Weight", "Normal"),
    ("Over Weight", "Overweight"),
];

pub const DISORDER_SYNONYMS: &[(&str, &str)] = &[
    ("No", NO_DISORDER),
    ("No Disorder", NO_DISORDER),
    ("None", NO_DISORDER),
    ("Sleep Apnoea", "Sleep Apnea"),
    ("Nan", NO_DISORDER),
];

/// `M`, `F` or missing.
pub fn normalize_gender(value: Option<&str>) -> Option<String> {
    match value?.trim().to_uppercase().as_str() {
        "M" | "MALE" => Some("M".to_owned()),
        "F" | "FEMALE" => Some("F".to_owned()),
        _ => None,
    }
}

pub fn normalize_bmi_category(value: Option<&str>) -> Option<String> {
    value.map(|v| collapse_synonym(title_case(v.trim()), BMI_SYNONYMS))
}

/// Never missing: absent or blank values become [`NO_DISORDER`].
pub fn normalize_sleep_disorder(value: Option<&str>) -> String {
    let trimmed = value.map(str::trim).filter(|v| !v.is_empty());
    collapse_synonym(
        title_case(trimmed.unwrap_or(NO_DISORDER)),
        DISORDER_SYNONYMS,
    )
}

pub fn normalize_categories(df: DataFrame) -> Result<DataFrame> {
    let mut df = df;

    if has_column(&df, GENDER) {
        let gender = map_text(&df, GENDER, normalize_gender)?;
        df.with_column(gender)?;
        info!(
            missing = df.column(GENDER)?.null_count(),
            "Normalised {GENDER}"
        );
    } else {
        debug!("No {GENDER} column, skipping");
    }

    if has_column(&df, BMI_CATEGORY) {
        let bmi = map_text(&df, BMI_CATEGORY, normalize_bmi_category)?;
        df.with_column(bmi)?;
        info!("Normalised {BMI_CATEGORY}");
    } else {
        debug!("No {BMI_CATEGORY} column, skipping");
    }

    if has_column(&df, SLEEP_DISORDER) {
        let disorder = map_text(&df, SLEEP_DISORDER, |v| {
            Some(normalize_sleep_disorder(v))
        })?;
        df.with_column(disorder)?;

        df = df
            .lazy()
            .with_column(
                when(col(SLEEP_DISORDER).neq(lit(NO_DISORDER)))
                    .then(lit(1i32))
                    .otherwise(lit(0i32))
                    .alias(HAS_SLEEP_DISORDER),
            )
            .collect()?;
        info!("Normalised {SLEEP_DISORDER} and derived {HAS_SLEEP_DISORDER}");
    } else {
        debug!("No {SLEEP_DISORDER} column, skipping");
    }

    Ok(df)
}
