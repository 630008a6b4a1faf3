//! Column standardisation: known raw headers get canonical names, and every
//! header is normalised to lowercase `snake_case`.

use crate::error::Result;
use polars::prelude::*;
use std::collections::HashSet;
use tracing::info;

pub const PERSON_ID: &str = "person_id";
pub const GENDER: &str = "gender";
pub const AGE: &str = "age";
pub const SLEEP_DURATION: &str = "sleep_duration";
pub const QUALITY_OF_SLEEP: &str = "quality_of_sleep";
pub const STRESS_LEVEL: &str = "stress_level";
pub const PHYSICAL_ACTIVITY_LEVEL: &str = "physical_activity_level";
pub const HEART_RATE: &str = "heart_rate";
pub const DAILY_STEPS: &str = "daily_steps";
pub const BMI: &str = "bmi";
pub const BMI_CATEGORY: &str = "bmi_category";
pub const BLOOD_PRESSURE: &str = "blood_pressure";
pub const SLEEP_DISORDER: &str = "sleep_disorder";
pub const HAS_SLEEP_DISORDER: &str = "has_sleep_disorder";
pub const SBP: &str = "sbp";
pub const DBP: &str = "dbp";

/// Raw export headers and the identifiers they are renamed to.
pub const RENAME_MAP: &[(&str, &str)] = &[
    ("Quality of Sleep", QUALITY_OF_SLEEP),
    ("Sleep Duration", SLEEP_DURATION),
    ("Stress Level", STRESS_LEVEL),
    ("Physical Activity Level", PHYSICAL_ACTIVITY_LEVEL),
    ("Heart Rate", HEART_RATE),
    ("Daily Steps", DAILY_STEPS),
    ("Blood Pressure", BLOOD_PRESSURE),
    ("BMI Category", BMI_CATEGORY),
    ("Sleep Disorder", SLEEP_DISORDER),
    ("Person ID", PERSON_ID),
    ("Occupation", "occupation"),
    ("Gender", GENDER),
    ("Age", AGE),
    ("BMI", BMI),
];

/// Normalise a header: trim, hyphens to spaces, whitespace runs to a single
/// underscore, drop anything outside `[A-Za-z0-9_]`, lower-case.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.trim().chars() {
        if c.is_whitespace() || c == '-' {
            in_space = true;
            continue;
        }
        if in_space {
            out.push('_');
            in_space = false;
        }
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c.to_ascii_lowercase());
        }
    }
    if in_space {
        out.push('_');
    }
    out
}

/// Canonical identifier for a raw header.
pub fn canonical_name(raw: &str) -> String {
    let renamed = RENAME_MAP
        .iter()
        .find(|(from, _)| *from == raw)
        .map_or(raw, |(_, to)| *to);
    snake_case(renamed)
}

/// Make names unique, suffixing repeats with `_1`, `_2`, ...
fn dedupe_names(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for name in names {
        let base = if name.is_empty() {
            "column".to_owned()
        } else {
            name
        };
        let mut candidate = base.clone();
        let mut count = 0;
        while seen.contains(&candidate) {
            count += 1;
            candidate = format!("{base}_{count}");
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

pub fn standardize_columns(df: DataFrame) -> Result<DataFrame> {
    let raw: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let canonical = dedupe_names(raw.iter().map(|name| canonical_name(name)));

    let renamed = raw
        .iter()
        .zip(&canonical)
        .filter(|(old, new)| old != new)
        .count();

    // Renamed in place: headers such as `*` or `^a$` are not safe inside `col()`.
    let mut df = df;
    df.set_column_names(canonical.iter().map(String::as_str))?;

    info!(renamed, columns = df.width(), "Standardised column names");
    Ok(df)
}
