//! Value-level helpers shared by the stages.
//!
//! Everything here is total: bad input yields `None`, never an error.

use crate::error::Result;
use polars::prelude::*;

/// Parse free text as a float.
///
/// Surrounding whitespace is ignored. Empty, unparsable and non-finite text
/// (`NaN`, `inf`) all map to `None`.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Title-case text: the first letter of every alphabetic run is upper-cased
/// and the rest of the run lower-cased. Non-letters pass through.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Look a value up in a synonym table, falling back to the value itself.
pub fn collapse_synonym(value: String, synonyms: &[(&str, &str)]) -> String {
    synonyms
        .iter()
        .find(|(from, _)| *from == value)
        .map_or(value, |(_, to)| (*to).to_owned())
}

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// Rebuild a column as text by running `f` over every value.
pub(crate) fn map_text<F>(df: &DataFrame, name: &str, f: F) -> Result<Series>
where
    F: Fn(Option<&str>) -> Option<String>,
{
    let text = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let mapped: StringChunked = text.str()?.into_iter().map(f).collect();
    Ok(mapped.with_name(name.into()).into_series())
}

/// Coerce a column to `Float64`, turning anything unparsable into null.
pub(crate) fn to_numeric(df: &DataFrame, name: &str) -> Result<Series> {
    let column = df.column(name)?.as_materialized_series();
    let values: Float64Chunked = if matches!(column.dtype(), DataType::String) {
        column
            .str()?
            .into_iter()
            .map(|v| v.and_then(parse_numeric))
            .collect()
    } else {
        column
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| x.is_finite()))
            .collect()
    };
    Ok(values.with_name(name.into()).into_series())
}
