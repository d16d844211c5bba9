//! Projection of buckets into timing series

use crate::analysis::constants::TIMING_FIELD;
use crate::common::{Bucket, Series};
use std::num::ParseIntError;
use thiserror::Error;

/// Errors that can occur while extracting timing values
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Line {line}: missing field {index}")]
    MissingField { line: usize, index: usize },

    #[error("Line {line}: invalid timing value '{value}': {source}")]
    InvalidTiming {
        line: usize,
        value: String,
        source: ParseIntError,
    },
}

type Result<T> = core::result::Result<T, ExtractError>;

/// Turn each bucket into a [`Series`] of its timing column
///
/// The returned series are in the same order as `buckets`, and each series has
/// exactly as many values as its bucket has records.
pub fn extract_series(buckets: &[Bucket]) -> Result<Vec<Series>> {
    buckets.iter().map(extract_bucket).collect()
}

fn extract_bucket(bucket: &Bucket) -> Result<Series> {
    let values = bucket
        .records
        .iter()
        .map(|record| {
            let raw = record
                .field(TIMING_FIELD)
                .ok_or(ExtractError::MissingField {
                    line: record.line,
                    index: TIMING_FIELD,
                })?;

            raw.trim()
                .parse::<i64>()
                .map_err(|source| ExtractError::InvalidTiming {
                    line: record.line,
                    value: raw.to_string(),
                    source,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Series {
        spec: bucket.spec,
        values,
    })
}
