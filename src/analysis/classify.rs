//! Routing of records into per-algorithm buckets
//!
//! Every record's label column is looked up in the active [`ChartSchema`]; the record
//! is appended to the bucket for that label. Buckets keep file order. An unknown
//! label stops classification immediately.

use crate::analysis::constants::LABEL_FIELD;
use crate::common::{Bucket, ChartSchema, Record};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while classifying records
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("INVALID METHOD{0}")]
    InvalidMethod(String),

    #[error("Line {line}: missing field {index}")]
    MissingField { line: usize, index: usize },
}

type Result<T> = core::result::Result<T, ClassifyError>;

/// Partition records into one bucket per series of `schema`
///
/// # Arguments
/// * `records` - Loaded records, in file order
/// * `schema` - Chart configuration listing the recognized labels
///
/// # Returns
/// * `Ok(Vec<Bucket>)` - One bucket per [`ChartSchema::series`] entry, in the same order
/// * `Err(ClassifyError)` - On the first record with an unknown or missing label
pub fn classify_records(records: Vec<Record>, schema: &ChartSchema) -> Result<Vec<Bucket>> {
    let mut buckets: Vec<Bucket> = schema.series.iter().copied().map(Bucket::new).collect();

    for record in records {
        let label = record
            .field(LABEL_FIELD)
            .ok_or(ClassifyError::MissingField {
                line: record.line,
                index: LABEL_FIELD,
            })?;

        let Some(position) = schema.position_of(label) else {
            return Err(ClassifyError::InvalidMethod(label.to_string()));
        };

        buckets[position].records.push(record);
    }

    for bucket in &buckets {
        debug!(label = bucket.spec.label, records = bucket.len(), "classified");
    }

    Ok(buckets)
}
