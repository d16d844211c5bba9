//! File parsing functionality for benchmark results
//!
//! This module handles loading the harness output and splitting it into [`Record`]s.
//! Fields are split on [`FIELD_SEPARATOR`] with no quoting or escaping support.

use crate::analysis::constants::{FIELD_SEPARATOR, HEADER_LINES};
use crate::common::Record;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Load the benchmark results file and split it into records
///
/// # Arguments
/// * `file_path` - Path to the results file (e.g. `fixed_data.txt`)
///
/// # Returns
/// * `Ok(Vec<Record>)` - One record per data line, header excluded
/// * `Err(ParsingError)` - If the file could not be read
pub fn load_records(file_path: &Path) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(file_path)?;
    let records = parse_records(&contents);
    debug!(
        path = %file_path.display(),
        records = records.len(),
        "loaded benchmark records"
    );
    Ok(records)
}

/// Split already loaded text into records, discarding the header line
pub fn parse_records(contents: &str) -> Vec<Record> {
    contents
        .lines()
        .enumerate()
        .skip(HEADER_LINES)
        .map(|(index, line)| Record::new(index + 1, split_fields(line)))
        .collect()
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(FIELD_SEPARATOR).map(str::to_owned).collect()
}
