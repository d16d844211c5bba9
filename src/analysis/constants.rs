//! Positional constants describing the benchmark harness output format
//!
//! The harness writes one comma separated row per measurement. These constants
//! name the columns and offsets this crate relies on.

/// Number of leading lines (column headers) skipped before data rows.
pub const HEADER_LINES: usize = 1;

/// Column separator used by the harness.
pub const FIELD_SEPARATOR: char = ',';

/// Column holding the algorithm label (e.g. `vanilla16`).
pub const LABEL_FIELD: usize = 1;

/// Column holding the averaged multiplication time in microseconds.
pub const TIMING_FIELD: usize = 3;

/// Side length of the smallest square matrix measured.
///
/// The n-th row of a bucket corresponds to a matrix of side `n + MATRIX_SIZE_OFFSET`.
pub const MATRIX_SIZE_OFFSET: i64 = 10;

/// Matrix side length for the given position within a series.
#[inline]
pub fn matrix_size_at(position: usize) -> i64 {
    position as i64 + MATRIX_SIZE_OFFSET
}
