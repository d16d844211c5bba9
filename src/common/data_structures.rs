use crate::analysis::constants::matrix_size_at;
use crate::common::schema::SeriesSpec;

/// A single data row of a benchmark results file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number within the source file
    pub line: usize,
    /// Raw comma separated fields, in file order
    pub fields: Vec<String>,
}

impl Record {
    /// Creates a record from a line number and its fields
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Returns the field at `index`, if the row has that many columns
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// All records sharing one algorithm label, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// The label and display title this bucket was collected for
    pub spec: SeriesSpec,
    /// Records in the order they appeared in the file
    pub records: Vec<Record>,
}

impl Bucket {
    /// Creates an empty bucket for the given series
    pub fn new(spec: SeriesSpec) -> Self {
        Self {
            spec,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Timing values extracted from one bucket
///
/// `values[i]` is the time (in microseconds) for a matrix of side
/// [`matrix_size_at(i)`](matrix_size_at).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    /// The label and display title of this series
    pub spec: SeriesSpec,
    /// Timing values in bucket order
    pub values: Vec<i64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pairs each value with its matrix size, suitable for plotting
    pub fn points(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(position, &value)| (matrix_size_at(position), value))
    }
}
