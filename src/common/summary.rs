//! Per-series summary table
//!
//! Renders a short ASCII overview of each extracted [`Series`] using the [`tabled`] crate,
//! printed after the chart has been written.

use crate::analysis::constants::matrix_size_at;
use crate::common::Series;
use tabled::{Table, Tabled};

/// Placeholder shown for statistics of an empty series
const NO_VALUE: &str = "-";

/// Represents one row of the summary table
#[derive(Debug, Clone, Tabled)]
pub struct SeriesSummary {
    #[tabled(rename = "Algorithm")]
    pub title: String,
    #[tabled(rename = "Points")]
    pub points: usize,
    /// Matrix sizes covered, e.g. "10-59"
    #[tabled(rename = "Sizes")]
    pub sizes: String,
    #[tabled(rename = "Min (us)")]
    pub min: String,
    #[tabled(rename = "Max (us)")]
    pub max: String,
    #[tabled(rename = "Mean (us)")]
    pub mean: String,
}

impl SeriesSummary {
    /// Summarizes a single series
    pub fn new(series: &Series) -> Self {
        let values = &series.values;
        let (sizes, min, max, mean) = match (values.iter().min(), values.iter().max()) {
            (Some(min), Some(max)) => {
                let total: i128 = values.iter().map(|&v| v as i128).sum();
                let mean = total as f64 / values.len() as f64;
                (
                    format!("{}-{}", matrix_size_at(0), matrix_size_at(values.len() - 1)),
                    min.to_string(),
                    max.to_string(),
                    format!("{:.2}", mean),
                )
            }
            _ => (
                NO_VALUE.to_string(),
                NO_VALUE.to_string(),
                NO_VALUE.to_string(),
                NO_VALUE.to_string(),
            ),
        };

        Self {
            title: series.spec.title.to_string(),
            points: values.len(),
            sizes,
            min,
            max,
            mean,
        }
    }
}

/// Formats the summary of all series as an ASCII table under the given title
pub fn format_summary_table(series: &[Series], title: &str) -> String {
    let rows: Vec<SeriesSummary> = series.iter().map(SeriesSummary::new).collect();
    let table = Table::new(rows).to_string();
    format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
}
