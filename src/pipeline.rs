//! End to end execution: load → classify → extract → render

use crate::analysis::{classify_records, extract_series, ClassifyError, ExtractError};
use crate::common::plots::render_chart;
use crate::common::{ChartSchema, PlotError, Series};
use crate::parsing::{load_records, ParsingError};
use crate::settings::PlotSettings;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Parsing error: {0}")]
    Parsing(#[from] ParsingError),

    #[error("{0}")]
    Classify(#[from] ClassifyError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),
}

type Result<T> = core::result::Result<T, AnalysisError>;

/// Loads a results file and extracts one series per label of `schema`
///
/// Has no side effects besides reading `input`; running it twice on the same
/// file yields identical series.
pub fn analyze(input: &Path, schema: &ChartSchema) -> Result<Vec<Series>> {
    let records = load_records(input)?;
    let buckets = classify_records(records, schema)?;
    Ok(extract_series(&buckets)?)
}

/// Runs the full pipeline for one chart and writes the image
///
/// Nothing is written if the input contains an unknown label or a malformed row.
///
/// # Returns
/// The plotted series, in legend order.
pub fn run(schema: &ChartSchema, settings: &PlotSettings) -> Result<Vec<Series>> {
    let series = analyze(&settings.input, schema)?;
    render_chart(&series, schema, settings)?;
    info!(
        chart = schema.name,
        output = %settings.output.display(),
        "chart saved"
    );
    Ok(series)
}
