//! # matmul-perf-plots
//! Turns the text output of the matrix multiplication benchmark harness into
//! comparison line charts.
//!
//! The pipeline is linear: [`parsing`] loads the records, [`analysis::classify`]
//! sorts them into per-algorithm buckets, [`analysis::extract`] turns buckets into
//! timing series and [`common::plots`] draws the chart.
//! [`pipeline`] ties these together for the `performance-fixed` and
//! `performance-float` executables.

/// Loading of raw benchmark records from disk.
pub mod parsing;

/// Domain logic operating on loaded records.
pub mod analysis {
    /// Positional constants of the benchmark harness output.
    pub mod constants;

    /// Routing of records into per-label buckets.
    pub mod classify;

    /// Projection of buckets into numeric timing series.
    pub mod extract;

    pub use classify::{classify_records, ClassifyError};
    pub use extract::{extract_series, ExtractError};
}

/// Shared infrastructure: data structures, chart schemas, plotting and tables.
pub mod common {
    pub mod data_structures;
    pub mod plots;
    pub mod schema;
    pub mod summary;

    // Re-export commonly used items
    pub use data_structures::{Bucket, Record, Series};
    pub use plots::PlotError;
    pub use schema::{ChartSchema, SeriesSpec};
}

/// Output settings for a single run.
pub mod settings;

/// End to end execution of one chart configuration.
pub mod pipeline;

/// Command line front end shared by both executables.
pub mod cli;
