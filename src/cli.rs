use crate::analysis::ClassifyError;
use crate::common::summary::format_summary_table;
use crate::common::{ChartSchema, Series};
use crate::pipeline::{self, AnalysisError};
use crate::settings::PlotSettings;
use argh::FromArgs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Plot matrix multiplication benchmark results
#[derive(FromArgs, Debug, Default)]
pub struct Args {
    /// benchmark results file (default depends on the chart)
    #[argh(option, short = 'i')]
    pub input: Option<PathBuf>,

    /// output PNG file (default depends on the chart)
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// output resolution in dots per inch (default: 300)
    #[argh(option, short = 'd')]
    pub dpi: Option<u32>,

    /// do not print the summary table
    #[argh(switch, short = 'q')]
    pub quiet: bool,
}

impl Args {
    /// Applies the command line overrides on top of the schema defaults
    pub fn into_settings(self, schema: &ChartSchema) -> PlotSettings {
        let mut settings = PlotSettings::new(schema);
        if let Some(input) = self.input {
            settings.input = input;
        }
        if let Some(output) = self.output {
            settings.output = output;
        }
        if let Some(dpi) = self.dpi {
            settings.dpi = dpi;
        }
        settings.sanitize();
        settings
    }
}

/// Entry point shared by the `performance-*` executables
pub fn main_for(schema: &ChartSchema) -> ExitCode {
    init_tracing();

    let args: Args = argh::from_env();
    let stdout = io::stdout();
    let stderr = io::stderr();
    match execute(schema, args, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Runs one chart and reports the outcome
///
/// Returns `Ok(true)` if the chart was written.
pub fn execute<O: Write, E: Write>(
    schema: &ChartSchema,
    args: Args,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let quiet = args.quiet;
    let settings = args.into_settings(schema);
    report(pipeline::run(schema, &settings), schema, quiet, out, err)
}

/// Writes the summary table on success, or the error on failure
///
/// An unknown algorithm label is reported on `out`, like the summary; every
/// other error goes to `err`.
pub fn report<O: Write, E: Write>(
    outcome: Result<Vec<Series>, AnalysisError>,
    schema: &ChartSchema,
    quiet: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    match outcome {
        Ok(series) => {
            if !quiet {
                writeln!(out, "{}", format_summary_table(&series, schema.title))?;
            }
            Ok(true)
        }
        Err(e @ AnalysisError::Classify(ClassifyError::InvalidMethod(_))) => {
            writeln!(out, "{}", e)?;
            Ok(false)
        }
        Err(e) => {
            writeln!(err, "{}", e)?;
            Ok(false)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
