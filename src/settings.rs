use crate::common::ChartSchema;
use std::path::PathBuf;

/// Lowest accepted output resolution, in dots per inch.
pub const MIN_DPI: u32 = 72;

/// Highest accepted output resolution, in dots per inch.
pub const MAX_DPI: u32 = 600;

/// Default output resolution, in dots per inch.
pub const DEFAULT_DPI: u32 = 300;

/// Settings for producing a single chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSettings {
    /// Benchmark results file to read.
    pub input: PathBuf,

    /// PNG file to write.
    pub output: PathBuf,

    /// Output resolution in dots per inch.
    /// The canvas is a fixed physical size, so this scales the pixel dimensions.
    pub dpi: u32,
}

impl PlotSettings {
    /// Creates settings using the default paths of the given schema.
    pub fn new(schema: &ChartSchema) -> Self {
        Self {
            input: PathBuf::from(schema.input_file),
            output: PathBuf::from(schema.output_file),
            dpi: DEFAULT_DPI,
        }
    }

    /// Sanitizes settings to acceptable values if they are out of range.
    pub fn sanitize(&mut self) {
        self.dpi = self.dpi.clamp(MIN_DPI, MAX_DPI);
    }
}
