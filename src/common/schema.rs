//! Chart configurations for the two benchmark result files
//!
//! Each [`ChartSchema`] lists the algorithm labels the harness emits for one
//! number format, in the order they are matched and plotted, together with
//! the titles shown on the chart.

/// A recognized algorithm label and its human readable title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
    /// Label as written by the harness in the label column
    pub label: &'static str,
    /// Title shown in the chart legend
    pub title: &'static str,
}

impl SeriesSpec {
    pub const fn new(label: &'static str, title: &'static str) -> Self {
        Self { label, title }
    }
}

/// One chart configuration: which labels to expect and where to read/write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSchema {
    /// Short name used in logs
    pub name: &'static str,
    /// Recognized series in priority (and plotting) order
    pub series: &'static [SeriesSpec],
    /// Title drawn above the chart
    pub title: &'static str,
    /// Default results file, relative to the working directory
    pub input_file: &'static str,
    /// Default image path, relative to the working directory
    pub output_file: &'static str,
}

impl ChartSchema {
    /// Finds the series a label belongs to, returning its index in [`ChartSchema::series`]
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.series.iter().position(|spec| spec.label == label)
    }
}

/// X-axis title shared by both charts
pub const X_AXIS_TITLE: &str = "Matrix Size (Square)";

/// Y-axis title shared by both charts
pub const Y_AXIS_TITLE: &str = "Microseconds to Multiply (100 Trial Avg)";

/// Integer (16 and 32-bit) matrix multiplication results
pub const FIXED_SCHEMA: ChartSchema = ChartSchema {
    name: "fixed",
    series: &[
        SeriesSpec::new("vanilla16", "Vanilla (16-Bit)"),
        SeriesSpec::new("vanilla32", "Vanilla (32-Bit)"),
        SeriesSpec::new("cacheblock16", "Cache-Aware (16-Bit)"),
        SeriesSpec::new("cacheblock32", "Cache-Aware (32-Bit)"),
        SeriesSpec::new("sse16", "SSE SIMD (16-Bit)"),
        SeriesSpec::new("sse32", "SSE SIMD (32-Bit)"),
    ],
    title: "Integer Matrix Multiplication Algorithms",
    input_file: "fixed_data.txt",
    output_file: "res/performance_fixed.png",
};

/// Single precision floating point matrix multiplication results
pub const FLOAT_SCHEMA: ChartSchema = ChartSchema {
    name: "float",
    series: &[
        SeriesSpec::new("vanilla", "Vanilla (Float)"),
        SeriesSpec::new("cacheblock", "Cache-Aware (Float)"),
        SeriesSpec::new("sse", "SSE SIMD (Float)"),
        SeriesSpec::new("avx", "AVX SIMD (Float)"),
        SeriesSpec::new("avxmla", "AVX SIMD MLA (Float)"),
    ],
    title: "Floating Point Matrix Multiplication Algorithms",
    input_file: "float_data.txt",
    output_file: "res/performance_float.png",
};
