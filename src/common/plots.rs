//! Plotting infrastructure for benchmark comparison charts
//!
//! This module draws one line per [`Series`] using the [`plotters`] crate and saves the
//! result as a PNG. The canvas has a fixed physical size of 6.4 x 4.8 inches; the
//! requested DPI decides its pixel dimensions, and line widths and fonts are given in
//! points so the chart looks the same at any resolution.

use crate::analysis::constants::MATRIX_SIZE_OFFSET;
use crate::common::schema::{X_AXIS_TITLE, Y_AXIS_TITLE};
use crate::common::{ChartSchema, Series};
use crate::settings::PlotSettings;
use plotters::prelude::*;
use std::fs;
use std::ops::Range;
use thiserror::Error;
use tracing::debug;

/// Canvas width in inches
pub const FIGURE_WIDTH_INCHES: f64 = 6.4;

/// Canvas height in inches
pub const FIGURE_HEIGHT_INCHES: f64 = 4.8;

/// Width of every series line, in points
pub const LINE_WIDTH_POINTS: f64 = 4.0;

/// Size of tick labels, axis titles and legend entries, in points
pub const LABEL_FONT_POINTS: f64 = 10.0;

/// Size of the chart title, in points
pub const TITLE_FONT_POINTS: f64 = 12.0;

const POINTS_PER_INCH: f64 = 72.0;

/// Line colors, assigned to series in order and reused after the last one
const SERIES_COLORS: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Axis ranges covering every point of every series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisRanges {
    /// Matrix sizes
    pub x: Range<i64>,
    /// Microseconds
    pub y: Range<i64>,
}

/// Converts a length in typographic points to pixels at the given resolution
///
/// Never returns less than one pixel.
pub fn points_to_pixels(points: f64, dpi: u32) -> u32 {
    (points * dpi as f64 / POINTS_PER_INCH).round().max(1.0) as u32
}

/// Pixel dimensions of the canvas at the given resolution
pub fn figure_size(dpi: u32) -> (u32, u32) {
    (
        (FIGURE_WIDTH_INCHES * dpi as f64).round() as u32,
        (FIGURE_HEIGHT_INCHES * dpi as f64).round() as u32,
    )
}

/// Computes axis ranges for the given series
///
/// The X-axis spans from [`MATRIX_SIZE_OFFSET`] to the last matrix size of the
/// longest series. The Y-axis always includes zero and leaves a 5% margin above
/// the slowest time. Empty input (or only empty series) yields a minimal non-empty
/// range so that drawing never fails.
pub fn axis_ranges(series: &[Series]) -> AxisRanges {
    let longest = series.iter().map(Series::len).max().unwrap_or(0);
    let x_min = MATRIX_SIZE_OFFSET;
    let x_max = (x_min + longest as i64 - 1).max(x_min + 1);

    let values = series.iter().flat_map(|s| s.values.iter().copied());
    let (y_min, y_max) = values.fold((0i64, 0i64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    // Span of two i64 values can exceed i64::MAX
    let span = y_max as i128 - y_min as i128;
    let padding = i64::try_from(span / 20).unwrap_or(i64::MAX).max(1);

    AxisRanges {
        x: x_min..x_max,
        y: y_min..y_max.saturating_add(padding),
    }
}

/// Draws all series onto a single line chart and saves it as a PNG
///
/// # Arguments
/// * `series` - Series to draw, in legend order
/// * `schema` - Chart configuration providing the title
/// * `settings` - Output path and resolution
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Chart Properties
/// * Resolution: 6.4 x 4.8 inches at `settings.dpi` (1920x1440 at 300 DPI)
/// * X-axis: matrix size, starting at [`MATRIX_SIZE_OFFSET`]
/// * Y-axis: microseconds per multiplication
/// * One line per series with a legend in the upper left corner
///
/// The parent directory of the output path is created if missing.
pub fn render_chart(series: &[Series], schema: &ChartSchema, settings: &PlotSettings) -> Result<()> {
    if let Some(parent) = settings.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let dpi = settings.dpi;
    let ranges = axis_ranges(series);
    let label_px = points_to_pixels(LABEL_FONT_POINTS, dpi);
    let title_px = points_to_pixels(TITLE_FONT_POINTS, dpi);
    let line_px = points_to_pixels(LINE_WIDTH_POINTS, dpi);
    debug!(?ranges, dpi, "rendering chart");

    let root = BitMapBackend::new(&settings.output, figure_size(dpi));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(schema.title, ("sans-serif", title_px))
        .margin(label_px)
        .x_label_area_size(label_px * 3)
        .y_label_area_size(label_px * 5)
        .build_cartesian_2d(ranges.x, ranges.y)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc(X_AXIS_TITLE)
        .y_desc(Y_AXIS_TITLE)
        .label_style(("sans-serif", label_px))
        .axis_desc_style(("sans-serif", label_px))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let legend_length = (label_px * 2) as i32;
    for (index, line) in series.iter().enumerate() {
        let style = SERIES_COLORS[index % SERIES_COLORS.len()].stroke_width(line_px);
        chart_context
            .draw_series(LineSeries::new(line.points(), style))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(line.spec.title)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_length, y)], style));
    }

    chart_context
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", label_px))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::schema::{FIXED_SCHEMA, FLOAT_SCHEMA};
    use crate::analysis::{classify_records, extract_series};
    use crate::common::SeriesSpec;
    use crate::parsing::parse_records;
    use rstest::rstest;

    fn series(values: Vec<i64>) -> Series {
        Series {
            spec: SeriesSpec::new("sse", "SSE SIMD (Float)"),
            values,
        }
    }

    #[rstest(dpi, expected,
        case(300, (1920, 1440)),
        case(100, (640, 480)),
        case(72, (461, 346))
    )]
    fn figure_size_scales_with_dpi(dpi: u32, expected: (u32, u32)) {
        assert_eq!(figure_size(dpi), expected);
    }

    #[rstest(points, dpi, expected,
        case(LINE_WIDTH_POINTS, 300, 17), // 16.67 rounds up
        case(LINE_WIDTH_POINTS, 72, 4),
        case(LABEL_FONT_POINTS, 300, 42),
        case(0.1, 72, 1)                  // Never thinner than one pixel
    )]
    fn point_conversion(points: f64, dpi: u32, expected: u32) {
        assert_eq!(points_to_pixels(points, dpi), expected);
    }

    #[test]
    fn axis_ranges_cover_longest_series() {
        let ranges = axis_ranges(&[series(vec![5, 10, 200]), series(vec![1, 2, 3, 4, 5])]);
        assert_eq!(ranges.x, 10..14);
        assert_eq!(ranges.y, 0..210);
    }

    #[test]
    fn axis_ranges_include_negative_values() {
        let ranges = axis_ranges(&[series(vec![-40, 0, 60])]);
        assert_eq!(ranges.y, -40..65);
    }

    #[rstest]
    #[case::max_only(vec![vec![i64::MAX]], 0..i64::MAX)]
    #[case::min_only(vec![vec![i64::MIN]], i64::MIN..461_168_601_842_738_790)]
    #[case::full_span(vec![vec![i64::MIN, i64::MAX]], i64::MIN..i64::MAX)]
    #[case::max_and_negative(vec![vec![i64::MAX], vec![-5]], -5..i64::MAX)]
    fn axis_ranges_with_extreme_timings(
        #[case] values: Vec<Vec<i64>>,
        #[case] expected: Range<i64>,
    ) {
        let input: Vec<Series> = values.into_iter().map(series).collect();
        let ranges = axis_ranges(&input);
        assert_eq!(ranges.y, expected);
        assert!(ranges.y.start < ranges.y.end);
    }

    #[test]
    fn axis_ranges_for_extracted_extreme_timings() {
        let text = "h\n0,vanilla16,1,9223372036854775807\n1,vanilla32,1,-5\n";
        let buckets = classify_records(parse_records(text), &FIXED_SCHEMA).unwrap();
        let extracted = extract_series(&buckets).unwrap();

        let ranges = axis_ranges(&extracted);
        assert_eq!(ranges.x, 10..11);
        assert_eq!(ranges.y, -5..i64::MAX);
    }

    #[test]
    fn axis_ranges_for_empty_series_are_not_empty() {
        for input in [vec![], vec![series(vec![])], vec![series(vec![]), series(vec![])]] {
            let ranges = axis_ranges(&input);
            assert_eq!(ranges.x, 10..11);
            assert_eq!(ranges.y, 0..1);
        }
    }

    #[test]
    fn axis_ranges_for_single_point() {
        let ranges = axis_ranges(&[series(vec![7])]);
        assert_eq!(ranges.x, 10..11);
        assert_eq!(ranges.y, 0..8);
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn render_chart_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = PlotSettings::new(&FLOAT_SCHEMA);
        settings.output = dir.path().join("res").join("performance_float.png");
        settings.dpi = 72;

        let data: Vec<Series> = FLOAT_SCHEMA
            .series
            .iter()
            .enumerate()
            .map(|(i, spec)| Series {
                spec: *spec,
                values: (0..20).map(|n| (n * n) as i64 * (i as i64 + 1)).collect(),
            })
            .collect();

        render_chart(&data, &FLOAT_SCHEMA, &settings).unwrap();
        assert!(settings.output.exists());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn render_chart_accepts_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = PlotSettings::new(&FIXED_SCHEMA);
        settings.output = dir.path().join("performance_fixed.png");
        settings.dpi = 72;

        let data: Vec<Series> = FIXED_SCHEMA
            .series
            .iter()
            .map(|spec| Series {
                spec: *spec,
                values: Vec::new(),
            })
            .collect();

        render_chart(&data, &FIXED_SCHEMA, &settings).unwrap();
        assert!(settings.output.exists());
    }
}
