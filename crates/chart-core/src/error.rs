// File: crates/chart-core/src/error.rs
// Summary: Error type covering the parse boundary, surface acquisition, and chart construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The embedded payload is not valid JSON or not the expected shape.
    #[error("malformed chart data: {0}")]
    MalformedData(#[from] serde_json::Error),

    /// The value arrays do not all match the number of date labels.
    #[error("chart data length mismatch: {series} has {len} values for {expected} dates")]
    LengthMismatch {
        series: &'static str,
        len: usize,
        expected: usize,
    },

    /// A value is NaN or infinite and cannot be plotted.
    #[error("chart data contains a non-finite value in {series}[{index}]")]
    NonFiniteValue { series: &'static str, index: usize },

    /// The chart target exists but a 2D drawing surface could not be acquired.
    #[error("no 2D drawing surface available: {0}")]
    SurfaceUnavailable(String),

    /// The charting library failed while instantiating the chart.
    #[error("chart construction failed: {0}")]
    Construction(String),
}
