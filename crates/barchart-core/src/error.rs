// File: crates/barchart-core/src/error.rs
// Summary: Error taxonomy for the chart core.

use thiserror::Error;

/// Failures raised by the core. `IndexOutOfRange` is a programmer error:
/// given correct clamping it is unreachable through the engine's public
/// surface and only fires on direct out-of-bounds series access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("labels length {labels} does not match points length {points}")]
    LabelMismatch { labels: usize, points: usize },
}

pub type ChartResult<T> = Result<T, ChartError>;
