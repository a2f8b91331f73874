// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports the bar chart interaction engine API.

pub mod chart;
pub mod series;
pub mod pointer;
pub mod normalize;
pub mod layout;
pub mod magnify;
pub mod label;
pub mod types;
pub mod error;

pub use chart::{BarChart, ChartObserver, ChartOptions};
pub use error::{ChartError, ChartResult};
pub use label::{arrow_offset, label_offset};
pub use layout::{layout, LayoutMetrics};
pub use magnify::MagnifyController;
pub use normalize::normalize;
pub use pointer::{hover_fraction_for, index_for, PointerState};
pub use series::{Series, SeriesSource, SharedSeries};
pub use types::ScaleXY;
