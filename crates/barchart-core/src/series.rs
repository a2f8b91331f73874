// File: crates/barchart-core/src/series.rs
// Summary: Series model (ordered values plus optional labels) and source adapters.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ChartError, ChartResult};

/// Read-side contract the engine consumes. Implemented by [`Series`] for
/// plain owned data and by [`SharedSeries`] for a shared handle the host
/// application replaces between render passes.
pub trait SeriesSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum of the series values, or 0.0 for an empty series.
    fn max_value(&self) -> f64;

    fn value_at(&self, index: usize) -> ChartResult<f64>;

    /// Label for `index`; empty when labels were not explicitly supplied.
    fn label_at(&self, index: usize) -> ChartResult<String>;

    /// Whether labels were explicitly supplied (vs. absent).
    fn values_given(&self) -> bool;
}

/// Ordered numeric series with optional parallel labels. Immutable once
/// constructed for a render pass; new data replaces the whole series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<f64>,
    labels: Vec<String>,
    values_given: bool,
}

impl Series {
    pub fn from_points(points: Vec<f64>) -> Self {
        Self { points, labels: Vec::new(), values_given: false }
    }

    /// Construct with explicit labels, enforcing the parallel-length
    /// invariant: label count must equal point count.
    pub fn with_labels(points: Vec<f64>, labels: Vec<String>) -> ChartResult<Self> {
        if labels.len() != points.len() {
            return Err(ChartError::LabelMismatch {
                labels: labels.len(),
                points: points.len(),
            });
        }
        Ok(Self { points, labels, values_given: true })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    fn check(&self, index: usize) -> ChartResult<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(ChartError::IndexOutOfRange { index, len: self.points.len() })
        }
    }
}

impl SeriesSource for Series {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn max_value(&self) -> f64 {
        self.points.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    fn value_at(&self, index: usize) -> ChartResult<f64> {
        self.check(index)?;
        Ok(self.points[index])
    }

    fn label_at(&self, index: usize) -> ChartResult<String> {
        self.check(index)?;
        if self.values_given {
            Ok(self.labels[index].clone())
        } else {
            Ok(String::new())
        }
    }

    fn values_given(&self) -> bool {
        self.values_given
    }
}

/// Shared handle to a [`Series`] that the host replaces wholesale when new
/// data arrives, mirroring an observed reactive data object. Engine reads go
/// through the handle, so a replacement is visible on the next access.
#[derive(Clone, Debug, Default)]
pub struct SharedSeries {
    inner: Rc<RefCell<Series>>,
}

impl SharedSeries {
    pub fn new(series: Series) -> Self {
        Self { inner: Rc::new(RefCell::new(series)) }
    }

    /// Replace the whole series. Active-selection re-clamping happens on the
    /// engine side when it next derives the selection.
    pub fn replace(&self, series: Series) {
        *self.inner.borrow_mut() = series;
    }

    pub fn snapshot(&self) -> Series {
        self.inner.borrow().clone()
    }
}

impl SeriesSource for SharedSeries {
    fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    fn max_value(&self) -> f64 {
        self.inner.borrow().max_value()
    }

    fn value_at(&self, index: usize) -> ChartResult<f64> {
        self.inner.borrow().value_at(index)
    }

    fn label_at(&self, index: usize) -> ChartResult<String> {
        self.inner.borrow().label_at(index)
    }

    fn values_given(&self) -> bool {
        self.inner.borrow().values_given()
    }
}
