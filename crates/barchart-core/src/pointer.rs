// File: crates/barchart-core/src/pointer.rs
// Summary: Pointer state and the continuous-fraction to bar-index mapper.

use crate::types::POINTER_NONE;

/// Horizontal pointer position as a fraction of the chart's drawable width,
/// or the sentinel when no pointer is active. One instance per chart; mutated
/// only by interaction events delivered in arrival order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    fraction: f64,
}

impl PointerState {
    pub const fn none() -> Self {
        Self { fraction: POINTER_NONE }
    }

    pub const fn at(fraction: f64) -> Self {
        Self { fraction }
    }

    pub fn is_none(&self) -> bool {
        self.fraction == POINTER_NONE
    }

    pub fn fraction(&self) -> Option<f64> {
        if self.is_none() { None } else { Some(self.fraction) }
    }

    /// Raw stored scalar, sentinel included.
    pub fn raw(&self) -> f64 {
        self.fraction
    }

    pub fn set(&mut self, fraction: f64) {
        self.fraction = fraction;
    }

    pub fn clear(&mut self) {
        self.fraction = POINTER_NONE;
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::none()
    }
}

/// Map a pointer fraction to a bar index, clamped into `[0, n-1]`.
/// `None` for an empty series or the sentinel.
#[inline]
pub fn index_for(fraction: f64, n: usize) -> Option<usize> {
    if n == 0 || fraction == POINTER_NONE {
        return None;
    }
    let i = (fraction * n as f64).floor() as i64;
    Some(i.clamp(0, n as i64 - 1) as usize)
}

/// Pointer fraction reported when hovering bar `index`: the bar's center,
/// so mapping it back through [`index_for`] round-trips to the same index.
#[inline]
pub fn hover_fraction_for(index: usize, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    (index as f64 + 0.5) / n as f64
}
