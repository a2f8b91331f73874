// File: crates/barchart-core/src/magnify.rs
// Summary: Idle/Active magnify state machine driving per-bar scale output.

use crate::pointer::{hover_fraction_for, index_for, PointerState};
use crate::types::{ScaleXY, POINTER_NONE};

/// Tracks which bar, if any, is magnified. Two observable states: Idle (no
/// active index, every bar at identity scale) and Active (one index selected,
/// scaled up, with its value/label surfaced by the engine).
///
/// Only the pointer is stored; the active index is derived from it on every
/// read, so a series replacement re-clamps the selection for free and a stale
/// index can never be read out of bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MagnifyController {
    pointer: PointerState,
}

impl MagnifyController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Continuous drag tracking; also the landing point for hover-derived
    /// magnify requests. A sentinel fraction (stale hover callback) is
    /// ignored rather than treated as a reset; resets come only from
    /// [`drag_end`](Self::drag_end) and [`hover_exit`](Self::hover_exit).
    /// Returns whether the request was accepted.
    pub fn drag_move(&mut self, fraction: f64) -> bool {
        if fraction == POINTER_NONE {
            return false;
        }
        self.pointer.set(fraction);
        true
    }

    /// End the gesture: back to Idle, pointer to sentinel.
    pub fn drag_end(&mut self) {
        self.pointer.clear();
    }

    /// Hover over bar `index` magnifies at that bar's center fraction.
    pub fn hover_enter(&mut self, index: usize, n: usize) -> bool {
        self.drag_move(hover_fraction_for(index, n))
    }

    /// Chart-level hover leave. Per-bar leave events arrive as sentinel
    /// [`drag_move`](Self::drag_move) requests and are ignored, so crossing
    /// from one bar to its neighbor never passes through Idle.
    pub fn hover_exit(&mut self) {
        self.drag_end();
    }

    /// Derived active selection, clamped against the current series length.
    pub fn active_index(&self, n: usize) -> Option<usize> {
        index_for(self.pointer.raw(), n)
    }

    pub fn is_active(&self, n: usize) -> bool {
        self.active_index(n).is_some()
    }

    /// Scale multiplier for bar `index`: `magnify` for the active bar,
    /// identity for every other. Pure in `(index, active selection)`.
    pub fn scale_for(&self, index: usize, n: usize, magnify: ScaleXY) -> ScaleXY {
        if self.active_index(n) == Some(index) {
            magnify
        } else {
            ScaleXY::IDENTITY
        }
    }
}
