// File: crates/barchart-core/src/normalize.rs
// Summary: Value-to-drawing-fraction normalization against the series maximum.

/// Map a raw value to a drawing fraction in `[0, 1]` relative to `max`.
/// A non-positive `max` yields 0.0 for every input, so an empty or all-zero
/// series renders flat bars instead of failing.
#[inline]
pub fn normalize(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}
