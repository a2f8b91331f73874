// File: crates/barchart-core/tests/mapper.rs
// Purpose: Validate pointer-fraction to bar-index mapping and its edge cases.

use barchart_core::pointer::{hover_fraction_for, index_for};
use barchart_core::types::POINTER_NONE;

#[test]
fn empty_series_never_maps() {
    for f in [-1.0, 0.0, 0.25, 0.5, 0.99, 1.0, 2.0] {
        assert_eq!(index_for(f, 0), None);
    }
}

#[test]
fn sentinel_never_maps() {
    for n in [1, 3, 7, 100] {
        assert_eq!(index_for(POINTER_NONE, n), None);
    }
}

#[test]
fn fractions_clamp_into_bounds() {
    // exactly 1.0 would floor to n; must clamp to the last bar
    assert_eq!(index_for(1.0, 7), Some(6));
    assert_eq!(index_for(1.5, 7), Some(6));
    // negative (non-sentinel) fractions clamp to the first bar
    assert_eq!(index_for(-0.25, 7), Some(0));
    assert_eq!(index_for(0.0, 7), Some(0));
}

#[test]
fn hover_fraction_round_trips() {
    for n in 1..=40usize {
        for i in 0..n {
            let f = hover_fraction_for(i, n);
            assert_eq!(index_for(f, n), Some(i), "round trip failed for i={i}, n={n}");
        }
    }
}

#[test]
fn hover_fraction_of_empty_series_is_zero() {
    assert_eq!(hover_fraction_for(0, 0), 0.0);
    assert_eq!(hover_fraction_for(5, 0), 0.0);
}

#[test]
fn drag_sweep_is_monotone() {
    let n = 7;
    let mut last = 0usize;
    let mut seen_first = false;
    for k in 0..100 {
        let f = k as f64 / 100.0;
        let i = index_for(f, n).expect("in-range fraction maps");
        if seen_first {
            assert!(i >= last, "index regressed from {last} to {i} at fraction {f}");
        }
        last = i;
        seen_first = true;
    }
    assert_eq!(index_for(0.0, n), Some(0));
    assert_eq!(index_for(0.99, n), Some(6));
}
