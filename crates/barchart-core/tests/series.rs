// File: crates/barchart-core/tests/series.rs
// Purpose: Validate series model contracts and the shared-handle adapter.

use barchart_core::{ChartError, Series, SeriesSource, SharedSeries};

#[test]
fn max_of_empty_series_is_zero() {
    let s = Series::from_points(vec![]);
    assert_eq!(s.max_value(), 0.0);
    assert!(s.is_empty());
}

#[test]
fn max_picks_largest_value() {
    let s = Series::from_points(vec![8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0]);
    assert_eq!(s.max_value(), 54.0);
    assert_eq!(s.len(), 7);
}

#[test]
fn out_of_range_access_fails() {
    let s = Series::from_points(vec![1.0, 2.0]);
    assert_eq!(s.value_at(1), Ok(2.0));
    assert_eq!(
        s.value_at(2),
        Err(ChartError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert!(matches!(
        s.label_at(5),
        Err(ChartError::IndexOutOfRange { index: 5, len: 2 })
    ));
}

#[test]
fn label_lengths_must_match() {
    let err = Series::with_labels(vec![1.0, 2.0, 3.0], vec!["a".into()]);
    assert_eq!(
        err,
        Err(ChartError::LabelMismatch { labels: 1, points: 3 })
    );
}

#[test]
fn labels_are_empty_unless_given() {
    let bare = Series::from_points(vec![1.0, 2.0]);
    assert!(!bare.values_given());
    assert_eq!(bare.label_at(0), Ok(String::new()));

    let labeled = Series::with_labels(vec![1.0, 2.0], vec!["Q1".into(), "Q2".into()]).unwrap();
    assert!(labeled.values_given());
    assert_eq!(labeled.label_at(1), Ok("Q2".to_string()));
}

#[test]
fn shared_handle_sees_replacement() {
    let shared = SharedSeries::new(Series::from_points(vec![1.0, 2.0, 3.0]));
    let alias = shared.clone();
    assert_eq!(alias.len(), 3);

    shared.replace(Series::from_points(vec![9.0]));
    assert_eq!(alias.len(), 1);
    assert_eq!(alias.max_value(), 9.0);
    assert_eq!(alias.value_at(0), Ok(9.0));
}
