use approx::assert_relative_eq;
use microchart_rs::core::{
    AbsoluteRange, Entry, ValueRange, resolve_absolute_range, resolve_value_range,
};
use proptest::prelude::*;

fn series(values: &[f64]) -> Vec<Entry> {
    values.iter().copied().map(Entry::new).collect()
}

#[test]
fn min_override_only_widens_the_range() {
    let collection = vec![series(&[100.0, 200.0, 300.0])];

    let inside = resolve_value_range(&collection, Some(150.0), None);
    assert_relative_eq!(inside.min, 100.0);
    assert_relative_eq!(inside.max, 300.0);

    let below = resolve_value_range(&collection, Some(50.0), None);
    assert_relative_eq!(below.min, 50.0);
    assert_relative_eq!(below.max, 300.0);
}

#[test]
fn max_override_only_widens_the_range() {
    let collection = vec![series(&[100.0, 200.0, 300.0])];

    let inside = resolve_value_range(&collection, None, Some(250.0));
    assert_relative_eq!(inside.max, 300.0);

    let above = resolve_value_range(&collection, None, Some(400.0));
    assert_relative_eq!(above.min, 100.0);
    assert_relative_eq!(above.max, 400.0);
}

#[test]
fn range_spans_every_series() {
    let collection = vec![
        series(&[2.0, 2.0]),
        series(&[4.0, 4.0]),
        series(&[6.0, 6.0]),
        series(&[8.0, 8.0]),
    ];
    let range = resolve_value_range(&collection, None, None);
    assert_eq!(range, ValueRange::new(2.0, 8.0));
}

#[test]
fn range_does_not_include_zero_implicitly() {
    let range = resolve_value_range(&[series(&[10.0, 20.0])], None, None);
    assert_relative_eq!(range.min, 10.0);
}

#[test]
fn empty_collection_still_honors_overrides() {
    let range = resolve_value_range(&[], Some(-5.0), Some(5.0));
    assert_eq!(range, ValueRange::new(-5.0, 5.0));

    let bare = resolve_value_range(&[], None, None);
    assert_eq!(bare, ValueRange::new(0.0, 0.0));
}

#[test]
fn degenerate_range_maps_every_value_to_the_middle() {
    let range = ValueRange::new(7.0, 7.0);
    assert_relative_eq!(range.ratio_from_max(7.0), 0.5);
    assert_relative_eq!(range.ratio_from_max(-100.0), 0.5);
}

#[test]
fn absolute_range_covers_magnitudes_and_zero() {
    let entries = series(&[-30.0, 10.0, 20.0]);
    let range = resolve_value_range(&[entries.clone()], None, None);
    let absolute = resolve_absolute_range(&entries, range, None);
    assert_eq!(absolute, AbsoluteRange { min: 0.0, max: 30.0 });
    assert_relative_eq!(absolute.ratio(-15.0), 0.5);
}

proptest! {
    #[test]
    fn overrides_never_shrink_the_computed_range(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..20),
        override_min in -2_000.0f64..2_000.0,
        override_max in -2_000.0f64..2_000.0,
    ) {
        let collection = vec![series(&values)];
        let plain = resolve_value_range(&collection, None, None);
        let widened = resolve_value_range(&collection, Some(override_min), Some(override_max));

        prop_assert!(widened.min <= plain.min);
        prop_assert!(widened.max >= plain.max);
        prop_assert_eq!(widened.min, plain.min.min(override_min));
        prop_assert_eq!(widened.max, plain.max.max(override_max));
    }

    #[test]
    fn ratio_from_max_stays_in_unit_interval_for_contained_values(
        min in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        factor in 0.0f64..=1.0,
    ) {
        let range = ValueRange::new(min, min + span);
        let ratio = range.ratio_from_max(min + factor * span);
        prop_assert!((-1e-9..=1.0 + 1e-9).contains(&ratio));
    }
}
