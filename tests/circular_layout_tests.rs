use approx::assert_relative_eq;
use microchart_rs::core::{
    CaptionSide, Entry, Viewport, gauge_line_width, gauge_ring_radius, layout_caption,
    partition_sectors, split_captions_by_count, split_captions_by_value,
};
use proptest::prelude::*;

fn entries(values: &[f64]) -> Vec<Entry> {
    values.iter().copied().map(Entry::new).collect()
}

fn positions(all: &[Entry], picked: &[&Entry]) -> Vec<usize> {
    picked
        .iter()
        .map(|entry| {
            all.iter()
                .position(|candidate| std::ptr::eq(candidate, *entry))
                .unwrap_or(usize::MAX)
        })
        .collect()
}

#[test]
fn value_split_keeps_the_entry_crossing_half_on_the_right() {
    let all = entries(&[2.0, 2.0, 4.0, 4.0]);
    let split = split_captions_by_value(&all);
    assert_eq!(positions(&all, &split.right), vec![0, 1, 2]);
    assert_eq!(positions(&all, &split.left), vec![3]);
}

#[test]
fn value_split_uses_magnitudes() {
    let all = entries(&[-6.0, 1.0, 1.0, 4.0]);
    let split = split_captions_by_value(&all);
    assert_eq!(positions(&all, &split.right), vec![0]);
    assert_eq!(positions(&all, &split.left), vec![3, 2, 1]);
}

#[test]
fn count_split_sends_the_larger_half_left() {
    let all = entries(&[1.0, 1.0, 1.0]);
    let split = split_captions_by_count(&all);
    assert_eq!(positions(&all, &split.right), vec![0]);
    assert_eq!(positions(&all, &split.left), vec![2, 1]);
}

#[test]
fn zero_sum_produces_no_sectors() {
    assert!(partition_sectors(&entries(&[0.0, 0.0])).is_empty());
    assert!(partition_sectors(&[]).is_empty());
}

#[test]
fn single_caption_entry_is_vertically_centered() {
    let entry = Entry::new(1.0).with_label("only");
    let viewport = Viewport::new(400, 300);
    let items = layout_caption(&[&entry], CaptionSide::Left, viewport, 20.0, 16.0);

    assert_eq!(items.len(), 1);
    assert_relative_eq!(items[0].swatch.center().y, 150.0);
    assert_relative_eq!(items[0].swatch.x, 20.0);
    assert_relative_eq!(items[0].text_anchor.x, 20.0 + 16.0 + 16.0 * 0.6);
}

#[test]
fn caption_rows_span_the_strip_from_top_to_bottom() {
    let all: Vec<Entry> = (0..3).map(|i| Entry::new(1.0).with_label(format!("e{i}"))).collect();
    let refs: Vec<&Entry> = all.iter().collect();
    let items = layout_caption(&refs, CaptionSide::Right, Viewport::new(400, 300), 20.0, 16.0);

    assert_eq!(items.len(), 3);
    assert_relative_eq!(items[0].swatch.y, 40.0);
    assert_relative_eq!(items[1].swatch.y, 40.0 + 102.0);
    assert_relative_eq!(items[2].swatch.bottom(), 300.0 - 40.0);
}

#[test]
fn gauge_rings_grow_outwards_by_two_line_widths() {
    let width = gauge_line_width(None, 120.0, 3);
    assert_relative_eq!(width, 15.0);
    assert_relative_eq!(gauge_ring_radius(0, width), 30.0);
    assert_relative_eq!(gauge_ring_radius(2, width), 90.0);
    assert_relative_eq!(gauge_line_width(Some(4.0), 120.0, 3), 4.0);
}

proptest! {
    #[test]
    fn sectors_cover_one_revolution_proportionally(
        values in prop::collection::vec(-100.0f64..100.0, 1..16)
    ) {
        let all = entries(&values);
        let sum: f64 = values.iter().map(|value| value.abs()).sum();
        prop_assume!(sum > 1e-6);

        let sectors = partition_sectors(&all);
        prop_assert_eq!(sectors.len(), values.len());
        prop_assert!(sectors[0].start.abs() < 1e-12);
        prop_assert!((sectors[sectors.len() - 1].end - 1.0).abs() < 1e-9);

        for (sector, value) in sectors.iter().zip(&values) {
            prop_assert!((sector.fraction() - value.abs() / sum).abs() < 1e-9);
        }
        for pair in sectors.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
