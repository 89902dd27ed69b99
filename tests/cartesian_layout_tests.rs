use approx::assert_relative_eq;
use microchart_rs::api::{
    ChartBase, ChartConfig, YAxisConfig, compute_cartesian_layout, y_label_height,
};
use microchart_rs::core::{Entry, ValueRange, VerticalScale, Viewport};
use microchart_rs::render::{RecordingSurface, TextMetrics};

fn monospace() -> RecordingSurface {
    RecordingSurface::with_metrics(TextMetrics::Monospace { advance_px: 10.0 })
}

fn hidden_y_labels() -> YAxisConfig {
    YAxisConfig {
        show_labels: false,
        ..YAxisConfig::default()
    }
}

fn base(config: ChartConfig, collection: Vec<Vec<Entry>>) -> ChartBase {
    let mut base = ChartBase::new(config);
    base.entries = collection;
    base
}

fn series(values: &[f64]) -> Vec<Entry> {
    values.iter().copied().map(Entry::new).collect()
}

#[test]
fn zero_line_sits_at_top_when_every_value_is_negative() {
    let scale = VerticalScale::new(ValueRange::new(-50.0, -10.0), 20.0, 200.0);
    assert_relative_eq!(scale.zero_line_origin(), 20.0);
}

#[test]
fn zero_line_sits_at_bottom_when_every_value_is_positive() {
    let scale = VerticalScale::new(ValueRange::new(10.0, 50.0), 20.0, 200.0);
    assert_relative_eq!(scale.zero_line_origin(), 220.0);
}

#[test]
fn zero_line_splits_a_mixed_range_proportionally() {
    let scale = VerticalScale::new(ValueRange::new(-100.0, 400.0), 20.0, 200.0);
    assert_relative_eq!(scale.zero_line_origin(), 20.0 + 0.8 * 200.0);
}

#[test]
fn multi_series_layout_matches_hand_computed_geometry() {
    let config = ChartConfig::default().with_y_axis(hidden_y_labels());
    let base = base(config, vec![series(&[-100.0, 400.0]), series(&[0.0, 100.0])]);
    let surface = monospace();

    let layout = compute_cartesian_layout(&base, &surface, Viewport::new(300, 260));

    assert_relative_eq!(layout.header_height, 20.0);
    assert_relative_eq!(layout.footer_height, 20.0);
    assert_relative_eq!(layout.y_label_width, 0.0);
    assert_relative_eq!(layout.item_size.width, 120.0);
    assert_relative_eq!(layout.item_size.height, 200.0);
    assert_relative_eq!(layout.origin, 180.0);
    assert_eq!(layout.rows.len(), 6);

    let points = layout.points(&base.entries[0]);
    assert_relative_eq!(points[0].x, 80.0);
    assert_relative_eq!(points[1].x, 220.0);
    assert_relative_eq!(points[0].y, 220.0);
    assert_relative_eq!(points[1].y, 20.0);
}

#[test]
fn gridlines_are_spaced_forty_pixels_upwards_from_the_footer() {
    let config = ChartConfig::default().with_y_axis(hidden_y_labels());
    let base = base(config, vec![series(&[1.0]), series(&[2.0])]);
    let layout = compute_cartesian_layout(&base, &monospace(), Viewport::new(300, 260));

    let ys: Vec<f64> = layout.rows.iter().map(|row| row.y).collect();
    assert_eq!(ys, vec![220.0, 180.0, 140.0, 100.0, 60.0, 20.0]);
}

#[test]
fn header_is_reserved_for_value_labels_of_a_single_series_only() {
    let labelled = vec![
        Entry::new(100.0).with_value_label("100"),
        Entry::new(2000.0).with_value_label("2000"),
    ];
    let surface = monospace();
    let viewport = Viewport::new(400, 300);

    let single = base(ChartConfig::default(), vec![labelled.clone()]);
    let layout = compute_cartesian_layout(&single, &surface, viewport);
    assert_relative_eq!(layout.header_height, 20.0 + 40.0 + 20.0);

    let multi = base(ChartConfig::default(), vec![labelled.clone(), labelled]);
    let layout = compute_cartesian_layout(&multi, &surface, viewport);
    assert_relative_eq!(layout.header_height, 20.0);
}

#[test]
fn footer_reserves_a_label_row_for_a_single_labelled_series() {
    let entries = vec![Entry::new(1.0).with_label("a"), Entry::new(2.0)];
    let layout = compute_cartesian_layout(
        &base(ChartConfig::default(), vec![entries]),
        &monospace(),
        Viewport::new(400, 300),
    );
    assert_relative_eq!(layout.footer_height, 20.0 + 16.0 + 20.0);
}

#[test]
fn y_label_column_fits_the_widest_row_label() {
    let collection = vec![series(&[0.0, 100.0])];
    let layout = compute_cartesian_layout(
        &base(ChartConfig::default(), collection.clone()),
        &monospace(),
        Viewport::new(300, 260),
    );
    let texts: Vec<&str> = layout.y_labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["0°C", "16.7°C", "33.3°C", "50°C", "66.7°C", "83.3°C"]);
    assert_relative_eq!(layout.y_label_width, 70.0);

    let min_max = ChartConfig::default().with_y_axis(YAxisConfig {
        show_labels_on_all_rows: false,
        ..YAxisConfig::default()
    });
    let layout = compute_cartesian_layout(
        &base(min_max, collection),
        &monospace(),
        Viewport::new(300, 260),
    );
    let texts: Vec<&str> = layout.y_labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["0°C", "100°C"]);
    assert_relative_eq!(layout.y_label_width, 60.0);
}

#[test]
fn empty_collection_falls_back_to_five_item_slots() {
    let config = ChartConfig::default().with_y_axis(hidden_y_labels());
    let layout = compute_cartesian_layout(
        &base(config, Vec::new()),
        &monospace(),
        Viewport::new(320, 200),
    );
    assert_relative_eq!(layout.item_size.width, (320.0 - 6.0 * 20.0) / 5.0);
}

#[test]
fn y_label_height_adds_the_line_offset() {
    let height = y_label_height(&ChartConfig::default(), &monospace());
    assert_relative_eq!(height, 16.0 + 10.0);
}

#[test]
fn min_max_labels_survive_a_plot_too_short_for_gridlines() {
    let config = ChartConfig::default().with_y_axis(YAxisConfig {
        show_labels_on_all_rows: false,
        ..YAxisConfig::default()
    });
    let layout = compute_cartesian_layout(
        &base(config, vec![series(&[0.0, 100.0])]),
        &monospace(),
        Viewport::new(200, 50),
    );

    assert!(layout.rows.is_empty());
    let texts: Vec<&str> = layout.y_labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["0°C", "100°C"]);
    assert!(layout.y_labels.iter().all(|label| label.y == 10.0));
    assert_relative_eq!(layout.y_label_width, 60.0);
}
