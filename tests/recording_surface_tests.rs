use microchart_rs::core::{Color, Point};
use microchart_rs::render::{
    DrawingSurface, RecordingSurface, TextHAlign, TextMetrics, TextPrimitive, TextStyle,
};

#[test]
fn empty_text_measures_zero() {
    let surface = RecordingSurface::new();
    let bounds = surface.measure_text("", &TextStyle::new(None, 16.0));
    assert_eq!(bounds.width, 0.0);
    assert_eq!(bounds.height, 0.0);
}

#[test]
fn estimated_metrics_grow_with_text_and_weight() {
    let surface = RecordingSurface::with_metrics(TextMetrics::Estimated);
    let style = TextStyle::new(None, 16.0);
    let short = surface.measure_text("12", &style).width;
    let long = surface.measure_text("1234", &style).width;
    let bold = surface.measure_text("1234", &style.clone().bold()).width;

    assert!(short > 0.0);
    assert!(long > short);
    assert!(bold > long);
}

#[test]
fn invalid_text_color_is_rejected() {
    let mut surface = RecordingSurface::new();
    let text = TextPrimitive::new(
        "x",
        0.0,
        0.0,
        TextStyle::new(None, 12.0),
        Color::rgba(1.0, 0.0, 0.0, f64::NAN),
        TextHAlign::Left,
    );
    assert!(surface.draw_text(&text).is_err());
    assert!(surface.commands().is_empty());
}

#[test]
fn drawing_calls_are_recorded_in_order() {
    let mut surface = RecordingSurface::new();
    surface.clear(Color::WHITE).expect("clear");
    surface
        .draw_line(Point::new(0.0, 0.0), Point::new(5.0, 5.0), Color::BLACK, 1.0)
        .expect("line");

    assert_eq!(surface.commands().len(), 2);
    assert_eq!(surface.take_commands().len(), 2);
    assert!(surface.commands().is_empty());
}
