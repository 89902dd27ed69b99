#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use microchart_rs::ChartError;
use microchart_rs::api::{Chart, DonutChart, LineChart, RadarChart};
use microchart_rs::core::{Color, Entry, Viewport};
use microchart_rs::render::{CairoSurface, DrawingSurface, TextStyle};

fn series() -> Vec<Entry> {
    vec![
        Entry::new(40.0)
            .with_label("North")
            .with_value_label("40")
            .with_color(Color::from_rgb8(0x26, 0x6d, 0xd3)),
        Entry::new(-10.0)
            .with_label("South")
            .with_value_label("-10")
            .with_color(Color::from_rgb8(0xd3, 0x26, 0x6d)),
        Entry::new(25.0)
            .with_label("East")
            .with_value_label("25")
            .with_color(Color::from_rgb8(0x90, 0xd5, 0x85)),
    ]
}

#[test]
fn cairo_surface_rejects_invalid_size() {
    let err = CairoSurface::new(0, 240).expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn pango_measures_non_empty_text() {
    let surface = CairoSurface::new(200, 100).expect("surface");
    let bounds = surface.measure_text("Label", &TextStyle::new(None, 16.0));
    assert!(bounds.width > 0.0);
    assert!(bounds.height > 0.0);
}

#[test]
fn charts_render_onto_an_image_surface() {
    let mut surface = CairoSurface::new(400, 300).expect("surface");
    let viewport = Viewport::new(400, 300);

    LineChart::default()
        .with_series(series())
        .render(&mut surface, viewport)
        .expect("line render");
    DonutChart::default()
        .with_hole_radius(0.4)
        .expect("hole radius")
        .with_series(series())
        .render(&mut surface, viewport)
        .expect("donut render");

    assert!(surface.image().is_some());
}

#[test]
fn charts_render_onto_an_external_context() {
    let image = ImageSurface::create(Format::ARgb32, 320, 320).expect("image");
    let context = Context::new(&image).expect("context");
    let mut surface = CairoSurface::from_context(context);

    RadarChart::default()
        .with_series(series())
        .render(&mut surface, Viewport::new(320, 320))
        .expect("radar render");

    assert!(surface.image().is_none());
    assert_eq!(surface.backend_name(), "cairo+pango+pangocairo");
}
