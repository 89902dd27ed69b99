use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    CartesianLayout, CartesianParams, Color, Entry, Point, Rect, Viewport, has_entries,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    DrawingSurface, LinearGradient, PointMode, TextHAlign, TextPrimitive, TextStyle,
    with_saved_state,
};

use super::{ChartBase, ChartConfig, LabelOverflow};

/// Gridline color of every Cartesian chart.
const GRID_LINE_COLOR: Color = Color::rgb(120.0 / 255.0, 120.0 / 255.0, 120.0 / 255.0);
const GRID_LINE_WIDTH: f64 = 1.0;
/// Smallest height of a point area so zero-height values stay visible.
const MIN_POINT_AREA_HEIGHT: f64 = 2.0;

/// Marker and area settings shared by point, line and bar charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    #[serde(default = "default_point_size")]
    pub point_size: f64,
    #[serde(default)]
    pub point_mode: PointMode,
    /// Opacity of the gradient area between the zero line and each point;
    /// `0` disables the area.
    #[serde(default = "default_point_area_alpha")]
    pub point_area_alpha: u8,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            point_size: default_point_size(),
            point_mode: PointMode::Circle,
            point_area_alpha: default_point_area_alpha(),
        }
    }
}

impl PointStyle {
    pub fn validate(self) -> ChartResult<()> {
        if !self.point_size.is_finite() || self.point_size < 0.0 {
            return Err(ChartError::InvalidConfig(
                "point size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_point_size() -> f64 {
    14.0
}

fn default_point_area_alpha() -> u8 {
    100
}

/// Height reserved for one y-axis label row: the measured height of `"0"`
/// plus the configured line offset.
#[must_use]
pub fn y_label_height(config: &ChartConfig, surface: &dyn DrawingSurface) -> f64 {
    let bounds = surface.measure_text("0", &config.text_style());
    bounds.height + f64::from(config.y_axis.lines_offset)
}

/// Measures the layout of `base` on `surface`.
#[must_use]
pub fn compute_cartesian_layout(
    base: &ChartBase,
    surface: &dyn DrawingSurface,
    viewport: Viewport,
) -> CartesianLayout {
    let config = &base.config;
    let style = config.text_style();
    let value_label_widths = measure_value_labels(base, surface, &style);
    let params = CartesianParams {
        margin: config.margin,
        label_text_size: config.label_text_size,
        y_labels: config.y_axis.label_mode(),
        y_unit: &config.y_axis.unit_measure,
    };

    CartesianLayout::compute(
        &base.entries,
        base.value_range(),
        viewport,
        params,
        &value_label_widths,
        |text| surface.measure_text(text, &style).width,
    )
}

/// Value-label widths of the primary series; empty unless exactly one series
/// is present.
fn measure_value_labels(
    base: &ChartBase,
    surface: &dyn DrawingSurface,
    style: &TextStyle,
) -> Vec<f64> {
    if !base.is_single_series() {
        return Vec::new();
    }
    base.primary_series()
        .iter()
        .map(|entry| {
            entry
                .visible_value_label()
                .map_or(0.0, |text| surface.measure_text(text, style).width)
        })
        .collect()
}

/// Shared driver of the Cartesian family.
///
/// Draws gridlines and y-axis labels, then for every series runs
/// `series_pass` (the chart-specific area/line/bar pass) followed by point
/// markers, category labels and, for a single series, value labels.
pub(crate) fn render_cartesian(
    base: &ChartBase,
    points_style: PointStyle,
    surface: &mut dyn DrawingSurface,
    viewport: Viewport,
    mut series_pass: impl FnMut(
        &mut dyn DrawingSurface,
        &CartesianLayout,
        &[Entry],
        &[Point],
    ) -> ChartResult<()>,
) -> ChartResult<()> {
    if !has_entries(&base.entries) {
        return Ok(());
    }

    let layout = compute_cartesian_layout(base, surface, viewport);
    trace!(
        header = layout.header_height,
        footer = layout.footer_height,
        y_label_width = layout.y_label_width,
        item_width = layout.item_size.width,
        item_height = layout.item_size.height,
        origin = layout.origin,
        rows = layout.rows.len(),
        "cartesian layout"
    );

    draw_grid_lines(surface, &layout, viewport)?;
    draw_y_labels(surface, &base.config, &layout)?;

    for series in &base.entries {
        let points = layout.points(series);
        series_pass(&mut *surface, &layout, series.as_slice(), points.as_slice())?;
        draw_point_markers(surface, &points, series, points_style)?;
        draw_category_labels(surface, &base.config, &layout, &points, series, viewport)?;
        if base.is_single_series() {
            draw_value_labels(surface, &base.config, &points, series)?;
        }
    }
    Ok(())
}

fn draw_grid_lines(
    surface: &mut dyn DrawingSurface,
    layout: &CartesianLayout,
    viewport: Viewport,
) -> ChartResult<()> {
    let left = layout.margin + layout.y_label_width;
    let right = viewport.width_px() - layout.margin;
    for row in &layout.rows {
        surface.draw_line(
            Point::new(left, row.y),
            Point::new(right, row.y),
            GRID_LINE_COLOR,
            GRID_LINE_WIDTH,
        )?;
    }
    Ok(())
}

fn draw_y_labels(
    surface: &mut dyn DrawingSurface,
    config: &ChartConfig,
    layout: &CartesianLayout,
) -> ChartResult<()> {
    let style = config.text_style();
    for label in &layout.y_labels {
        let bounds = surface.measure_text(&label.text, &style);
        surface.draw_text(&TextPrimitive::new(
            label.text.as_str(),
            config.margin,
            label.y + bounds.height / 2.0,
            style.clone(),
            config.y_axis.labels_color,
            TextHAlign::Left,
        ))?;
    }
    Ok(())
}

/// Vertical gradient bar between the zero line and each point.
pub(crate) fn draw_point_areas(
    surface: &mut dyn DrawingSurface,
    origin: f64,
    entries: &[Entry],
    points: &[Point],
    style: PointStyle,
) -> ChartResult<()> {
    if style.point_area_alpha == 0 {
        return Ok(());
    }
    for (entry, point) in entries.iter().zip(points) {
        let color = entry.color();
        let gradient = LinearGradient::two_stop(
            Point::new(0.0, origin),
            color.with_alpha_u8(style.point_area_alpha),
            Point::new(0.0, point.y),
            color.with_alpha_u8(style.point_area_alpha / 3),
        );
        let rect = Rect::new(
            point.x - style.point_size / 2.0,
            origin.min(point.y),
            style.point_size,
            (origin - point.y).abs().max(MIN_POINT_AREA_HEIGHT),
        );
        surface.draw_filled_rect(rect, &gradient.into())?;
    }
    Ok(())
}

fn draw_point_markers(
    surface: &mut dyn DrawingSurface,
    points: &[Point],
    entries: &[Entry],
    style: PointStyle,
) -> ChartResult<()> {
    if style.point_mode == PointMode::None {
        return Ok(());
    }
    for (entry, point) in entries.iter().zip(points) {
        surface.draw_point_marker(*point, entry.color(), style.point_size, style.point_mode)?;
    }
    Ok(())
}

/// Category labels centered under each point on the footer baseline.
fn draw_category_labels(
    surface: &mut dyn DrawingSurface,
    config: &ChartConfig,
    layout: &CartesianLayout,
    points: &[Point],
    entries: &[Entry],
    viewport: Viewport,
) -> ChartResult<()> {
    let style = config.text_style();
    let baseline = viewport.height_px() - config.margin + config.label_text_size / 2.0;
    for (entry, point) in entries.iter().zip(points) {
        let Some(label) = entry.visible_label() else {
            continue;
        };
        let (text, width) = fit_label(
            surface,
            label,
            &style,
            layout.item_size.width,
            config.label_overflow,
        );
        surface.draw_text(&TextPrimitive::new(
            text,
            point.x - width / 2.0,
            baseline,
            style.clone(),
            entry.text_color(),
            TextHAlign::Left,
        ))?;
    }
    Ok(())
}

/// Applies the overflow policy and returns the text to draw with its width.
fn fit_label(
    surface: &dyn DrawingSurface,
    label: &str,
    style: &TextStyle,
    max_width: f64,
    policy: LabelOverflow,
) -> (String, f64) {
    let mut text = label.to_owned();
    let mut width = surface.measure_text(&text, style).width;
    if policy == LabelOverflow::Truncate {
        for keep in [3, 1] {
            if width > max_width {
                text = label.chars().take(keep).collect();
                width = surface.measure_text(&text, style).width;
            }
        }
    }
    (text, width)
}

/// Value labels rotated a quarter turn, running down from the top margin
/// next to each point.
fn draw_value_labels(
    surface: &mut dyn DrawingSurface,
    config: &ChartConfig,
    points: &[Point],
    entries: &[Entry],
) -> ChartResult<()> {
    let style = config.text_style().bold();
    for (entry, point) in entries.iter().zip(points) {
        let Some(value_label) = entry.visible_value_label() else {
            continue;
        };
        let bounds = surface.measure_text(value_label, &style);
        let text = TextPrimitive::new(
            value_label,
            0.0,
            0.0,
            style.clone(),
            entry.color(),
            TextHAlign::Left,
        );
        with_saved_state(surface, |surface| {
            surface.rotate_degrees(90.0)?;
            surface.translate(config.margin, -point.x + bounds.height / 2.0)?;
            surface.draw_text(&text)
        })?;
    }
    Ok(())
}
