use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    Color, Path, Viewport, caption_height, label_alignment, radar_radius,
    resolve_absolute_range, spoke_angle, spoke_point, value_point,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, LineCap, LinearGradient, Paint, PointMode, StrokeStyle};

use super::caption::{CaptionText, draw_caption_labels};
use super::{Chart, ChartBase, ChartConfig, ChartKind};

/// Share of the entry alpha used by value rings and spokes.
const RADAR_ALPHA_FACTOR: f64 = 0.75;

/// Border, line and marker settings of a [`RadarChart`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarStyle {
    #[serde(default = "default_border_line_size")]
    pub border_line_size: f64,
    #[serde(default = "default_border_line_color")]
    pub border_line_color: Color,
    #[serde(default = "default_line_size")]
    pub line_size: f64,
    #[serde(default)]
    pub point_mode: PointMode,
    #[serde(default = "default_point_size")]
    pub point_size: f64,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            border_line_size: default_border_line_size(),
            border_line_color: default_border_line_color(),
            line_size: default_line_size(),
            point_mode: PointMode::Circle,
            point_size: default_point_size(),
        }
    }
}

fn default_border_line_size() -> f64 {
    2.0
}

fn default_border_line_color() -> Color {
    Color::from_rgba8(211, 211, 211, 110)
}

fn default_line_size() -> f64 {
    3.0
}

fn default_point_size() -> f64 {
    14.0
}

/// Radar (spider) chart of the first series: one spoke per entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadarChart {
    base: ChartBase,
    pub style: RadarStyle,
}

impl RadarChart {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            base: ChartBase::new(config),
            style: RadarStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: RadarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Chart for RadarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Radar
    }

    fn base(&self) -> &ChartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ChartBase {
        &mut self.base
    }

    fn validate(&self) -> ChartResult<()> {
        self.base.config.validate()?;
        for (name, size) in [
            ("border line size", self.style.border_line_size),
            ("line size", self.style.line_size),
            ("point size", self.style.point_size),
        ] {
            if !size.is_finite() || size < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "radar {name} must be finite and >= 0"
                )));
            }
        }
        self.style.border_line_color.validate()
    }

    fn draw_content(
        &self,
        surface: &mut dyn DrawingSurface,
        viewport: Viewport,
    ) -> ChartResult<()> {
        let entries = self.base.primary_series();
        if entries.is_empty() {
            return Ok(());
        }
        let config = &self.base.config;
        let style = self.style;

        let captions = caption_height(entries, config.label_text_size);
        let radius = radar_radius(viewport, config.margin, captions);
        let range = resolve_absolute_range(entries, self.base.value_range(), config.override_min);
        let center = viewport.center();
        let count = entries.len();
        trace!(radius, caption_height = captions, spokes = count, "radar layout");

        let border = Path::circle(center, radius + style.border_line_size / 2.0);
        surface.draw_stroked_path(
            &border,
            &Paint::Solid(style.border_line_color),
            StrokeStyle::new(style.border_line_size),
        )?;

        for (index, entry) in entries.iter().enumerate() {
            let angle = spoke_angle(index, count);
            let point = value_point(center, angle, radius, range, entry.value());
            let color = entry.color();
            let faded = color.with_alpha(color.alpha * RADAR_ALPHA_FACTOR);

            let spoke_end = value_point(center, angle, radius, range, range.max);
            surface.draw_line(
                point,
                spoke_end,
                style.border_line_color,
                style.border_line_size,
            )?;

            let ring = Path::circle(center, radius * range.ratio(entry.value()));
            surface.draw_stroked_path(
                &ring,
                &Paint::Solid(faded),
                StrokeStyle::new(style.border_line_size)
                    .with_dash(style.border_line_size, style.border_line_size * 2.0),
            )?;

            let line_stroke = StrokeStyle::new(style.line_size).with_cap(LineCap::Round);
            let from_center = LinearGradient::two_stop(center, color.with_alpha(0.0), point, faded);
            surface.draw_stroked_path(
                &Path::polyline(&[center, point]),
                &from_center.into(),
                line_stroke,
            )?;

            let next_index = (index + 1) % count;
            let next_entry = &entries[next_index];
            let next_point = value_point(
                center,
                spoke_angle(next_index, count),
                radius,
                range,
                next_entry.value(),
            );
            let to_next = LinearGradient::two_stop(point, color, next_point, next_entry.color());
            surface.draw_stroked_path(
                &Path::polyline(&[point, next_point]),
                &to_next.into(),
                line_stroke,
            )?;

            if style.point_mode != PointMode::None {
                surface.draw_point_marker(point, color, style.point_size, style.point_mode)?;
            }

            let anchor = spoke_point(
                center,
                angle,
                radius + config.label_text_size + style.point_size / 2.0,
            );
            draw_caption_labels(
                surface,
                config,
                CaptionText::of(entry),
                anchor,
                label_alignment(angle),
            )?;
        }
        Ok(())
    }
}
