use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    CaptionSide, Path, Point, Viewport, circular_radius, gauge_line_width, gauge_ring_radius,
    gauge_sweep_degrees, point_on_circle, resolve_absolute_range, split_captions_by_count,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, LineCap, Paint, StrokeStyle, with_saved_state};

use super::caption::draw_caption;
use super::{Chart, ChartBase, ChartConfig, ChartKind};

/// Ring settings of a [`RadialGaugeChart`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialGaugeStyle {
    /// Ring stroke width; derived from the radius and entry count when unset.
    #[serde(default)]
    pub line_size: Option<f64>,
    #[serde(default = "default_line_area_alpha")]
    pub line_area_alpha: u8,
    /// Where every value arc starts; -90 is 12 o'clock.
    #[serde(default = "default_start_angle")]
    pub start_angle_degrees: f64,
}

impl Default for RadialGaugeStyle {
    fn default() -> Self {
        Self {
            line_size: None,
            line_area_alpha: default_line_area_alpha(),
            start_angle_degrees: default_start_angle(),
        }
    }
}

fn default_line_area_alpha() -> u8 {
    52
}

fn default_start_angle() -> f64 {
    -90.0
}

/// Concentric gauges, one ring per entry of the first series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadialGaugeChart {
    base: ChartBase,
    pub style: RadialGaugeStyle,
}

impl RadialGaugeChart {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            base: ChartBase::new(config),
            style: RadialGaugeStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: RadialGaugeStyle) -> Self {
        self.style = style;
        self
    }
}

impl Chart for RadialGaugeChart {
    fn kind(&self) -> ChartKind {
        ChartKind::RadialGauge
    }

    fn base(&self) -> &ChartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ChartBase {
        &mut self.base
    }

    fn validate(&self) -> ChartResult<()> {
        self.base.config.validate()?;
        if self
            .style
            .line_size
            .is_some_and(|size| !size.is_finite() || size <= 0.0)
        {
            return Err(ChartError::InvalidConfig(
                "gauge line size must be finite and > 0 when set".to_owned(),
            ));
        }
        if !self.style.start_angle_degrees.is_finite() {
            return Err(ChartError::InvalidConfig(
                "gauge start angle must be finite".to_owned(),
            ));
        }
        Ok(())
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

        let captions = split_captions_by_count(entries);
        draw_caption(surface, config, &captions.right, CaptionSide::Right, viewport)?;
        draw_caption(surface, config, &captions.left, CaptionSide::Left, viewport)?;

        let range = resolve_absolute_range(entries, self.base.value_range(), config.override_min);
        let outer_radius = circular_radius(viewport, config.margin);
        let line_width = gauge_line_width(self.style.line_size, outer_radius, entries.len());
        let start = self.style.start_angle_degrees.to_radians();
        trace!(
            min = range.min,
            max = range.max,
            line_width,
            rings = entries.len(),
            "radial gauge layout"
        );

        let center = viewport.center();
        let origin = Point::new(0.0, 0.0);
        with_saved_state(surface, |surface| {
            surface.translate(center.x, center.y)?;
            for (index, entry) in entries.iter().enumerate() {
                let radius = gauge_ring_radius(index, line_width);
                let color = entry.color();

                let background = Path::circle(origin, radius);
                surface.draw_stroked_path(
                    &background,
                    &Paint::Solid(color.with_alpha_u8(self.style.line_area_alpha)),
                    StrokeStyle::new(line_width),
                )?;

                let end = start + gauge_sweep_degrees(range, entry.value()).to_radians();
                let mut arc = Path::new();
                arc.move_to(point_on_circle(origin, radius, start))
                    .arc_to(origin, radius, start, end);
                surface.draw_stroked_path(
                    &arc,
                    &Paint::Solid(color),
                    StrokeStyle::new(line_width).with_cap(LineCap::Round),
                )?;
            }
            Ok(())
        })
    }
}
