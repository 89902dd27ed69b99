use serde::{Deserialize, Serialize};

use crate::core::{CartesianLayout, Entry, LineMode, Point, Viewport, line_path};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, LineCap, LinearGradient, Paint, StrokeStyle};

use super::cartesian::render_cartesian;
use super::{Chart, ChartBase, ChartConfig, ChartKind, PointStyle};

/// Line settings of a [`LineChart`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    #[serde(default)]
    pub line_mode: LineMode,
    #[serde(default = "default_line_size")]
    pub line_size: f64,
    /// Opacity of the area under the line; `0` disables it.
    #[serde(default = "default_line_area_alpha")]
    pub line_area_alpha: u8,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_mode: LineMode::default(),
            line_size: default_line_size(),
            line_area_alpha: default_line_area_alpha(),
        }
    }
}

fn default_line_size() -> f64 {
    3.0
}

fn default_line_area_alpha() -> u8 {
    32
}

/// Line chart: points joined by a straight or spline line colored with a
/// horizontal gradient through the entry colors, over a translucent area.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    base: ChartBase,
    pub points: PointStyle,
    pub line: LineStyle,
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl LineChart {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            base: ChartBase::new(config),
            points: PointStyle {
                point_size: 10.0,
                point_area_alpha: 0,
                ..PointStyle::default()
            },
            line: LineStyle::default(),
        }
    }

    #[must_use]
    pub fn with_point_style(mut self, points: PointStyle) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    fn draw_series_line(
        &self,
        surface: &mut dyn DrawingSurface,
        layout: &CartesianLayout,
        entries: &[Entry],
        points: &[Point],
    ) -> ChartResult<()> {
        if points.len() < 2 || self.line.line_mode == LineMode::None {
            return Ok(());
        }

        if self.line.line_area_alpha > 0 {
            let area = line_path(points, self.line.line_mode, Some(layout.origin));
            let paint = entry_gradient(entries, points, Some(self.line.line_area_alpha));
            surface.draw_filled_path(&area, &paint, true)?;
        }

        let line = line_path(points, self.line.line_mode, None);
        let paint = entry_gradient(entries, points, None);
        let stroke = StrokeStyle::new(self.line.line_size).with_cap(LineCap::Round);
        surface.draw_stroked_path(&line, &paint, stroke)
    }
}

/// Horizontal gradient through every entry color, optionally re-alphaed.
fn entry_gradient(entries: &[Entry], points: &[Point], alpha: Option<u8>) -> Paint {
    let stops: Vec<_> = entries
        .iter()
        .zip(points)
        .map(|(entry, point)| {
            let color = alpha.map_or(entry.color(), |alpha| entry.color().with_alpha_u8(alpha));
            (point.x, color)
        })
        .collect();
    LinearGradient::horizontal(&stops).into()
}

impl Chart for LineChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn base(&self) -> &ChartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ChartBase {
        &mut self.base
    }

    fn validate(&self) -> ChartResult<()> {
        self.base.config.validate()?;
        self.points.validate()?;
        if !self.line.line_size.is_finite() || self.line.line_size <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "line size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn draw_content(
        &self,
        surface: &mut dyn DrawingSurface,
        viewport: Viewport,
    ) -> ChartResult<()> {
        render_cartesian(
            &self.base,
            self.points,
            surface,
            viewport,
            |surface, layout, entries, points| {
                self.draw_series_line(surface, layout, entries, points)
            },
        )
    }
}
