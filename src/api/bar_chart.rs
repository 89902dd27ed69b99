use serde::{Deserialize, Serialize};

use crate::core::{CartesianLayout, Entry, Point, Rect, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, Paint, PointMode};

use super::cartesian::render_cartesian;
use super::{Chart, ChartBase, ChartConfig, ChartKind, PointStyle};

/// Bar settings of a [`BarChart`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    /// Opacity of the full-height slot behind each bar; `0` disables it.
    #[serde(default = "default_bar_area_alpha")]
    pub bar_area_alpha: u8,
    #[serde(default = "default_min_bar_height")]
    pub min_bar_height: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            bar_area_alpha: default_bar_area_alpha(),
            min_bar_height: default_min_bar_height(),
        }
    }
}

fn default_bar_area_alpha() -> u8 {
    32
}

fn default_min_bar_height() -> f64 {
    2.0
}

/// Bar chart: one bar per entry growing from the zero line.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    base: ChartBase,
    pub points: PointStyle,
    pub bars: BarStyle,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl BarChart {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            base: ChartBase::new(config),
            points: PointStyle {
                point_mode: PointMode::None,
                point_area_alpha: 0,
                ..PointStyle::default()
            },
            bars: BarStyle::default(),
        }
    }

    #[must_use]
    pub fn with_point_style(mut self, points: PointStyle) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_bar_style(mut self, bars: BarStyle) -> Self {
        self.bars = bars;
        self
    }

    fn draw_bars(
        &self,
        surface: &mut dyn DrawingSurface,
        layout: &CartesianLayout,
        entries: &[Entry],
        points: &[Point],
    ) -> ChartResult<()> {
        let width = layout.item_size.width;

        if self.bars.bar_area_alpha > 0 {
            for (entry, point) in entries.iter().zip(points) {
                let slot = Rect::new(
                    point.x - width / 2.0,
                    layout.header_height,
                    width,
                    layout.item_size.height,
                );
                let color = entry.color().with_alpha_u8(self.bars.bar_area_alpha);
                surface.draw_filled_rect(slot, &Paint::Solid(color))?;
            }
        }

        for (entry, point) in entries.iter().zip(points) {
            let bar = Rect::new(
                point.x - width / 2.0,
                layout.origin.min(point.y),
                width,
                (layout.origin - point.y).abs().max(self.bars.min_bar_height),
            );
            surface.draw_filled_rect(bar, &Paint::Solid(entry.color()))?;
        }
        Ok(())
    }
}

impl Chart for BarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
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
        if !self.bars.min_bar_height.is_finite() || self.bars.min_bar_height < 0.0 {
            return Err(ChartError::InvalidConfig(
                "minimum bar height must be finite and >= 0".to_owned(),
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
            |surface, layout, entries, points| self.draw_bars(surface, layout, entries, points),
        )
    }
}
