use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::cartesian::{draw_point_areas, render_cartesian};
use super::{Chart, ChartBase, ChartConfig, ChartKind, PointStyle};

/// Point chart: a marker per entry over a gradient area rising from the
/// zero line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointChart {
    base: ChartBase,
    pub points: PointStyle,
}

impl PointChart {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            base: ChartBase::new(config),
            points: PointStyle::default(),
        }
    }

    #[must_use]
    pub fn with_point_style(mut self, points: PointStyle) -> Self {
        self.points = points;
        self
    }
}

impl Chart for PointChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Point
    }

    fn base(&self) -> &ChartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ChartBase {
        &mut self.base
    }

    fn validate(&self) -> ChartResult<()> {
        self.base.config.validate()?;
        self.points.validate()
    }

    fn draw_content(
        &self,
        surface: &mut dyn DrawingSurface,
        viewport: Viewport,
    ) -> ChartResult<()> {
        let style = self.points;
        render_cartesian(
            &self.base,
            style,
            surface,
            viewport,
            |surface, layout, entries, points| {
                draw_point_areas(surface, layout.origin, entries, points, style)
            },
        )
    }
}
