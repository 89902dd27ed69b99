use tracing::trace;

use crate::core::{
    CaptionSide, Point, Viewport, circular_radius, partition_sectors, sector_path,
    split_captions_by_value,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, Paint, with_saved_state};

use super::caption::draw_caption;
use super::{Chart, ChartBase, ChartConfig, ChartKind};

/// Donut (or pie) chart of the first series, with captions on both sides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonutChart {
    base: ChartBase,
    hole_radius: f64,
}

impl DonutChart {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            base: ChartBase::new(config),
            hole_radius: 0.0,
        }
    }

    /// Inner radius as a fraction of the outer radius; `0` draws a pie.
    #[must_use]
    pub fn hole_radius(&self) -> f64 {
        self.hole_radius
    }

    pub fn set_hole_radius(&mut self, hole_radius: f64) -> ChartResult<()> {
        validate_hole_radius(hole_radius)?;
        self.hole_radius = hole_radius;
        Ok(())
    }

    pub fn with_hole_radius(mut self, hole_radius: f64) -> ChartResult<Self> {
        self.set_hole_radius(hole_radius)?;
        Ok(self)
    }
}

fn validate_hole_radius(hole_radius: f64) -> ChartResult<()> {
    if !(0.0..=1.0).contains(&hole_radius) {
        return Err(ChartError::InvalidConfig(format!(
            "hole radius must be within [0, 1], got {hole_radius}"
        )));
    }
    Ok(())
}

impl Chart for DonutChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Donut
    }

    fn base(&self) -> &ChartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ChartBase {
        &mut self.base
    }

    fn validate(&self) -> ChartResult<()> {
        self.base.config.validate()?;
        validate_hole_radius(self.hole_radius)
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

        let captions = split_captions_by_value(entries);
        draw_caption(surface, config, &captions.right, CaptionSide::Right, viewport)?;
        draw_caption(surface, config, &captions.left, CaptionSide::Left, viewport)?;

        let outer_radius = circular_radius(viewport, config.margin);
        let inner_radius = outer_radius * self.hole_radius;
        let sectors = partition_sectors(entries);
        trace!(
            sectors = sectors.len(),
            right = captions.right.len(),
            left = captions.left.len(),
            outer_radius,
            inner_radius,
            "donut layout"
        );

        let center = viewport.center();
        with_saved_state(surface, |surface| {
            surface.translate(center.x, center.y)?;
            for sector in &sectors {
                let color = entries[sector.index].color();
                let path = sector_path(Point::new(0.0, 0.0), *sector, outer_radius, inner_radius);
                surface.draw_filled_path(&path, &Paint::Solid(color), true)?;
            }
            Ok(())
        })
    }
}
