use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EntriesCollection, Entry, Series, ValueRange, Viewport};
use crate::core::{primary_series, resolve_value_range};
use crate::error::{ChartError, ChartResult};
use crate::render::DrawingSurface;

use super::{BarChart, ChartConfig, DonutChart, LineChart, PointChart, RadarChart, RadialGaugeChart};

/// Closed set of supported chart types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Point,
    Line,
    Donut,
    RadialGauge,
    Radar,
}

/// Caller-owned state shared by every chart type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartBase {
    pub config: ChartConfig,
    pub entries: EntriesCollection,
}

impl ChartBase {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Resolves the value range from the current entries and overrides.
    ///
    /// Recomputed on every call; nothing is cached between renders.
    #[must_use]
    pub fn value_range(&self) -> ValueRange {
        resolve_value_range(
            &self.entries,
            self.config.override_min,
            self.config.override_max,
        )
    }

    #[must_use]
    pub fn primary_series(&self) -> &[Entry] {
        primary_series(&self.entries)
    }

    #[must_use]
    pub fn is_single_series(&self) -> bool {
        self.entries.len() == 1
    }
}

/// Common behavior of all chart types.
///
/// Implementors provide their chart-specific `draw_content`; `render` clears
/// the surface with the background color first. Every render recomputes the
/// full layout from the current configuration and entries.
pub trait Chart {
    fn kind(&self) -> ChartKind;

    fn base(&self) -> &ChartBase;

    fn base_mut(&mut self) -> &mut ChartBase;

    /// Draws everything except the background.
    fn draw_content(&self, surface: &mut dyn DrawingSurface, viewport: Viewport)
    -> ChartResult<()>;

    /// Validates configuration before drawing. Chart types with extra
    /// settings extend this.
    fn validate(&self) -> ChartResult<()> {
        self.config().validate()
    }

    fn config(&self) -> &ChartConfig {
        &self.base().config
    }

    fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.base_mut().config
    }

    fn entries(&self) -> &[Series] {
        &self.base().entries
    }

    fn set_entries(&mut self, entries: EntriesCollection) {
        debug!(kind = ?self.kind(), series = entries.len(), "set chart entries");
        self.base_mut().entries = entries;
    }

    /// Replaces the collection with a single series.
    fn set_series(&mut self, series: Series) {
        self.set_entries(vec![series]);
    }

    #[must_use]
    fn with_entries(mut self, entries: EntriesCollection) -> Self
    where
        Self: Sized,
    {
        self.set_entries(entries);
        self
    }

    #[must_use]
    fn with_series(mut self, series: Series) -> Self
    where
        Self: Sized,
    {
        self.set_series(series);
        self
    }

    fn value_range(&self) -> ValueRange {
        self.base().value_range()
    }

    /// Draws the whole chart onto `surface`.
    fn render(&self, surface: &mut dyn DrawingSurface, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.validate()?;

        debug!(
            kind = ?self.kind(),
            width = viewport.width,
            height = viewport.height,
            series = self.entries().len(),
            "render chart"
        );
        surface.clear(self.config().background_color)?;
        self.draw_content(surface, viewport)
    }
}

/// Any of the supported chart types behind one value.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyChart {
    Bar(BarChart),
    Point(PointChart),
    Line(LineChart),
    Donut(DonutChart),
    RadialGauge(RadialGaugeChart),
    Radar(RadarChart),
}

impl AnyChart {
    fn as_chart(&self) -> &dyn Chart {
        match self {
            Self::Bar(chart) => chart,
            Self::Point(chart) => chart,
            Self::Line(chart) => chart,
            Self::Donut(chart) => chart,
            Self::RadialGauge(chart) => chart,
            Self::Radar(chart) => chart,
        }
    }

    fn as_chart_mut(&mut self) -> &mut dyn Chart {
        match self {
            Self::Bar(chart) => chart,
            Self::Point(chart) => chart,
            Self::Line(chart) => chart,
            Self::Donut(chart) => chart,
            Self::RadialGauge(chart) => chart,
            Self::Radar(chart) => chart,
        }
    }
}

impl Chart for AnyChart {
    fn kind(&self) -> ChartKind {
        self.as_chart().kind()
    }

    fn base(&self) -> &ChartBase {
        self.as_chart().base()
    }

    fn base_mut(&mut self) -> &mut ChartBase {
        self.as_chart_mut().base_mut()
    }

    fn draw_content(
        &self,
        surface: &mut dyn DrawingSurface,
        viewport: Viewport,
    ) -> ChartResult<()> {
        self.as_chart().draw_content(surface, viewport)
    }

    fn validate(&self) -> ChartResult<()> {
        self.as_chart().validate()
    }
}

impl From<BarChart> for AnyChart {
    fn from(chart: BarChart) -> Self {
        Self::Bar(chart)
    }
}

impl From<PointChart> for AnyChart {
    fn from(chart: PointChart) -> Self {
        Self::Point(chart)
    }
}

impl From<LineChart> for AnyChart {
    fn from(chart: LineChart) -> Self {
        Self::Line(chart)
    }
}

impl From<DonutChart> for AnyChart {
    fn from(chart: DonutChart) -> Self {
        Self::Donut(chart)
    }
}

impl From<RadialGaugeChart> for AnyChart {
    fn from(chart: RadialGaugeChart) -> Self {
        Self::RadialGauge(chart)
    }
}

impl From<RadarChart> for AnyChart {
    fn from(chart: RadarChart) -> Self {
        Self::Radar(chart)
    }
}
