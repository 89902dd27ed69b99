mod bar_chart;
mod caption;
mod cartesian;
mod chart;
mod config;
mod donut_chart;
mod line_chart;
mod point_chart;
mod radar_chart;
mod radial_gauge_chart;

pub use bar_chart::{BarChart, BarStyle};
pub use cartesian::{PointStyle, compute_cartesian_layout, y_label_height};
pub use chart::{AnyChart, Chart, ChartBase, ChartKind};
pub use config::{ChartConfig, LabelOverflow, YAxisConfig};
pub use donut_chart::DonutChart;
pub use line_chart::{LineChart, LineStyle};
pub use point_chart::PointChart;
pub use radar_chart::{RadarChart, RadarStyle};
pub use radial_gauge_chart::{RadialGaugeChart, RadialGaugeStyle};
