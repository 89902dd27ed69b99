//! microchart-rs: layout engine for small bar, point, line, donut,
//! radial-gauge and radar charts.
//!
//! Charts own their configuration and entries and compute every position on
//! each [`Chart::render`] call. Drawing goes through the
//! [`render::DrawingSurface`] trait, so the same layout can be recorded for
//! tests ([`render::RecordingSurface`]) or painted with Cairo (feature
//! `cairo-backend`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    AnyChart, BarChart, Chart, ChartConfig, ChartKind, DonutChart, LineChart, PointChart,
    RadarChart, RadialGaugeChart,
};
pub use core::{Color, Entry, Viewport};
pub use error::{ChartError, ChartResult};
