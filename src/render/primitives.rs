use serde::{Deserialize, Serialize};

use crate::core::{Color, Point, TextHAlign};
use crate::error::{ChartError, ChartResult};

/// Font family handle. Charts without one use the backend default font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typeface {
    pub family: String,
}

impl Typeface {
    #[must_use]
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }
}

/// Font settings shared by drawing and measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub typeface: Option<Typeface>,
    pub size_px: f64,
    pub bold: bool,
    pub antialias: bool,
}

impl TextStyle {
    #[must_use]
    pub fn new(typeface: Option<Typeface>, size_px: f64) -> Self {
        Self {
            typeface,
            size_px,
            bold: false,
            antialias: true,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Draw command for one label in pixel space. `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub style: TextStyle,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        style: TextStyle,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            style,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.style.size_px.is_finite() || self.style.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Color stop of a [`LinearGradient`]; `offset` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient between two points, clamped outside the segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    #[must_use]
    pub fn two_stop(start: Point, start_color: Color, end: Point, end_color: Color) -> Self {
        Self {
            start,
            end,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: start_color,
                },
                GradientStop {
                    offset: 1.0,
                    color: end_color,
                },
            ],
        }
    }

    /// Horizontal gradient through `stops` given as `(x, color)` pairs.
    ///
    /// Offsets are the relative x positions between the first and last stop;
    /// a zero-width run spaces them evenly instead.
    #[must_use]
    pub fn horizontal(stops: &[(f64, Color)]) -> Self {
        let first_x = stops.first().map_or(0.0, |stop| stop.0);
        let last_x = stops.last().map_or(0.0, |stop| stop.0);
        let width = last_x - first_x;
        let count = stops.len();
        let stops = stops
            .iter()
            .enumerate()
            .map(|(index, (x, color))| GradientStop {
                offset: if width == 0.0 {
                    index as f64 / count.saturating_sub(1).max(1) as f64
                } else {
                    (x - first_x) / width
                },
                color: *color,
            })
            .collect();
        Self {
            start: Point::new(first_x, 0.0),
            end: Point::new(last_x, 0.0),
            stops,
        }
    }
}

/// Fill or stroke source.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Self::LinearGradient(gradient)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Outline settings of a stroked path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub cap: LineCap,
    /// `(on, off)` dash lengths; solid when `None`.
    pub dash: Option<(f64, f64)>,
    pub antialias: bool,
}

impl StrokeStyle {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Butt,
            dash: None,
            antialias: true,
        }
    }

    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, on: f64, off: f64) -> Self {
        self.dash = Some((on, off));
        self
    }
}

/// Marker shape drawn at each data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointMode {
    None,
    #[default]
    Circle,
    Square,
}
