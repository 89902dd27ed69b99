mod command;
mod primitives;
mod recording;
mod surface;

pub use crate::core::{Color, Path, PathCommand, TextHAlign};
pub use command::DrawCommand;
pub use primitives::{
    GradientStop, LineCap, LinearGradient, Paint, PointMode, StrokeStyle, TextPrimitive,
    TextStyle, Typeface,
};
pub use recording::{RecordingSurface, TextMetrics};
pub use surface::{DrawingSurface, TextBounds, with_saved_state};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
