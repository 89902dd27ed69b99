use crate::core::{Color, Path, Point, Rect};
use crate::render::{Paint, PointMode, StrokeStyle, TextPrimitive};

/// One recorded [`DrawingSurface`](crate::render::DrawingSurface) call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Save,
    Restore,
    Translate {
        dx: f64,
        dy: f64,
    },
    Rotate {
        degrees: f64,
    },
    FillPath {
        path: Path,
        paint: Paint,
        antialias: bool,
    },
    StrokePath {
        path: Path,
        paint: Paint,
        stroke: StrokeStyle,
    },
    FillRect {
        rect: Rect,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    PointMarker {
        center: Point,
        color: Color,
        size: f64,
        mode: PointMode,
    },
    Text(TextPrimitive),
}
