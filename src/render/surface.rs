use crate::core::{Color, Path, Point, Rect};
use crate::error::ChartResult;
use crate::render::{Paint, PointMode, StrokeStyle, TextPrimitive, TextStyle};

/// Measured extent of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub width: f64,
    pub height: f64,
}

/// Contract implemented by any 2D drawing backend.
///
/// Charts issue these calls in order during a render; a backend either
/// rasterizes them right away or records them. Transform calls affect every
/// later drawing call until the matching `restore`.
pub trait DrawingSurface {
    fn clear(&mut self, color: Color) -> ChartResult<()>;

    /// Pushes the current transform.
    fn save(&mut self) -> ChartResult<()>;

    /// Pops the transform pushed by the matching `save`.
    fn restore(&mut self) -> ChartResult<()>;

    fn translate(&mut self, dx: f64, dy: f64) -> ChartResult<()>;

    fn rotate_degrees(&mut self, degrees: f64) -> ChartResult<()>;

    fn draw_filled_path(&mut self, path: &Path, paint: &Paint, antialias: bool)
    -> ChartResult<()>;

    fn draw_stroked_path(
        &mut self,
        path: &Path,
        paint: &Paint,
        stroke: StrokeStyle,
    ) -> ChartResult<()>;

    fn draw_filled_rect(&mut self, rect: Rect, paint: &Paint) -> ChartResult<()>;

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f64) -> ChartResult<()>;

    fn draw_point_marker(
        &mut self,
        center: Point,
        color: Color,
        size: f64,
        mode: PointMode,
    ) -> ChartResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;

    fn measure_text(&self, text: &str, style: &TextStyle) -> TextBounds;
}

/// Runs `draw` between `save` and `restore`.
///
/// The transform is restored even when `draw` fails; the first error wins.
pub fn with_saved_state<S, T>(
    surface: &mut S,
    draw: impl FnOnce(&mut S) -> ChartResult<T>,
) -> ChartResult<T>
where
    S: DrawingSurface + ?Sized,
{
    surface.save()?;
    let result = draw(surface);
    let restored = surface.restore();
    let value = result?;
    restored?;
    Ok(value)
}
