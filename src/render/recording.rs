use crate::core::{Color, Path, Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    DrawCommand, DrawingSurface, Paint, PointMode, StrokeStyle, TextBounds, TextPrimitive,
    TextStyle,
};

/// Text measurement strategy of a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TextMetrics {
    /// Per-character width classes scaled by the font size.
    #[default]
    Estimated,
    /// Every character advances by the same amount.
    Monospace { advance_px: f64 },
}

impl TextMetrics {
    #[must_use]
    pub fn measure(self, text: &str, style: &TextStyle) -> TextBounds {
        if text.is_empty() {
            return TextBounds::default();
        }
        let width = match self {
            Self::Estimated => estimate_text_width_px(text, style.size_px, style.bold),
            Self::Monospace { advance_px } => text.chars().count() as f64 * advance_px,
        };
        TextBounds {
            width,
            height: style.size_px,
        }
    }
}

/// Surface that records every call instead of rasterizing it.
///
/// Used by tests and headless consumers. Like a real backend it rejects
/// malformed text and unbalanced `restore` calls, so invalid draw sequences
/// surface before a real backend is involved.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    metrics: TextMetrics,
    save_depth: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_metrics(metrics: TextMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns recorded commands and starts a fresh recording.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.save_depth
    }

    /// Recorded text primitives in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Number of recorded commands matching `predicate`.
    #[must_use]
    pub fn count_where(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    fn record(&mut self, command: DrawCommand) -> ChartResult<()> {
        self.commands.push(command);
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.record(DrawCommand::Clear(color))
    }

    fn save(&mut self) -> ChartResult<()> {
        self.save_depth += 1;
        self.record(DrawCommand::Save)
    }

    fn restore(&mut self) -> ChartResult<()> {
        if self.save_depth == 0 {
            return Err(ChartError::InvalidData(
                "restore called without a matching save".to_owned(),
            ));
        }
        self.save_depth -= 1;
        self.record(DrawCommand::Restore)
    }

    fn translate(&mut self, dx: f64, dy: f64) -> ChartResult<()> {
        self.record(DrawCommand::Translate { dx, dy })
    }

    fn rotate_degrees(&mut self, degrees: f64) -> ChartResult<()> {
        self.record(DrawCommand::Rotate { degrees })
    }

    fn draw_filled_path(
        &mut self,
        path: &Path,
        paint: &Paint,
        antialias: bool,
    ) -> ChartResult<()> {
        self.record(DrawCommand::FillPath {
            path: path.clone(),
            paint: paint.clone(),
            antialias,
        })
    }

    fn draw_stroked_path(
        &mut self,
        path: &Path,
        paint: &Paint,
        stroke: StrokeStyle,
    ) -> ChartResult<()> {
        self.record(DrawCommand::StrokePath {
            path: path.clone(),
            paint: paint.clone(),
            stroke,
        })
    }

    fn draw_filled_rect(&mut self, rect: Rect, paint: &Paint) -> ChartResult<()> {
        self.record(DrawCommand::FillRect {
            rect,
            paint: paint.clone(),
        })
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f64) -> ChartResult<()> {
        self.record(DrawCommand::Line {
            from,
            to,
            color,
            width,
        })
    }

    fn draw_point_marker(
        &mut self,
        center: Point,
        color: Color,
        size: f64,
        mode: PointMode,
    ) -> ChartResult<()> {
        self.record(DrawCommand::PointMarker {
            center,
            color,
            size,
            mode,
        })
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        self.record(DrawCommand::Text(text.clone()))
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> TextBounds {
        self.metrics.measure(text, style)
    }
}

/// Deterministic, backend-independent width estimate.
fn estimate_text_width_px(text: &str, font_size_px: f64, bold: bool) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    let weight = if bold { 1.05 } else { 1.0 };
    units * font_size_px * weight
}

#[cfg(test)]
mod tests {
    use super::{RecordingSurface, TextMetrics};
    use crate::render::{DrawingSurface, TextStyle, with_saved_state};

    #[test]
    fn monospace_metrics_scale_with_char_count() {
        let style = TextStyle::new(None, 16.0);
        let bounds = TextMetrics::Monospace { advance_px: 8.0 }.measure("abcd", &style);
        assert_eq!(bounds.width, 32.0);
        assert_eq!(bounds.height, 16.0);
        assert_eq!(TextMetrics::Estimated.measure("", &style).width, 0.0);
    }

    #[test]
    fn unbalanced_restore_is_rejected() {
        let mut surface = RecordingSurface::new();
        assert!(surface.restore().is_err());
    }

    #[test]
    fn saved_state_is_restored_after_failure() {
        let mut surface = RecordingSurface::new();
        let result: crate::error::ChartResult<()> = with_saved_state(&mut surface, |s| {
            s.translate(1.0, 2.0)?;
            Err(crate::error::ChartError::InvalidData("boom".to_owned()))
        });
        assert!(result.is_err());
        assert_eq!(surface.save_depth(), 0);
    }
}
