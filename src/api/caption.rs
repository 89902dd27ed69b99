use crate::core::caption::CAPTION_MARGIN_FACTOR;
use crate::core::{CaptionSide, Color, Entry, Point, Viewport, layout_caption};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, Paint, TextHAlign, TextPrimitive};

use super::ChartConfig;

/// Draws a caption strip (swatch + label block per entry) on one side.
pub(crate) fn draw_caption(
    surface: &mut dyn DrawingSurface,
    config: &ChartConfig,
    entries: &[&Entry],
    side: CaptionSide,
    viewport: Viewport,
) -> ChartResult<()> {
    let items = layout_caption(
        entries,
        side,
        viewport,
        config.margin,
        config.label_text_size,
    );
    for item in items {
        surface.draw_filled_rect(item.swatch, &Paint::Solid(item.entry.color()))?;
        draw_caption_labels(
            surface,
            config,
            CaptionText::of(item.entry),
            item.text_anchor,
            item.align,
        )?;
    }
    Ok(())
}

/// Label and value-label of one caption block with their colors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CaptionText<'a> {
    pub label: Option<&'a str>,
    pub label_color: Color,
    pub value_label: Option<&'a str>,
    pub value_color: Color,
}

impl<'a> CaptionText<'a> {
    pub(crate) fn of(entry: &'a Entry) -> Self {
        Self {
            label: entry.visible_label(),
            label_color: entry.text_color(),
            value_label: entry.visible_value_label(),
            value_color: entry.color(),
        }
    }
}

/// Draws up to two lines vertically centered on `anchor`: the label above
/// and the bold value-label below, spread apart only when both exist.
pub(crate) fn draw_caption_labels(
    surface: &mut dyn DrawingSurface,
    config: &ChartConfig,
    text: CaptionText<'_>,
    anchor: Point,
    align: TextHAlign,
) -> ChartResult<()> {
    let spacing = match (text.label, text.value_label) {
        (Some(_), Some(_)) => config.label_text_size * CAPTION_MARGIN_FACTOR,
        _ => 0.0,
    };

    if let Some(label) = text.label {
        let style = config.text_style();
        let bounds = surface.measure_text(label, &style);
        let y = anchor.y + bounds.height / 2.0 - spacing;
        surface.draw_text(&TextPrimitive::new(
            label,
            anchor.x,
            y,
            style,
            text.label_color,
            align,
        ))?;
    }

    if let Some(value_label) = text.value_label {
        let style = config.text_style().bold();
        let bounds = surface.measure_text(value_label, &style);
        let y = anchor.y + bounds.height / 2.0 + spacing;
        surface.draw_text(&TextPrimitive::new(
            value_label,
            anchor.x,
            y,
            style,
            text.value_color,
            align,
        ))?;
    }

    Ok(())
}
