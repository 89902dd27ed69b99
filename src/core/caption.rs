use serde::{Deserialize, Serialize};

use crate::core::{Entry, Point, Rect, TextHAlign, Viewport};

/// Gap between a swatch and its text, and between stacked caption lines,
/// as a fraction of the label text size.
pub const CAPTION_MARGIN_FACTOR: f64 = 0.6;

/// Chart edge a caption strip is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptionSide {
    Left,
    Right,
}

/// Placement of one caption row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionItem<'a> {
    pub entry: &'a Entry,
    /// Filled color square.
    pub swatch: Rect,
    /// Vertical center of the text block, horizontally at the text edge
    /// closest to the swatch.
    pub text_anchor: Point,
    pub align: TextHAlign,
}

/// Distributes `entries` along a vertical strip on one side of the chart.
///
/// The strip keeps `2 * margin` free at the top and bottom. Rows are equally
/// spaced so the first swatch touches the top of the strip and the last one
/// its bottom; a single row is centered. Entries without any caption text
/// keep their slot but produce no item.
#[must_use]
pub fn layout_caption<'a>(
    entries: &[&'a Entry],
    side: CaptionSide,
    viewport: Viewport,
    margin: f64,
    label_text_size: f64,
) -> Vec<CaptionItem<'a>> {
    let outer_margin = 2.0 * margin;
    let available_height = viewport.height_px() - 2.0 * outer_margin;
    let travel = available_height - label_text_size;
    let count = entries.len();
    let step = travel / count.saturating_sub(1).max(1) as f64;
    let caption_margin = label_text_size * CAPTION_MARGIN_FACTOR;

    let (swatch_x, text_x, align) = match side {
        CaptionSide::Left => (
            margin,
            margin + label_text_size + caption_margin,
            TextHAlign::Left,
        ),
        CaptionSide::Right => {
            let swatch_x = viewport.width_px() - margin - label_text_size;
            (swatch_x, swatch_x - caption_margin, TextHAlign::Right)
        }
    };

    entries
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, entry)| entry.has_caption_text())
        .map(|(index, entry)| {
            let mut y = outer_margin + index as f64 * step;
            if count <= 1 {
                y += travel / 2.0;
            }
            CaptionItem {
                entry,
                swatch: Rect::new(swatch_x, y, label_text_size, label_text_size),
                text_anchor: Point::new(text_x, y + label_text_size / 2.0),
                align,
            }
        })
        .collect()
}
