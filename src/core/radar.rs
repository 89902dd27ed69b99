use std::f64::consts::{PI, TAU};

use crate::core::caption::CAPTION_MARGIN_FACTOR;
use crate::core::{AbsoluteRange, Entry, Point, TextHAlign, Viewport};

/// Angle of the first spoke. Angle 0 points straight down, so the first
/// spoke points up.
pub const RADAR_START_ANGLE: f64 = PI;

const ANGLE_EPSILON: f64 = 0.01;

/// Angle of spoke `index` out of `count`.
#[must_use]
pub fn spoke_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return RADAR_START_ANGLE;
    }
    RADAR_START_ANGLE + index as f64 * (TAU / count as f64)
}

/// Rotates the downward vector `(0, distance)` by `angle` around `center`.
#[must_use]
pub fn spoke_point(center: Point, angle: f64, distance: f64) -> Point {
    Point::new(
        center.x - distance * angle.sin(),
        center.y + distance * angle.cos(),
    )
}

/// Point of `value` on its spoke, scaled by the magnitude range.
#[must_use]
pub fn value_point(
    center: Point,
    angle: f64,
    radius: f64,
    range: AbsoluteRange,
    value: f64,
) -> Point {
    spoke_point(center, angle, radius * range.ratio(value))
}

/// Height of the tallest caption block around the radar, computed from the
/// label text size rather than measured glyphs.
#[must_use]
pub fn caption_height(entries: &[Entry], label_text_size: f64) -> f64 {
    entries
        .iter()
        .map(|entry| {
            let has_label = entry.visible_label().is_some();
            let has_value_label = entry.visible_value_label().is_some();
            let mut height = 0.0;
            if has_label {
                height += label_text_size;
            }
            if has_value_label {
                height += label_text_size;
            }
            if has_label && has_value_label {
                height += label_text_size * CAPTION_MARGIN_FACTOR;
            }
            height
        })
        .fold(0.0, f64::max)
}

/// Radius of the outer radar ring once captions are reserved.
#[must_use]
pub fn radar_radius(viewport: Viewport, margin: f64, caption_height: f64) -> f64 {
    (viewport.min_side_px() - 2.0 * margin) / 2.0 - caption_height
}

/// Caption alignment for a spoke: centered at the top and bottom spokes,
/// right-aligned on the left half and left-aligned on the right half.
#[must_use]
pub fn label_alignment(angle: f64) -> TextHAlign {
    let bottom = RADAR_START_ANGLE + PI;
    if (angle - bottom).abs() < ANGLE_EPSILON || (angle - RADAR_START_ANGLE).abs() < ANGLE_EPSILON
    {
        TextHAlign::Center
    } else if angle > bottom {
        TextHAlign::Right
    } else {
        TextHAlign::Left
    }
}
