use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::{AbsoluteRange, Entry, Path, Point, Viewport};

/// Angular share of one entry, as fractions of a full revolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl Sector {
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn start_angle(self) -> f64 {
        revolution_to_radians(self.start)
    }

    #[must_use]
    pub fn end_angle(self) -> f64 {
        revolution_to_radians(self.end)
    }
}

/// Converts a revolution fraction to a screen angle starting at 12 o'clock
/// and growing clockwise.
#[must_use]
pub fn revolution_to_radians(fraction: f64) -> f64 {
    fraction * TAU - FRAC_PI_2
}

#[must_use]
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[must_use]
pub fn magnitude_sum(entries: &[Entry]) -> f64 {
    entries.iter().map(|entry| entry.value().abs()).sum()
}

/// Splits a revolution into consecutive sectors proportional to `|value|`.
///
/// Returns no sectors when the magnitudes sum to zero.
#[must_use]
pub fn partition_sectors(entries: &[Entry]) -> Vec<Sector> {
    let sum = magnitude_sum(entries);
    if sum == 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let end = start + entry.value().abs() / sum;
            let sector = Sector { index, start, end };
            start = end;
            sector
        })
        .collect()
}

/// Outer radius of a circular chart.
#[must_use]
pub fn circular_radius(viewport: Viewport, margin: f64) -> f64 {
    (viewport.min_side_px() - 2.0 * margin) / 2.0
}

/// Closed outline of an annular sector; a pie slice when `inner_radius` is 0.
#[must_use]
pub fn sector_path(center: Point, sector: Sector, outer_radius: f64, inner_radius: f64) -> Path {
    let start_angle = sector.start_angle();
    let end_angle = sector.end_angle();
    let mut path = Path::new();

    if inner_radius <= 0.0 {
        path.move_to(center)
            .arc_to(center, outer_radius, start_angle, end_angle)
            .close();
        return path;
    }

    path.move_to(point_on_circle(center, outer_radius, start_angle))
        .arc_to(center, outer_radius, start_angle, end_angle)
        .arc_to(center, inner_radius, end_angle, start_angle)
        .close();
    path
}

/// Entries grouped by the caption strip they are listed in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaptionSplit<'a> {
    pub right: Vec<&'a Entry>,
    /// Already reversed so it reads bottom-up against the right strip.
    pub left: Vec<&'a Entry>,
}

/// Value-weighted split: entries go right until the running magnitude total
/// reaches half of the sum; the entry crossing the half stays right.
#[must_use]
pub fn split_captions_by_value(entries: &[Entry]) -> CaptionSplit<'_> {
    let half = magnitude_sum(entries) / 2.0;
    let mut current = 0.0;
    let right_count = entries
        .iter()
        .take_while(|entry| {
            let include = current < half;
            current += entry.value().abs();
            include
        })
        .count();
    split_at(entries, right_count)
}

/// Count-based split: the first half (rounded down) goes right.
#[must_use]
pub fn split_captions_by_count(entries: &[Entry]) -> CaptionSplit<'_> {
    split_at(entries, entries.len() / 2)
}

fn split_at(entries: &[Entry], right_count: usize) -> CaptionSplit<'_> {
    let (right, left) = entries.split_at(right_count);
    CaptionSplit {
        right: right.iter().collect(),
        left: left.iter().rev().collect(),
    }
}

/// Stroke width of gauge rings; derived from the radius when unset.
#[must_use]
pub fn gauge_line_width(line_size: Option<f64>, outer_radius: f64, count: usize) -> f64 {
    line_size.unwrap_or_else(|| outer_radius / ((count + 1) as f64 * 2.0))
}

#[must_use]
pub fn gauge_ring_radius(index: usize, line_width: f64) -> f64 {
    (index + 1) as f64 * line_width * 2.0
}

/// Arc sweep of one gauge in degrees.
#[must_use]
pub fn gauge_sweep_degrees(range: AbsoluteRange, value: f64) -> f64 {
    360.0 * range.ratio(value)
}
