use serde::{Deserialize, Serialize};

use crate::core::{Entry, Series};

/// Effective `[min, max]` interval used to scale values to pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// `true` when every value maps to the same position.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }

    /// Fraction of the span between `max` and `value`: `0` at max, `1` at min.
    ///
    /// A degenerate range collapses every value onto the middle (`0.5`).
    #[must_use]
    pub fn ratio_from_max(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.5;
        }
        (self.max - value) / self.span()
    }

    /// Value represented by gridline `row` out of `rows` equal subdivisions.
    #[must_use]
    pub fn row_value(self, row: usize, rows: usize) -> f64 {
        if rows == 0 {
            return self.min;
        }
        self.min + row as f64 * (self.span() / rows as f64)
    }
}

/// Raw min/max across every entry of every series; `None` without entries.
#[must_use]
pub fn computed_bounds(collection: &[Series]) -> Option<(f64, f64)> {
    collection
        .iter()
        .flatten()
        .map(Entry::value)
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

/// Resolves the effective value range of a collection.
///
/// Overrides only widen: `override_min` applies when below the data minimum
/// and `override_max` when above the data maximum. An empty collection starts
/// from `0/0` before overrides are applied.
#[must_use]
pub fn resolve_value_range(
    collection: &[Series],
    override_min: Option<f64>,
    override_max: Option<f64>,
) -> ValueRange {
    let (computed_min, computed_max) = computed_bounds(collection).unwrap_or((0.0, 0.0));
    let min = override_min.map_or(computed_min, |bound| bound.min(computed_min));
    let max = override_max.map_or(computed_max, |bound| bound.max(computed_max));
    ValueRange::new(min, max)
}

/// Range of magnitudes used by gauge and radar charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsoluteRange {
    pub min: f64,
    pub max: f64,
}

impl AbsoluteRange {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Position of `|value|` inside the range, `0.0` for a degenerate range.
    #[must_use]
    pub fn ratio(self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        (value.abs() - self.min) / span
    }
}

/// Magnitude bounds over `entries` plus the resolved bounds and the minimum
/// override (zero when unset).
#[must_use]
pub fn resolve_absolute_range(
    entries: &[Entry],
    range: ValueRange,
    override_min: Option<f64>,
) -> AbsoluteRange {
    let anchors = [range.max, range.min, override_min.unwrap_or(0.0)];
    let (min, max) = entries
        .iter()
        .map(Entry::value)
        .chain(anchors)
        .map(f64::abs)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });
    AbsoluteRange { min, max }
}
