use crate::core::ValueRange;

/// Maps data values onto a vertical pixel band.
///
/// `max` lands on `top` and `min` on `top + height`, matching screen space
/// where y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalScale {
    range: ValueRange,
    top: f64,
    height: f64,
}

impl VerticalScale {
    #[must_use]
    pub fn new(range: ValueRange, top: f64, height: f64) -> Self {
        Self { range, top, height }
    }

    #[must_use]
    pub fn range(self) -> ValueRange {
        self.range
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.top + self.range.ratio_from_max(value) * self.height
    }

    /// Inverse of [`VerticalScale::value_to_pixel`].
    ///
    /// A degenerate range or band has no inverse and resolves to `range.min`.
    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        if self.range.is_degenerate() || self.height == 0.0 {
            return self.range.min;
        }
        let ratio = (pixel - self.top) / self.height;
        self.range.max - ratio * self.range.span()
    }

    /// Pixel row of the value `0`, clamped to the band when zero lies outside
    /// the range. Always agrees with `value_to_pixel(0.0)` when zero is inside.
    #[must_use]
    pub fn zero_line_origin(self) -> f64 {
        // A range collapsed onto zero maps its values to the middle row.
        if self.range.is_degenerate() && self.range.min == 0.0 {
            return self.value_to_pixel(0.0);
        }
        if self.range.max <= 0.0 {
            return self.top;
        }
        if self.range.min > 0.0 {
            return self.top + self.height;
        }
        // min <= 0 < max, so the span is strictly positive here.
        self.top + (self.range.max / self.range.span()) * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::VerticalScale;
    use crate::core::ValueRange;

    #[test]
    fn bounds_map_to_band_edges() {
        let scale = VerticalScale::new(ValueRange::new(-100.0, 400.0), 40.0, 500.0);
        assert_eq!(scale.value_to_pixel(400.0), 40.0);
        assert_eq!(scale.value_to_pixel(-100.0), 540.0);
    }

    #[test]
    fn degenerate_range_inverts_to_min() {
        let scale = VerticalScale::new(ValueRange::new(7.0, 7.0), 0.0, 100.0);
        assert_eq!(scale.value_to_pixel(7.0), 50.0);
        assert_eq!(scale.pixel_to_value(12.0), 7.0);
    }

    #[test]
    fn range_collapsed_on_zero_puts_origin_on_the_values() {
        let scale = VerticalScale::new(ValueRange::new(0.0, 0.0), 20.0, 200.0);
        assert_eq!(scale.zero_line_origin(), 120.0);
        assert_eq!(scale.zero_line_origin(), scale.value_to_pixel(0.0));
    }
}
