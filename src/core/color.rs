use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// `#808080`
    pub const GRAY: Self = Self::rgb(
        0.501_960_784_313_725_5,
        0.501_960_784_313_725_5,
        0.501_960_784_313_725_5,
    );
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            channel_from_u8(red),
            channel_from_u8(green),
            channel_from_u8(blue),
            channel_from_u8(alpha),
        )
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, u8::MAX)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "color `{input}` must be #RRGGBB or #RRGGBBAA"
            )));
        }

        let channel = |index: usize| -> ChartResult<u8> {
            u8::from_str_radix(&digits[index..index + 2], 16).map_err(|err| {
                ChartError::InvalidData(format!("color `{input}` has invalid hex digits: {err}"))
            })
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { u8::MAX };
        Ok(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Returns the same color with its alpha channel replaced.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Byte-alpha variant of [`Color::with_alpha`].
    #[must_use]
    pub fn with_alpha_u8(self, alpha: u8) -> Self {
        self.with_alpha(channel_from_u8(alpha))
    }

    #[must_use]
    pub fn alpha_u8(self) -> u8 {
        // Clamped to [0, 255] before the cast.
        (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn channel_from_u8(value: u8) -> f64 {
    f64::from(value) / 255.0
}
