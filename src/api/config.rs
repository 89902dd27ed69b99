use serde::{Deserialize, Serialize};

use crate::core::{Color, YLabelMode};
use crate::error::{ChartError, ChartResult};
use crate::render::{TextStyle, Typeface};

/// What to do with a category label wider than its item slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelOverflow {
    /// Draw the full label even if it spills into neighbouring slots.
    #[default]
    Overflow,
    /// Shorten to 3 characters, then to 1, while it still does not fit.
    Truncate,
}

/// Y-axis gridline label settings of Cartesian charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisConfig {
    #[serde(default = "default_true")]
    pub show_labels: bool,
    /// Label every gridline instead of only the min and max rows.
    #[serde(default = "default_true")]
    pub show_labels_on_all_rows: bool,
    #[serde(default = "default_unit_measure")]
    pub unit_measure: String,
    #[serde(default = "default_y_labels_color")]
    pub labels_color: Color,
    #[serde(default = "default_y_lines_offset")]
    pub lines_offset: i32,
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_labels_on_all_rows: true,
            unit_measure: default_unit_measure(),
            labels_color: default_y_labels_color(),
            lines_offset: default_y_lines_offset(),
        }
    }
}

impl YAxisConfig {
    #[must_use]
    pub fn label_mode(&self) -> YLabelMode {
        match (self.show_labels, self.show_labels_on_all_rows) {
            (false, _) => YLabelMode::Hidden,
            (true, true) => YLabelMode::AllRows,
            (true, false) => YLabelMode::MinMax,
        }
    }
}

/// Settings shared by every chart type.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default = "default_label_text_size")]
    pub label_text_size: f64,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default)]
    pub typeface: Option<Typeface>,
    #[serde(default)]
    pub y_axis: YAxisConfig,
    #[serde(default)]
    pub label_overflow: LabelOverflow,
    /// Lower bound that widens the computed range when below its minimum.
    #[serde(default)]
    pub override_min: Option<f64>,
    /// Upper bound that widens the computed range when above its maximum.
    #[serde(default)]
    pub override_max: Option<f64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            label_text_size: default_label_text_size(),
            background_color: default_background_color(),
            typeface: None,
            y_axis: YAxisConfig::default(),
            label_overflow: LabelOverflow::default(),
            override_min: None,
            override_max: None,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_label_text_size(mut self, label_text_size: f64) -> Self {
        self.label_text_size = label_text_size;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_typeface(mut self, typeface: Typeface) -> Self {
        self.typeface = Some(typeface);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, y_axis: YAxisConfig) -> Self {
        self.y_axis = y_axis;
        self
    }

    #[must_use]
    pub fn with_label_overflow(mut self, policy: LabelOverflow) -> Self {
        self.label_overflow = policy;
        self
    }

    /// Sets the lower override. It only takes effect below the data minimum.
    #[must_use]
    pub fn with_override_min(mut self, value: Option<f64>) -> Self {
        self.override_min = value;
        self
    }

    /// Sets the upper override. It only takes effect above the data maximum.
    #[must_use]
    pub fn with_override_max(mut self, value: Option<f64>) -> Self {
        self.override_max = value;
        self
    }

    pub fn set_margin(&mut self, margin: f64) -> ChartResult<()> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(ChartError::InvalidConfig(
                "margin must be finite and >= 0".to_owned(),
            ));
        }
        self.margin = margin;
        Ok(())
    }

    pub fn set_label_text_size(&mut self, label_text_size: f64) -> ChartResult<()> {
        if !label_text_size.is_finite() || label_text_size <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "label text size must be finite and > 0".to_owned(),
            ));
        }
        self.label_text_size = label_text_size;
        Ok(())
    }

    pub fn set_background_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background_color = color;
        Ok(())
    }

    /// Replaces both overrides; rejected as a whole if either is non-finite.
    pub fn set_overrides(
        &mut self,
        override_min: Option<f64>,
        override_max: Option<f64>,
    ) -> ChartResult<()> {
        validate_override("override_min", override_min)?;
        validate_override("override_max", override_max)?;
        self.override_min = override_min;
        self.override_max = override_max;
        Ok(())
    }

    /// Regular-weight label style.
    #[must_use]
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.typeface.clone(), self.label_text_size)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ChartError::InvalidConfig(
                "margin must be finite and >= 0".to_owned(),
            ));
        }
        if !self.label_text_size.is_finite() || self.label_text_size <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "label text size must be finite and > 0".to_owned(),
            ));
        }
        validate_override("override_min", self.override_min)?;
        validate_override("override_max", self.override_max)?;
        self.background_color.validate()?;
        self.y_axis.labels_color.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn validate_override(name: &str, bound: Option<f64>) -> ChartResult<()> {
    if bound.is_some_and(|value| !value.is_finite()) {
        return Err(ChartError::InvalidConfig(format!(
            "`{name}` must be finite when set"
        )));
    }
    Ok(())
}

fn default_true() -> bool {
    true
}

fn default_margin() -> f64 {
    20.0
}

fn default_label_text_size() -> f64 {
    16.0
}

fn default_background_color() -> Color {
    Color::WHITE
}

fn default_unit_measure() -> String {
    "°C".to_owned()
}

fn default_y_labels_color() -> Color {
    Color::GRAY
}

fn default_y_lines_offset() -> i32 {
    10
}
