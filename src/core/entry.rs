use serde::{Deserialize, Serialize};

use crate::core::Color;

/// One data point of a chart.
///
/// Entries are immutable once built: layout code only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    value: f64,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    value_label: Option<String>,
    #[serde(default = "default_entry_color")]
    color: Color,
    #[serde(default = "default_entry_text_color")]
    text_color: Color,
}

/// Ordered sequence of entries drawn as one data set.
pub type Series = Vec<Entry>;

/// Ordered set of series. Index 0 is the primary series.
pub type EntriesCollection = Vec<Series>;

impl Entry {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: None,
            value_label: None,
            color: default_entry_color(),
            text_color: default_entry_text_color(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_value_label(mut self, value_label: impl Into<String>) -> Self {
        self.value_label = Some(value_label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, text_color: Color) -> Self {
        self.text_color = text_color;
        self
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn value_label(&self) -> Option<&str> {
        self.value_label.as_deref()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Label text when present and non-empty.
    #[must_use]
    pub fn visible_label(&self) -> Option<&str> {
        self.label().filter(|text| !text.is_empty())
    }

    /// Value-label text when present and non-empty.
    #[must_use]
    pub fn visible_value_label(&self) -> Option<&str> {
        self.value_label().filter(|text| !text.is_empty())
    }

    #[must_use]
    pub fn has_caption_text(&self) -> bool {
        self.visible_label().is_some() || self.visible_value_label().is_some()
    }
}

/// Largest entry count across all series, `0` for an empty collection.
#[must_use]
pub fn max_series_len(collection: &[Series]) -> usize {
    collection.iter().map(Vec::len).max().unwrap_or(0)
}

#[must_use]
pub fn has_entries(collection: &[Series]) -> bool {
    collection.iter().any(|series| !series.is_empty())
}

/// Primary series, empty when the collection has none.
#[must_use]
pub fn primary_series(collection: &[Series]) -> &[Entry] {
    collection.first().map(Vec::as_slice).unwrap_or_default()
}

fn default_entry_color() -> Color {
    Color::BLACK
}

fn default_entry_text_color() -> Color {
    Color::GRAY
}
