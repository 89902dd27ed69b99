//! Layout of the point / line / bar chart family.
//!
//! Everything here is a pure function of the entries, the resolved value
//! range and measured text widths, so the chart types only have to measure
//! text and issue draw calls.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Entry, Path, Point, Series, ValueRange, VerticalScale, Viewport};
use crate::core::{has_entries, max_series_len};

/// Vertical distance between two horizontal gridlines.
pub const GRID_LINES_INTERVAL_PX: f64 = 40.0;
/// Item count used for spacing when no series has entries.
pub const FALLBACK_ITEM_COUNT: usize = 5;
/// Extra width added to every measured y-axis label.
pub const Y_LABEL_PADDING_PX: f64 = 10.0;

/// Which gridlines carry a y-axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YLabelMode {
    Hidden,
    /// Only the bottom (min) and top (max) rows.
    MinMax,
    AllRows,
}

/// Shape of the line joining consecutive points of a line chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineMode {
    None,
    Straight,
    #[default]
    Spline,
}

/// Horizontal share of the gap between two points used as the distance of
/// spline control points.
pub const SPLINE_CONTROL_FACTOR: f64 = 0.8;

/// Chart-level inputs of [`CartesianLayout::compute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianParams<'a> {
    pub margin: f64,
    pub label_text_size: f64,
    pub y_labels: YLabelMode,
    pub y_unit: &'a str,
}

/// Horizontal slot width and vertical plot height of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemSize {
    pub width: f64,
    pub height: f64,
}

/// One horizontal gridline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub index: usize,
    pub y: f64,
    pub value: f64,
}

/// Text of a y-axis label and the gridline row it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisLabel {
    pub text: String,
    pub y: f64,
}

/// Complete geometry of one Cartesian render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartesianLayout {
    pub range: ValueRange,
    pub margin: f64,
    pub header_height: f64,
    pub footer_height: f64,
    pub y_label_width: f64,
    pub item_size: ItemSize,
    /// Pixel row of the value `0`.
    pub origin: f64,
    pub rows: Vec<GridRow>,
    pub y_labels: Vec<YAxisLabel>,
}

impl CartesianLayout {
    /// Computes the layout for `collection` inside `viewport`.
    ///
    /// `value_label_widths` holds the measured value-label widths of the
    /// primary series (only consulted for a single series) and
    /// `measure_width` measures y-axis label candidates.
    pub fn compute(
        collection: &[Series],
        range: ValueRange,
        viewport: Viewport,
        params: CartesianParams<'_>,
        value_label_widths: &[f64],
        mut measure_width: impl FnMut(&str) -> f64,
    ) -> Self {
        let height = viewport.height_px();
        let footer_height = footer_height(collection, params.margin, params.label_text_size);
        let header_height = header_height(collection, params.margin, value_label_widths);

        let rows = grid_rows(range, height, params.margin, header_height, footer_height);
        let baseline_y = height - (footer_height + params.margin);
        let y_labels = y_axis_labels(&rows, range, params.y_labels, params.y_unit, baseline_y);
        let y_label_width = y_labels
            .iter()
            .map(|label| OrderedFloat(padded_label_width(measure_width(&label.text))))
            .max()
            .map_or(0.0, |width| width.0);

        let item_size = item_size(
            viewport.width_px() - y_label_width,
            height,
            params.margin,
            max_series_len(collection),
            header_height,
            footer_height,
        );
        let origin =
            VerticalScale::new(range, header_height, item_size.height).zero_line_origin();

        Self {
            range,
            margin: params.margin,
            header_height,
            footer_height,
            y_label_width,
            item_size,
            origin,
            rows,
            y_labels,
        }
    }

    #[must_use]
    pub fn scale(&self) -> VerticalScale {
        VerticalScale::new(self.range, self.header_height, self.item_size.height)
    }

    /// Pixel positions of every entry of one series.
    #[must_use]
    pub fn points(&self, series: &[Entry]) -> Vec<Point> {
        let scale = self.scale();
        let slot = self.item_size.width + self.margin;
        let first_x = self.margin + self.y_label_width + self.item_size.width / 2.0;
        series
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Point::new(
                    first_x + index as f64 * slot,
                    scale.value_to_pixel(entry.value()),
                )
            })
            .collect()
    }
}

/// Path through `points` following `mode`.
///
/// With a `baseline` the path starts and ends on that pixel row and is
/// closed, producing the outline of the area under the line.
#[must_use]
pub fn line_path(points: &[Point], mode: LineMode, baseline: Option<f64>) -> Path {
    let mut path = Path::new();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return path;
    };

    match baseline {
        Some(origin) => {
            path.move_to(Point::new(first.x, origin)).line_to(*first);
        }
        None => {
            path.move_to(*first);
        }
    }

    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        match mode {
            LineMode::Spline => {
                let (control1, control2) = spline_control_points(from, to);
                path.cubic_to(control1, control2, to);
            }
            LineMode::Straight | LineMode::None => {
                path.line_to(to);
            }
        }
    }

    if let Some(origin) = baseline {
        path.line_to(Point::new(last.x, origin)).close();
    }
    path
}

/// Horizontal-tangent control points of the cubic segment `from -> to`.
#[must_use]
pub fn spline_control_points(from: Point, to: Point) -> (Point, Point) {
    let offset = (to.x - from.x) * SPLINE_CONTROL_FACTOR;
    (from.offset(offset, 0.0), to.offset(-offset, 0.0))
}

/// Bottom reservation: the margin, plus a category-label row for a single
/// series with at least one label.
#[must_use]
pub fn footer_height(collection: &[Series], margin: f64, label_text_size: f64) -> f64 {
    let has_labels = collection.len() == 1
        && collection
            .iter()
            .flatten()
            .any(|entry| entry.visible_label().is_some());
    if has_labels {
        margin + label_text_size + margin
    } else {
        margin
    }
}

/// Top reservation: the margin, plus room for the widest rotated value label
/// of a single series.
#[must_use]
pub fn header_height(collection: &[Series], margin: f64, value_label_widths: &[f64]) -> f64 {
    if collection.len() != 1 || !has_entries(collection) {
        return margin;
    }
    let widest = value_label_widths
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |width| width.0);
    if widest > 0.0 {
        margin + widest + margin
    } else {
        margin
    }
}

#[must_use]
pub fn item_size(
    available_width: f64,
    height: f64,
    margin: f64,
    item_count: usize,
    header_height: f64,
    footer_height: f64,
) -> ItemSize {
    let count = if item_count == 0 {
        FALLBACK_ITEM_COUNT
    } else {
        item_count
    } as f64;
    ItemSize {
        width: (available_width - (count + 1.0) * margin) / count,
        height: height - margin - footer_height - header_height,
    }
}

/// Gridlines fitting `usable_height`, one per [`GRID_LINES_INTERVAL_PX`] plus
/// the baseline. Never negative.
#[must_use]
pub fn grid_lines_count(usable_height: f64) -> usize {
    let count = (usable_height / GRID_LINES_INTERVAL_PX).floor() + 1.0;
    if count >= 1.0 { count as usize } else { 0 }
}

#[must_use]
pub fn grid_rows(
    range: ValueRange,
    height: f64,
    margin: f64,
    header_height: f64,
    footer_height: f64,
) -> Vec<GridRow> {
    let usable_height = height - margin - footer_height - header_height;
    let count = grid_lines_count(usable_height);
    (0..count)
        .map(|index| GridRow {
            index,
            y: height - (footer_height + margin + (index as f64 * GRID_LINES_INTERVAL_PX).round()),
            value: range.row_value(index, count),
        })
        .collect()
}

/// Labels of the y axis.
///
/// In [`YLabelMode::MinMax`] both bound labels exist even without gridlines;
/// they then sit on `baseline_y`, the row where the first gridline would be.
#[must_use]
pub fn y_axis_labels(
    rows: &[GridRow],
    range: ValueRange,
    mode: YLabelMode,
    unit: &str,
    baseline_y: f64,
) -> Vec<YAxisLabel> {
    match mode {
        YLabelMode::Hidden => Vec::new(),
        YLabelMode::AllRows => rows
            .iter()
            .map(|row| YAxisLabel {
                text: format!("{}{unit}", format_axis_value(row.value)),
                y: row.y,
            })
            .collect(),
        YLabelMode::MinMax => {
            let min_y = rows.first().map_or(baseline_y, |row| row.y);
            let max_y = rows.last().map_or(baseline_y, |row| row.y);
            vec![
                YAxisLabel {
                    text: format!("{}{unit}", format_bound_value(range.min)),
                    y: min_y,
                },
                YAxisLabel {
                    text: format!("{}{unit}", format_bound_value(range.max)),
                    y: max_y,
                },
            ]
        }
    }
}

#[must_use]
pub fn padded_label_width(measured_width: f64) -> f64 {
    measured_width.round() + Y_LABEL_PADDING_PX
}

/// Formats a gridline value rounded to one decimal, without a trailing `.0`.
#[must_use]
pub fn format_axis_value(value: f64) -> String {
    format_bound_value((value * 10.0).round() / 10.0)
}

/// Shortest round-trip formatting of a range bound.
#[must_use]
pub fn format_bound_value(value: f64) -> String {
    // Avoid printing `-0`.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::{
        LineMode, format_axis_value, format_bound_value, grid_lines_count, item_size, line_path,
    };
    use crate::core::{PathCommand, Point};

    #[test]
    fn axis_values_round_to_one_decimal() {
        assert_eq!(format_axis_value(100.0), "100");
        assert_eq!(format_axis_value(12.345), "12.3");
        assert_eq!(format_axis_value(-0.04), "0");
        assert_eq!(format_bound_value(0.25), "0.25");
    }

    #[test]
    fn negative_usable_height_yields_no_gridlines() {
        assert_eq!(grid_lines_count(-10.0), 0);
        assert_eq!(grid_lines_count(-50.0), 0);
        assert_eq!(grid_lines_count(0.0), 1);
        assert_eq!(grid_lines_count(f64::NAN), 0);
    }

    #[test]
    fn empty_item_count_falls_back_to_five_slots() {
        let size = item_size(620.0, 400.0, 20.0, 0, 20.0, 20.0);
        assert_eq!(size.width, (620.0 - 6.0 * 20.0) / 5.0);
        assert_eq!(size.height, 340.0);
    }

    #[test]
    fn area_outline_is_closed_on_the_baseline() {
        let points = [Point::new(10.0, 50.0), Point::new(30.0, 20.0)];
        let path = line_path(&points, LineMode::Straight, Some(100.0));
        let commands = path.commands();
        assert_eq!(commands[0], PathCommand::MoveTo(Point::new(10.0, 100.0)));
        assert_eq!(commands[commands.len() - 2], PathCommand::LineTo(Point::new(30.0, 100.0)));
        assert_eq!(commands[commands.len() - 1], PathCommand::Close);
    }
}
