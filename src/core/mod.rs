pub mod caption;
pub mod cartesian;
pub mod circular;
pub mod color;
pub mod entry;
pub mod path;
pub mod radar;
pub mod range;
pub mod scale;
pub mod types;

pub use caption::{CaptionItem, CaptionSide, layout_caption};
pub use cartesian::{
    CartesianLayout, CartesianParams, GridRow, ItemSize, LineMode, YAxisLabel, YLabelMode,
    line_path,
};
pub use circular::{
    CaptionSplit, Sector, circular_radius, gauge_line_width, gauge_ring_radius,
    gauge_sweep_degrees, magnitude_sum, partition_sectors, point_on_circle, sector_path,
    split_captions_by_count, split_captions_by_value,
};
pub use color::Color;
pub use entry::{EntriesCollection, Entry, Series, has_entries, max_series_len, primary_series};
pub use path::{Path, PathCommand};
pub use radar::{
    caption_height, label_alignment, radar_radius, spoke_angle, spoke_point, value_point,
};
pub use range::{
    AbsoluteRange, ValueRange, computed_bounds, resolve_absolute_range, resolve_value_range,
};
pub use scale::VerticalScale;
pub use types::{Point, Rect, TextHAlign, Viewport};
