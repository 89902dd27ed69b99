use std::f64::consts::TAU;

use cairo::{Antialias, Context, Format, ImageSurface, LinearGradient as CairoGradient};
use pango::FontDescription;

use crate::core::{Color, Path, PathCommand, Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    DrawingSurface, LineCap, Paint, PointMode, StrokeStyle, TextBounds, TextHAlign,
    TextPrimitive, TextStyle,
};

const DEFAULT_FONT_FAMILY: &str = "Sans";

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Draws either onto an owned offscreen image surface (`CairoSurface::new`)
/// or onto an external Cairo context, for example one handed out by a GTK
/// `DrawingArea` callback (`CairoSurface::from_context`).
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            context,
            image: Some(image),
        })
    }

    #[must_use]
    pub fn from_context(context: Context) -> Self {
        Self {
            context,
            image: None,
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    /// Offscreen image, `None` for context-backed surfaces.
    #[must_use]
    pub fn image(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    fn apply_paint(&self, paint: &Paint) -> ChartResult<()> {
        match paint {
            Paint::Solid(color) => {
                apply_color(&self.context, *color);
                Ok(())
            }
            Paint::LinearGradient(gradient) => {
                let pattern = CairoGradient::new(
                    gradient.start.x,
                    gradient.start.y,
                    gradient.end.x,
                    gradient.end.y,
                );
                for stop in &gradient.stops {
                    pattern.add_color_stop_rgba(
                        stop.offset,
                        stop.color.red,
                        stop.color.green,
                        stop.color.blue,
                        stop.color.alpha,
                    );
                }
                self.context
                    .set_source(&pattern)
                    .map_err(|err| map_backend_error("failed to set gradient source", err))
            }
        }
    }

    fn append_path(&self, path: &Path) {
        self.context.new_path();
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo(point) => self.context.move_to(point.x, point.y),
                PathCommand::LineTo(point) => self.context.line_to(point.x, point.y),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => self.context.curve_to(
                    control1.x, control1.y, control2.x, control2.y, to.x, to.y,
                ),
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => {
                    if end_angle >= start_angle {
                        self.context
                            .arc(center.x, center.y, radius, start_angle, end_angle);
                    } else {
                        self.context
                            .arc_negative(center.x, center.y, radius, start_angle, end_angle);
                    }
                }
                PathCommand::Close => self.context.close_path(),
            }
        }
    }

    fn create_layout(&self, text: &str, style: &TextStyle) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let family = style
            .typeface
            .as_ref()
            .map_or(DEFAULT_FONT_FAMILY, |typeface| typeface.family.as_str());
        let mut font_description = FontDescription::from_string(family);
        font_description.set_absolute_size(style.size_px * f64::from(pango::SCALE));
        if style.bold {
            font_description.set_weight(pango::Weight::Bold);
        }
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);
        layout
    }
}

impl DrawingSurface for CairoSurface {
    fn clear(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        apply_color(&self.context, color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    fn save(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))
    }

    fn translate(&mut self, dx: f64, dy: f64) -> ChartResult<()> {
        self.context.translate(dx, dy);
        Ok(())
    }

    fn rotate_degrees(&mut self, degrees: f64) -> ChartResult<()> {
        self.context.rotate(degrees.to_radians());
        Ok(())
    }

    fn draw_filled_path(
        &mut self,
        path: &Path,
        paint: &Paint,
        antialias: bool,
    ) -> ChartResult<()> {
        self.context.set_antialias(antialias_mode(antialias));
        self.append_path(path);
        self.apply_paint(paint)?;
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }

    fn draw_stroked_path(
        &mut self,
        path: &Path,
        paint: &Paint,
        stroke: StrokeStyle,
    ) -> ChartResult<()> {
        self.context.set_antialias(antialias_mode(stroke.antialias));
        self.context.set_line_width(stroke.width);
        self.context.set_line_cap(match stroke.cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
        });
        match stroke.dash {
            Some((on, off)) => self.context.set_dash(&[on, off], 0.0),
            None => self.context.set_dash(&[], 0.0),
        }
        self.append_path(path);
        self.apply_paint(paint)?;
        let result = self
            .context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err));
        self.context.set_dash(&[], 0.0);
        result
    }

    fn draw_filled_rect(&mut self, rect: Rect, paint: &Paint) -> ChartResult<()> {
        self.context.new_path();
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.apply_paint(paint)?;
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f64) -> ChartResult<()> {
        self.context.new_path();
        apply_color(&self.context, color);
        self.context.set_line_width(width);
        self.context.set_line_cap(cairo::LineCap::Butt);
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))
    }

    fn draw_point_marker(
        &mut self,
        center: Point,
        color: Color,
        size: f64,
        mode: PointMode,
    ) -> ChartResult<()> {
        let half = size / 2.0;
        self.context.new_path();
        match mode {
            PointMode::None => return Ok(()),
            PointMode::Circle => {
                self.context.set_antialias(Antialias::Default);
                self.context.arc(center.x, center.y, half, 0.0, TAU);
            }
            PointMode::Square => {
                self.context
                    .rectangle(center.x - half, center.y - half, size, size);
            }
        }
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill point marker", err))
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        let layout = self.create_layout(&text.text, &text.style);
        let (text_width, _) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        // Pango positions layouts by their top edge; primitives carry the baseline.
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        self.context.set_antialias(antialias_mode(text.style.antialias));
        apply_color(&self.context, text.color);
        self.context.move_to(x, text.y - baseline);
        pangocairo::functions::show_layout(&self.context, &layout);
        Ok(())
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> TextBounds {
        if text.is_empty() {
            return TextBounds::default();
        }
        let layout = self.create_layout(text, style);
        let (_, logical) = layout.pixel_extents();
        TextBounds {
            width: f64::from(logical.width()),
            height: f64::from(logical.height()),
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn antialias_mode(enabled: bool) -> Antialias {
    if enabled {
        Antialias::Default
    } else {
        Antialias::None
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
