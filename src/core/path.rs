use smallvec::SmallVec;

use crate::core::Point;

/// One segment instruction of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    /// Circular arc in radians, angle 0 pointing at +x and growing clockwise
    /// in screen space. Sweeps counter-clockwise when `end_angle <
    /// start_angle`. A line joins the current point to the arc start.
    ArcTo {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Close,
}

/// Backend-agnostic vector path in pixel space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: SmallVec<[PathCommand; 8]>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed full circle.
    #[must_use]
    pub fn circle(center: Point, radius: f64) -> Self {
        let mut path = Self::new();
        path.move_to(Point::new(center.x + radius, center.y));
        path.arc_to(center, radius, 0.0, std::f64::consts::TAU);
        path.close();
        path
    }

    /// Open path through `points` in order.
    #[must_use]
    pub fn polyline(points: &[Point]) -> Self {
        let mut path = Self::new();
        let mut iter = points.iter().copied();
        if let Some(first) = iter.next() {
            path.move_to(first);
        }
        for point in iter {
            path.line_to(point);
        }
        path
    }

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    pub fn line_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    pub fn arc_to(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            center,
            radius,
            start_angle,
            end_angle,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
