use std::fmt;

use crate::Point;

/// A cubic Bezier segment. `Display` renders it as SVG path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPath {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

/// Control points sit half the horizontal distance away from each endpoint
/// and keep that endpoint's y, so the curve leaves and enters horizontally.
/// Steep connections come out as pronounced S-curves; keep the formula as is,
/// other renderers depend on matching it exactly.
pub fn route_curve(source: Point, target: Point) -> CubicPath {
    let dist = (target.x - source.x).abs() * 0.5;
    CubicPath {
        start: source,
        control1: Point::new(source.x + dist, source.y),
        control2: Point::new(target.x - dist, target.y),
        end: target,
    }
}

impl CubicPath {
    pub fn point_at(&self, t: f32) -> Point {
        let u = 1.0 - t;
        let a = u * u * u;
        let b = 3.0 * u * u * t;
        let c = 3.0 * u * t * t;
        let d = t * t * t;
        Point::new(
            a * self.start.x + b * self.control1.x + c * self.control2.x + d * self.end.x,
            a * self.start.y + b * self.control1.y + c * self.control2.y + d * self.end.y,
        )
    }

    /// Direction of travel where the curve meets `end`, not normalised.
    pub fn end_direction(&self) -> Point {
        let from = if self.control2 == self.end {
            self.start
        } else {
            self.control2
        };
        Point::new(self.end.x - from.x, self.end.y - from.y)
    }

    pub fn to_svg_path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CubicPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y,
        )
    }
}
