mod anchor;
mod canvas;
mod curve;
mod geometry;

pub use anchor::{AnchorPair, resolve_anchors};
pub use canvas::{Canvas, EdgeLabel, RoutedEdge, compose_canvas};
pub use curve::{CubicPath, route_curve};
pub use geometry::{LayoutNode, LayoutStyle, column_spacing, place_nodes, row_spacing};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn scaled(self, factor: f32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}
