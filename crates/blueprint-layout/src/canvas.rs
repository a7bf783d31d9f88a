use std::collections::HashMap;

use blueprint_model::{Blueprint, DeviceProfile, ZoomFactor};
use tracing::debug;

use crate::{
    AnchorPair, CubicPath, LayoutNode, LayoutStyle, Point, place_nodes, resolve_anchors,
    route_curve,
};

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub text: String,
    /// Top-left corner of the label box, centred on the anchor midpoint.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl EdgeLabel {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutedEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub anchors: AnchorPair,
    pub path: CubicPath,
    pub label: Option<EdgeLabel>,
}

/// A fully composed scene in layout coordinates. Renderers apply `zoom` as a
/// single uniform scale over everything here.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub profile: DeviceProfile,
    pub zoom: ZoomFactor,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<RoutedEdge>,
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn scale(&self) -> f32 {
        self.zoom.scale()
    }

    pub fn to_view(&self, point: Point) -> Point {
        point.scaled(self.scale())
    }

    pub fn view_size(&self) -> (f32, f32) {
        (self.width * self.scale(), self.height * self.scale())
    }

    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&RoutedEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }
}

pub fn compose_canvas(
    blueprint: &Blueprint,
    profile: DeviceProfile,
    zoom: ZoomFactor,
    style: &LayoutStyle,
) -> Canvas {
    let nodes = place_nodes(blueprint.nodes(), profile, style);
    let node_index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.id.as_str(), idx))
        .collect();

    let mut edges = Vec::new();
    for connection in blueprint.connections() {
        let (Some(&from), Some(&to)) = (
            node_index.get(connection.from.as_str()),
            node_index.get(connection.to.as_str()),
        ) else {
            continue;
        };
        let anchors = resolve_anchors(&nodes[from], &nodes[to], profile);
        let path = route_curve(anchors.source, anchors.target);
        let label = connection.label.as_ref().map(|text| {
            let mid = anchors.source.midpoint(anchors.target);
            EdgeLabel {
                text: text.clone(),
                x: mid.x - style.label_width / 2.0,
                y: mid.y - style.label_height / 2.0,
                width: style.label_width,
                height: style.label_height,
            }
        });
        edges.push(RoutedEdge {
            id: connection.id.clone(),
            from: connection.from.clone(),
            to: connection.to.clone(),
            anchors,
            path,
            label,
        });
    }

    let (width, height) = compute_canvas_extent(&nodes, &edges, style);
    debug!(
        profile = %profile,
        zoom = %zoom,
        nodes = nodes.len(),
        edges = edges.len(),
        "composed canvas"
    );

    Canvas {
        profile,
        zoom,
        nodes,
        edges,
        width,
        height,
    }
}

/// Bottom-right corner of everything drawn, plus padding. Curves are bounded
/// by their control points, so a backward edge bulging past the last column
/// still fits.
fn compute_canvas_extent(
    nodes: &[LayoutNode],
    edges: &[RoutedEdge],
    style: &LayoutStyle,
) -> (f32, f32) {
    let node_corners = nodes
        .iter()
        .map(|node| Point::new(node.right(), node.bottom()));
    let curve_points = edges.iter().flat_map(|edge| {
        let path = &edge.path;
        [path.start, path.control1, path.control2, path.end]
    });
    let label_corners = edges
        .iter()
        .filter_map(|edge| edge.label.as_ref())
        .map(|label| Point::new(label.x + label.width, label.y + label.height));

    let (max_x, max_y) = node_corners
        .chain(curve_points)
        .chain(label_corners)
        .fold((0.0f32, 0.0f32), |(x, y), point| (x.max(point.x), y.max(point.y)));
    (max_x + style.canvas_padding, max_y + style.canvas_padding)
}
