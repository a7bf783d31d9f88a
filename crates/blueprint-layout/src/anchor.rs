use blueprint_model::DeviceProfile;

use crate::{LayoutNode, Point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPair {
    pub source: Point,
    pub target: Point,
}

/// Flows always read left to right: leave the source at its right-centre and
/// enter the target at its left-centre. No attempt is made to pick a nearer
/// side or avoid overlaps.
pub fn resolve_anchors(
    source: &LayoutNode,
    target: &LayoutNode,
    profile: DeviceProfile,
) -> AnchorPair {
    let size = profile.node_size();
    AnchorPair {
        source: Point::new(source.x + size.width, source.y + size.height / 2.0),
        target: Point::new(target.x, target.y + size.height / 2.0),
    }
}
