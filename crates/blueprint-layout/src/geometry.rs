use blueprint_model::{DeviceProfile, NodeDef, Size};

#[derive(Debug, Clone)]
pub struct LayoutStyle {
    pub origin_x: f32,
    pub origin_y: f32,
    pub column_gap: f32,
    pub row_gap: f32,
    pub label_width: f32,
    pub label_height: f32,
    pub canvas_padding: f32,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            origin_x: 100.0,
            origin_y: 100.0,
            column_gap: 200.0,
            row_gap: 100.0,
            label_width: 80.0,
            label_height: 24.0,
            canvas_padding: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: String,
    pub title: String,
    pub screen: String,
    pub column: u32,
    pub row: u32,
    /// Top-left corner.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutNode {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

pub fn column_spacing(size: Size, style: &LayoutStyle) -> f32 {
    size.width + style.column_gap
}

pub fn row_spacing(size: Size, style: &LayoutStyle) -> f32 {
    size.height + style.row_gap
}

pub fn place_nodes(
    nodes: &[NodeDef],
    profile: DeviceProfile,
    style: &LayoutStyle,
) -> Vec<LayoutNode> {
    let size = profile.node_size();
    let x_spacing = column_spacing(size, style);
    let y_spacing = row_spacing(size, style);

    nodes
        .iter()
        .map(|node| LayoutNode {
            id: node.id.clone(),
            title: node.title.clone(),
            screen: node.screen.clone(),
            column: node.slot.column,
            row: node.slot.row,
            x: style.origin_x + node.slot.column as f32 * x_spacing,
            y: style.origin_y + node.slot.offset_y + node.slot.row as f32 * y_spacing,
            width: size.width,
            height: size.height,
        })
        .collect()
}
