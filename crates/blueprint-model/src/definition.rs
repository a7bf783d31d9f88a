use serde::Deserialize;

use crate::{Blueprint, Connection, DefinitionError, NodeDef, Slot};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBlueprint {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default, rename = "screen")]
    screens: Vec<RawScreen>,
    #[serde(default, rename = "connection")]
    connections: Vec<RawConnection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScreen {
    id: String,
    title: Option<String>,
    column: u32,
    #[serde(default)]
    row: u32,
    #[serde(default)]
    offset_y: f32,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConnection {
    id: Option<String>,
    from: String,
    to: String,
    label: Option<String>,
}

fn default_name() -> String {
    "Blueprint".to_string()
}

/// Reads a blueprint from its TOML form:
///
/// ```toml
/// name = "Checkout"
///
/// [[screen]]
/// id = "cart"
/// title = "Cart"
/// column = 0
///
/// [[connection]]
/// from = "cart"
/// to = "pay"
/// label = "Checkout"
/// ```
pub fn parse_blueprint(input: &str) -> Result<Blueprint, DefinitionError> {
    let raw: RawBlueprint = toml::from_str(input)?;

    let nodes = raw
        .screens
        .into_iter()
        .map(|screen| {
            let title = screen.title.unwrap_or_else(|| screen.id.clone());
            let slot = Slot::new(screen.column, screen.row).offset(screen.offset_y);
            let node = NodeDef::new(&screen.id, &title, slot);
            match screen.content {
                Some(content) => node.with_screen(&content),
                None => node,
            }
        })
        .collect();

    let connections = raw
        .connections
        .into_iter()
        .enumerate()
        .map(|(idx, conn)| Connection {
            id: conn.id.unwrap_or_else(|| format!("c{}", idx + 1)),
            from: conn.from,
            to: conn.to,
            label: conn.label,
        })
        .collect();

    Blueprint::new(&raw.name, nodes, connections)
}
