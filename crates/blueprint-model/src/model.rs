use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::{DefinitionError, UnknownVariant};

pub const MOBILE_SIZE: Size = Size {
    width: 320.0,
    height: 650.0,
};

pub const DESKTOP_SIZE: Size = Size {
    width: 900.0,
    height: 600.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Sizing variant applied uniformly to every screen of one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceProfile {
    #[default]
    Mobile,
    Desktop,
}

impl DeviceProfile {
    pub const ALL: [DeviceProfile; 2] = [DeviceProfile::Mobile, DeviceProfile::Desktop];

    pub fn node_size(self) -> Size {
        match self {
            DeviceProfile::Mobile => MOBILE_SIZE,
            DeviceProfile::Desktop => DESKTOP_SIZE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceProfile::Mobile => "mobile",
            DeviceProfile::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceProfile {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DeviceProfile::ALL
            .into_iter()
            .find(|profile| profile.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownVariant::new("device profile", value))
    }
}

/// Logical grid cell of a screen. `offset_y` nudges the screen down inside its row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Slot {
    pub column: u32,
    pub row: u32,
    pub offset_y: f32,
}

impl Slot {
    pub fn new(column: u32, row: u32) -> Self {
        Self {
            column,
            row,
            offset_y: 0.0,
        }
    }

    pub fn offset(mut self, offset_y: f32) -> Self {
        self.offset_y = offset_y;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeDef {
    pub id: String,
    pub title: String,
    pub slot: Slot,
    /// Opaque handle handed to the screen content provider.
    pub screen: String,
}

impl NodeDef {
    pub fn new(id: &str, title: &str, slot: Slot) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            slot,
            screen: id.to_string(),
        }
    }

    pub fn with_screen(mut self, screen: &str) -> Self {
        self.screen = screen.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: String,
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

impl Connection {
    pub fn new(id: &str, from: &str, to: &str) -> Self {
        Self {
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}

/// A static set of screens and the flows between them.
///
/// Screen ids are unique. Connections may name screens that do not exist;
/// those are dropped when the canvas is composed.
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    name: String,
    nodes: Vec<NodeDef>,
    connections: Vec<Connection>,
}

impl Blueprint {
    pub fn new(
        name: &str,
        nodes: Vec<NodeDef>,
        connections: Vec<Connection>,
    ) -> Result<Self, DefinitionError> {
        let mut seen = HashSet::new();
        for (idx, node) in nodes.iter().enumerate() {
            if node.id.trim().is_empty() {
                return Err(DefinitionError::EmptyId(idx));
            }
            if !seen.insert(node.id.as_str()) {
                return Err(DefinitionError::DuplicateNode(node.id.clone()));
            }
        }
        Ok(Self::assemble(name, nodes, connections))
    }

    pub(crate) fn assemble(name: &str, nodes: Vec<NodeDef>, connections: Vec<Connection>) -> Self {
        Self {
            name: name.to_string(),
            nodes,
            connections,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[NodeDef] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn node(&self, id: &str) -> Option<&NodeDef> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_select_fixed_sizes() {
        assert_eq!(DeviceProfile::Mobile.node_size(), Size { width: 320.0, height: 650.0 });
        assert_eq!(DeviceProfile::Desktop.node_size(), Size { width: 900.0, height: 600.0 });
    }

    #[test]
    fn parses_profiles_case_insensitively() {
        assert_eq!("Desktop".parse::<DeviceProfile>(), Ok(DeviceProfile::Desktop));
        assert_eq!(" mobile ".parse::<DeviceProfile>(), Ok(DeviceProfile::Mobile));
        let err = "tablet".parse::<DeviceProfile>().unwrap_err();
        assert_eq!(err.value, "tablet");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let nodes = vec![
            NodeDef::new("a", "A", Slot::new(0, 0)),
            NodeDef::new("a", "Again", Slot::new(1, 0)),
        ];
        let err = Blueprint::new("dup", nodes, Vec::new()).unwrap_err();
        assert!(matches!(err, DefinitionError::DuplicateNode(id) if id == "a"));
    }

    #[test]
    fn rejects_blank_ids() {
        let nodes = vec![NodeDef::new(" ", "Blank", Slot::new(0, 0))];
        let err = Blueprint::new("blank", nodes, Vec::new()).unwrap_err();
        assert!(matches!(err, DefinitionError::EmptyId(0)));
    }
}
