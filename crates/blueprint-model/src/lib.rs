mod catalog;
mod definition;
mod model;
mod state;

pub use catalog::support_blueprint;
pub use definition::parse_blueprint;
pub use model::{
    Blueprint, Connection, DESKTOP_SIZE, DeviceProfile, MOBILE_SIZE, NodeDef, Size, Slot,
};
pub use state::{Action, ViewMode, ViewState, ZoomFactor};

#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("invalid blueprint definition: {0}")]
    Syntax(#[from] toml::de::Error),
    #[error("duplicate screen id `{0}`")]
    DuplicateNode(String),
    #[error("screen at position {0} has an empty id")]
    EmptyId(usize),
}

/// Returned when a textual device profile, view mode, or zoom level is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
