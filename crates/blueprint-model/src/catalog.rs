use crate::{Blueprint, Connection, NodeDef, Slot};

/// Screens sitting on the main row are pushed down so the two-screen column
/// between them stays visually centred.
const MAIN_ROW_OFFSET: f32 = 200.0;

/// The support-desk flow: sign in, land on the dashboard, branch to chat or the
/// help centre, and escalate to the operations console.
pub fn support_blueprint() -> Blueprint {
    let nodes = vec![
        NodeDef::new("login", "Login / Auth", Slot::new(0, 0).offset(MAIN_ROW_OFFSET)),
        NodeDef::new(
            "dashboard",
            "Customer Dashboard",
            Slot::new(1, 0).offset(MAIN_ROW_OFFSET),
        ),
        NodeDef::new("chat", "AI Chat Interface", Slot::new(2, 0)),
        NodeDef::new("kb", "Knowledge Base", Slot::new(2, 1)),
        NodeDef::new("agent", "Agent Ops Center", Slot::new(3, 0).offset(MAIN_ROW_OFFSET)),
    ];

    let connections = vec![
        Connection::new("c1", "login", "dashboard").with_label("Auth"),
        Connection::new("c2", "dashboard", "chat").with_label("Start Ticket"),
        Connection::new("c3", "dashboard", "kb").with_label("Browse Help"),
        Connection::new("c4", "chat", "agent").with_label("Escalation"),
        Connection::new("c5", "kb", "chat").with_label("Not Found"),
    ];

    Blueprint::assemble("Zeal AI", nodes, connections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_passes_validation() {
        let blueprint = support_blueprint();
        let rebuilt = Blueprint::new(
            blueprint.name(),
            blueprint.nodes().to_vec(),
            blueprint.connections().to_vec(),
        )
        .expect("catalog should validate");
        assert_eq!(rebuilt, blueprint);
    }

    #[test]
    fn every_connection_resolves() {
        let blueprint = support_blueprint();
        for connection in blueprint.connections() {
            assert!(blueprint.node(&connection.from).is_some(), "{}", connection.id);
            assert!(blueprint.node(&connection.to).is_some(), "{}", connection.id);
        }
    }
}
