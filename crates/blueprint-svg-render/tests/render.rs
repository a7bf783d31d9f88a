use blueprint_layout::{LayoutStyle, compose_canvas};
use blueprint_model::{
    Blueprint, Connection, DeviceProfile, NodeDef, Size, Slot, ZoomFactor, support_blueprint,
};
use blueprint_svg_render::{
    PlaceholderContent, ScreenContent, SvgRenderOptions, content_area, escape_xml, render_svg,
};
use pretty_assertions::assert_eq;

struct SizedContent;

impl ScreenContent for SizedContent {
    fn render(&self, screen: &str, size: Size) -> Option<String> {
        if screen == "kb" {
            return None;
        }
        Some(format!("<text>{screen}:{}x{}</text>", size.width, size.height))
    }
}

fn render(blueprint: &Blueprint, profile: DeviceProfile, zoom: ZoomFactor) -> String {
    let canvas = compose_canvas(blueprint, profile, zoom, &LayoutStyle::default());
    render_svg(&canvas, &PlaceholderContent, &SvgRenderOptions::default())
}

#[test]
fn draws_every_edge_with_arrowhead() {
    let svg = render(&support_blueprint(), DeviceProfile::Mobile, ZoomFactor::default());
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("data-edge=").count(), 5);
    assert_eq!(svg.matches("marker-end=\"url(#arrowhead)\"").count(), 5);
    assert!(svg.contains("d=\"M 420 625 C 520 625, 520 625, 620 625\""));
    assert!(svg.contains(">Start Ticket</text>"));
}

#[test]
fn applies_zoom_once_over_the_scene() {
    let svg = render(&support_blueprint(), DeviceProfile::Mobile, ZoomFactor::default());
    assert_eq!(svg.matches("transform=\"scale(").count(), 1);
    assert!(svg.contains("transform=\"scale(0.65)\""));
}

#[test]
fn desktop_frames_show_address_bar() {
    let svg = render(&support_blueprint(), DeviceProfile::Desktop, ZoomFactor::default());
    assert!(svg.contains("zeal.ai/app/agent-ops-center"));
    assert!(!svg.contains(">9:41<"));

    let mobile = render(&support_blueprint(), DeviceProfile::Mobile, ZoomFactor::default());
    assert!(mobile.contains(">9:41<"));
}

#[test]
fn content_provider_receives_inner_size() {
    let canvas = compose_canvas(
        &support_blueprint(),
        DeviceProfile::Desktop,
        ZoomFactor::default(),
        &LayoutStyle::default(),
    );
    let svg = render_svg(&canvas, &SizedContent, &SvgRenderOptions::default());
    let area = content_area(DeviceProfile::Desktop, DeviceProfile::Desktop.node_size());
    let expected = format!("<text>login:{}x{}</text>", area.size.width, area.size.height);
    assert!(svg.contains(&expected));
    // kb falls back to the placeholder.
    assert!(svg.contains(">Knowledge Base</text>"));
}

#[test]
fn dangling_edges_are_not_drawn() {
    let blueprint = Blueprint::new(
        "dangling",
        vec![NodeDef::new("a", "A", Slot::new(0, 0))],
        vec![Connection::new("x", "a", "missing").with_label("Lost")],
    )
    .unwrap();
    let svg = render(&blueprint, DeviceProfile::Mobile, ZoomFactor::default());
    assert!(!svg.contains("data-edge"));
    assert!(!svg.contains("Lost"));
}

#[test]
fn escapes_titles_and_labels() {
    let blueprint = Blueprint::new(
        "escape",
        vec![
            NodeDef::new("a", "Q&A <beta>", Slot::new(0, 0)),
            NodeDef::new("b", "B", Slot::new(1, 0)),
        ],
        vec![Connection::new("ab", "a", "b").with_label("\"go\"")],
    )
    .unwrap();
    let svg = render(&blueprint, DeviceProfile::Mobile, ZoomFactor::default());
    assert!(svg.contains("Q&amp;A &lt;beta&gt;"));
    assert!(svg.contains("&quot;go&quot;"));
    assert_eq!(escape_xml("it's"), "it&#39;s");
}
