mod shell;

use std::fmt::Write;

use blueprint_layout::{Canvas, LayoutNode, RoutedEdge};
use blueprint_model::Size;
use tracing::trace;

pub use shell::{ContentArea, content_area, title_slug};

/// Supplies the body drawn inside each device frame.
///
/// `screen` is the opaque handle carried by the node. The returned fragment is
/// positioned with its origin at the top-left of the content area and is
/// clipped to `size`. Returning `None` falls back to a titled placeholder.
pub trait ScreenContent {
    fn render(&self, screen: &str, size: Size) -> Option<String>;
}

/// Draws no content; every screen gets the placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderContent;

impl ScreenContent for PlaceholderContent {
    fn render(&self, _screen: &str, _size: Size) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    pub background: String,
    pub screen_background: String,
    pub edge_halo: String,
    pub edge_color: String,
    pub arrow_color: String,
    pub label_border: String,
    pub text_color: String,
    pub muted_text_color: String,
    pub font_family: String,
    pub mono_font_family: String,
    pub app_host: String,
    pub show_grid: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            background: "#fafafa".to_string(),
            screen_background: "#ffffff".to_string(),
            edge_halo: "#e4e4e7".to_string(),
            edge_color: "#3f3f46".to_string(),
            arrow_color: "#52525b".to_string(),
            label_border: "#e4e4e7".to_string(),
            text_color: "#18181b".to_string(),
            muted_text_color: "#71717a".to_string(),
            font_family: "Inter, Helvetica, Arial, sans-serif".to_string(),
            mono_font_family: "SF Mono, Menlo, monospace".to_string(),
            app_host: "zeal.ai".to_string(),
            show_grid: true,
        }
    }
}

pub fn render_svg(
    canvas: &Canvas,
    content: &dyn ScreenContent,
    options: &SvgRenderOptions,
) -> String {
    let mut svg = String::new();
    let (view_w, view_h) = canvas.view_size();
    let view_w = view_w.ceil().max(1.0);
    let view_h = view_h.ceil().max(1.0);

    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{view_w}\" height=\"{view_h}\" viewBox=\"0 0 {view_w} {view_h}\">"
    );

    svg.push_str("<defs>");
    let _ = write!(
        svg,
        "<marker id=\"arrowhead\" markerWidth=\"10\" markerHeight=\"7\" refX=\"9\" refY=\"3.5\" orient=\"auto\"><polygon points=\"0 0, 10 3.5, 0 7\" fill=\"{}\"/></marker>",
        options.arrow_color
    );
    if options.show_grid {
        svg.push_str(
            "<pattern id=\"grid\" width=\"24\" height=\"24\" patternUnits=\"userSpaceOnUse\"><circle cx=\"1\" cy=\"1\" r=\"1\" fill=\"#d4d4d8\"/></pattern>",
        );
    }
    for (idx, node) in canvas.nodes.iter().enumerate() {
        let area = content_area(canvas.profile, Size { width: node.width, height: node.height });
        let _ = write!(
            svg,
            "<clipPath id=\"screen-{idx}\"><rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\"/></clipPath>",
            area.size.width, area.size.height
        );
    }
    svg.push_str("</defs>");

    let _ = write!(svg, "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>", options.background);
    if options.show_grid {
        svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"url(#grid)\"/>");
    }

    let _ = write!(svg, "<g transform=\"scale({})\">", canvas.scale());

    for edge in &canvas.edges {
        edge_svg(&mut svg, edge, options);
    }

    for (idx, node) in canvas.nodes.iter().enumerate() {
        node_svg(&mut svg, idx, node, canvas, content, options);
    }

    svg.push_str("</g></svg>");
    svg
}

fn edge_svg(out: &mut String, edge: &RoutedEdge, options: &SvgRenderOptions) {
    let d = edge.path.to_svg_path();
    let _ = write!(
        out,
        "<g data-edge=\"{}\"><path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"6\"/>",
        escape_xml(&edge.id),
        options.edge_halo
    );
    let _ = write!(
        out,
        "<path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" stroke-dasharray=\"6 4\" opacity=\"0.6\" marker-end=\"url(#arrowhead)\"/>",
        options.edge_color
    );
    if let Some(label) = &edge.label {
        let center = label.center();
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"4\" ry=\"4\" fill=\"#ffffff\" stroke=\"{}\"/>",
            label.x, label.y, label.width, label.height, options.label_border
        );
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"10\" font-weight=\"500\" fill=\"{}\">{}</text>",
            center.x,
            center.y,
            options.font_family,
            options.muted_text_color,
            escape_xml(&label.text)
        );
    }
    out.push_str("</g>");
}

fn node_svg(
    out: &mut String,
    idx: usize,
    node: &LayoutNode,
    canvas: &Canvas,
    content: &dyn ScreenContent,
    options: &SvgRenderOptions,
) {
    let _ = write!(
        out,
        "<g data-node=\"{}\" transform=\"translate({} {})\">",
        escape_xml(&node.id),
        node.x,
        node.y
    );
    let _ = write!(
        out,
        "<text x=\"0\" y=\"-24\" font-family=\"{}\" font-size=\"14\" font-weight=\"bold\" letter-spacing=\"1\" fill=\"{}\">{}</text>",
        options.font_family,
        options.muted_text_color,
        escape_xml(&node.title.to_uppercase())
    );
    let _ = write!(
        out,
        "<text x=\"0\" y=\"-8\" font-family=\"{}\" font-size=\"12\" fill=\"#a1a1aa\">ID: {}</text>",
        options.mono_font_family,
        escape_xml(&node.id)
    );

    shell::frame_svg(out, node, canvas.profile, options);

    let area = content_area(canvas.profile, Size { width: node.width, height: node.height });
    let _ = write!(
        out,
        "<g transform=\"translate({} {})\" clip-path=\"url(#screen-{idx})\">",
        area.x, area.y
    );
    match content.render(&node.screen, area.size) {
        Some(fragment) => out.push_str(&fragment),
        None => {
            trace!(screen = %node.screen, "no content for screen, drawing placeholder");
            placeholder_svg(out, node, area.size, options);
        }
    }
    out.push_str("</g></g>");
}

fn placeholder_svg(out: &mut String, node: &LayoutNode, size: Size, options: &SvgRenderOptions) {
    let _ = write!(
        out,
        "<rect width=\"{}\" height=\"{}\" fill=\"#f4f4f5\"/><text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"16\" fill=\"{}\">{}</text>",
        size.width,
        size.height,
        size.width / 2.0,
        size.height / 2.0,
        options.font_family,
        options.text_color,
        escape_xml(&node.title)
    );
}

pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
