use std::fmt::Write;

use blueprint_layout::{LayoutStyle, compose_canvas};
use blueprint_model::{Blueprint, DeviceProfile, ViewMode, ViewState};
use blueprint_svg_render::{SvgRenderOptions, render_svg};

use crate::docs::render_documentation;
use crate::screens::MockScreens;

pub const DESIGN_TOOL_URL: &str =
    "https://embed.figma.com/board/cUbHThNjwzhxCADTmlihy5/NovaSupport-AI?node-id=4-89&embed-host=share";

pub const OPEN_DESIGN_TOOL_PATH: &str = "/action/open-design-tool";

const STYLE: &str = r#"
    * { box-sizing: border-box; }
    body { margin: 0; height: 100vh; display: flex; flex-direction: column; font-family: ui-sans-serif, system-ui, sans-serif; color: #18181b; background: #fafafa; }
    header { height: 64px; flex-shrink: 0; display: flex; align-items: center; justify-content: space-between; padding: 0 24px; background: #fff; border-bottom: 1px solid #e4e4e7; }
    header h1 { font-size: 16px; margin: 0; }
    header .by { font-size: 10px; color: #71717a; text-transform: uppercase; letter-spacing: 0.05em; }
    .controls { display: flex; gap: 16px; align-items: center; }
    .group { display: flex; gap: 4px; background: #fff; border: 1px solid #e4e4e7; border-radius: 8px; padding: 4px; }
    .group a { padding: 6px 10px; border-radius: 6px; font-size: 12px; color: #71717a; text-decoration: none; }
    .group a.active { background: #f4f4f5; color: #18181b; font-weight: 600; }
    .zoom { font: 12px ui-monospace, monospace; min-width: 48px; text-align: center; }
    main { flex: 1; overflow: auto; position: relative; }
    main.design-tool iframe { width: 100%; height: 100%; border: 1px solid rgba(0, 0, 0, 0.1); }
    .doc { max-width: 960px; margin: 0 auto; padding: 48px 32px; background: #fff; }
    .doc table { border-collapse: collapse; width: 100%; }
    .doc th, .doc td { text-align: left; padding: 8px 12px; border-bottom: 1px solid #e4e4e7; }
    .doc .cta { display: inline-block; padding: 10px 16px; background: #18181b; color: #fff; border-radius: 8px; text-decoration: none; }
    .pill { display: inline-block; padding: 2px 10px; border: 1px solid #e4e4e7; border-radius: 999px; font-size: 11px; font-weight: 700; text-transform: uppercase; }
"#;

pub fn render_page(state: &ViewState, blueprint: &Blueprint) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n<title>{} blueprint</title>\n<style>{STYLE}</style>\n</head>\n<body>\n",
        escape_html(blueprint.name())
    );
    toolbar(&mut html, state, blueprint);

    match state.view {
        ViewMode::Blueprint => {
            let style = LayoutStyle::default();
            let canvas = compose_canvas(blueprint, state.device, state.zoom, &style);
            html.push_str("<main class=\"blueprint\">");
            html.push_str(&render_svg(&canvas, &MockScreens, &SvgRenderOptions::default()));
            html.push_str("</main>");
        }
        ViewMode::Documentation => {
            html.push_str("<main class=\"documentation\">");
            html.push_str(&render_documentation(OPEN_DESIGN_TOOL_PATH));
            html.push_str("</main>");
        }
        ViewMode::DesignTool => {
            let _ = write!(
                html,
                "<main class=\"design-tool\"><iframe src=\"{}\" allowfullscreen></iframe></main>",
                escape_html(DESIGN_TOOL_URL)
            );
        }
    }

    html.push_str("\n</body>\n</html>");
    html
}

fn toolbar(html: &mut String, state: &ViewState, blueprint: &Blueprint) {
    let _ = write!(
        html,
        "<header><div><h1>{}</h1><div class=\"by\">Service blueprint</div></div><div class=\"controls\">",
        escape_html(blueprint.name())
    );

    html.push_str("<nav class=\"group\">");
    for mode in ViewMode::ALL {
        let class = if mode == state.view { " class=\"active\"" } else { "" };
        let _ = write!(
            html,
            "<a href=\"/action/view/{}\"{class}>{}</a>",
            mode.as_str(),
            mode.title()
        );
    }
    html.push_str("</nav>");

    html.push_str("<nav class=\"group\">");
    for device in DeviceProfile::ALL {
        let class = if device == state.device { " class=\"active\"" } else { "" };
        let title = match device {
            DeviceProfile::Mobile => "Mobile",
            DeviceProfile::Desktop => "Desktop",
        };
        let _ = write!(html, "<a href=\"/action/device/{}\"{class}>{title}</a>", device.as_str());
    }
    html.push_str("</nav>");

    if state.view == ViewMode::Blueprint {
        let _ = write!(
            html,
            "<nav class=\"group\"><a href=\"/action/zoom-out\" title=\"Zoom out\">−</a><span class=\"zoom\">{}</span><a href=\"/action/zoom-in\" title=\"Zoom in\">+</a></nav>",
            state.zoom
        );
    }

    html.push_str("</div></header>");
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use blueprint_model::{Action, support_blueprint};

    use super::*;

    #[test]
    fn blueprint_view_embeds_scaled_svg() {
        let html = render_page(&ViewState::default(), &support_blueprint());
        assert!(html.contains("<svg"));
        assert!(html.contains("scale(0.65)"));
        assert!(html.contains(">65%<"));
        assert!(html.contains("Welcome Back"));
    }

    #[test]
    fn documentation_view_hides_zoom() {
        let state = ViewState::default().applied(Action::SetView(ViewMode::Documentation));
        let html = render_page(&state, &support_blueprint());
        assert!(html.contains("Success Criteria"));
        assert!(!html.contains("/action/zoom-in"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn design_tool_view_embeds_iframe() {
        let state = ViewState::default().applied(Action::OpenDesignTool);
        let html = render_page(&state, &support_blueprint());
        assert!(html.contains("<iframe src=\"https://embed.figma.com/board/"));
        assert!(html.contains("node-id=4-89&amp;embed-host=share"));
    }

    #[test]
    fn marks_active_controls() {
        let state = ViewState::default().applied(Action::SetDevice(DeviceProfile::Desktop));
        let html = render_page(&state, &support_blueprint());
        assert!(html.contains("<a href=\"/action/device/desktop\" class=\"active\">Desktop</a>"));
        assert!(html.contains("<a href=\"/action/view/blueprint\" class=\"active\">Blueprint</a>"));
    }
}
