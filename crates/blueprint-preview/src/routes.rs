use blueprint_layout::{LayoutStyle, compose_canvas};
use blueprint_model::{Action, Blueprint, DeviceProfile, ViewMode, ViewState};
use blueprint_svg_render::{SvgRenderOptions, render_svg};
use tracing::debug;

use crate::page::{OPEN_DESIGN_TOOL_PATH, render_page};
use crate::screens::MockScreens;

#[derive(Debug)]
pub struct AppState {
    pub view: ViewState,
    pub blueprint: Blueprint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub location: Option<String>,
    pub body: Vec<u8>,
}

impl Response {
    fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            location: None,
            body: body.into_bytes(),
        }
    }

    fn svg(body: String) -> Self {
        Self {
            status: 200,
            content_type: "image/svg+xml",
            location: None,
            body: body.into_bytes(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            location: None,
            body: body.as_bytes().to_vec(),
        }
    }

    fn redirect(location: &str) -> Self {
        Self {
            status: 303,
            content_type: "text/plain; charset=utf-8",
            location: Some(location.to_string()),
            body: Vec::new(),
        }
    }
}

pub fn route(method: &str, target: &str, state: &mut AppState) -> Response {
    if method != "GET" {
        return Response::text(405, "Method Not Allowed");
    }

    let path = target.split(['?', '#']).next().unwrap_or(target);
    match path {
        "/" => Response::html(render_page(&state.view, &state.blueprint)),
        "/canvas.svg" => {
            let canvas = compose_canvas(
                &state.blueprint,
                state.view.device,
                state.view.zoom,
                &LayoutStyle::default(),
            );
            Response::svg(render_svg(&canvas, &MockScreens, &SvgRenderOptions::default()))
        }
        _ => match parse_action(path) {
            Some(Ok(action)) => {
                state.view.apply(action);
                debug!(?action, state = ?state.view, "applied action");
                Response::redirect("/")
            }
            Some(Err(message)) => Response::text(400, &message),
            None => Response::text(404, "Not Found"),
        },
    }
}

/// `None` when the path is not an action at all.
fn parse_action(path: &str) -> Option<Result<Action, String>> {
    if path == OPEN_DESIGN_TOOL_PATH {
        return Some(Ok(Action::OpenDesignTool));
    }
    let rest = path.strip_prefix("/action/")?;
    let action = match rest.split_once('/') {
        None => match rest {
            "zoom-in" => Ok(Action::ZoomIn),
            "zoom-out" => Ok(Action::ZoomOut),
            _ => return None,
        },
        Some(("device", value)) => value
            .parse::<DeviceProfile>()
            .map(Action::SetDevice)
            .map_err(|err| err.to_string()),
        Some(("view", value)) => value
            .parse::<ViewMode>()
            .map(Action::SetView)
            .map_err(|err| err.to_string()),
        Some(_) => return None,
    };
    Some(action)
}

pub fn parse_request_line(request: &str) -> Option<(&str, &str)> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    let path = parts.next()?;
    Some((method, path))
}

pub fn status_line(status: u16) -> &'static str {
    match status {
        200 => "HTTP/1.1 200 OK",
        303 => "HTTP/1.1 303 See Other",
        400 => "HTTP/1.1 400 Bad Request",
        404 => "HTTP/1.1 404 Not Found",
        405 => "HTTP/1.1 405 Method Not Allowed",
        _ => "HTTP/1.1 500 Internal Server Error",
    }
}

#[cfg(test)]
mod tests {
    use blueprint_model::support_blueprint;

    use super::*;

    fn app() -> AppState {
        AppState {
            view: ViewState::default(),
            blueprint: support_blueprint(),
        }
    }

    #[test]
    fn parses_request_line() {
        assert_eq!(
            parse_request_line("GET /action/zoom-in HTTP/1.1\r\nHost: x\r\n\r\n"),
            Some(("GET", "/action/zoom-in"))
        );
        assert_eq!(parse_request_line(""), None);
    }

    #[test]
    fn actions_redirect_home_and_update_state() {
        let mut state = app();
        let response = route("GET", "/action/zoom-in", &mut state);
        assert_eq!(response.status, 303);
        assert_eq!(response.location.as_deref(), Some("/"));
        assert_eq!(state.view.zoom.percent(), 75);

        route("GET", "/action/device/desktop", &mut state);
        assert_eq!(state.view.device, DeviceProfile::Desktop);
    }

    #[test]
    fn toolbar_and_docs_callback_agree() {
        let mut via_toolbar = app();
        route("GET", "/action/view/documentation", &mut via_toolbar);
        let mut via_docs = AppState {
            view: via_toolbar.view,
            blueprint: support_blueprint(),
        };

        route("GET", "/action/view/design-tool", &mut via_toolbar);
        route("GET", OPEN_DESIGN_TOOL_PATH, &mut via_docs);

        assert_eq!(via_toolbar.view, via_docs.view);
        assert_eq!(via_docs.view.view, ViewMode::DesignTool);
    }

    #[test]
    fn zoom_requests_clamp() {
        let mut state = app();
        for _ in 0..30 {
            route("GET", "/action/zoom-out", &mut state);
        }
        assert_eq!(state.view.zoom.percent(), 30);
    }

    #[test]
    fn rejects_unknown_values() {
        let mut state = app();
        let response = route("GET", "/action/device/tablet", &mut state);
        assert_eq!(response.status, 400);
        assert_eq!(state.view, ViewState::default());
        assert_eq!(route("GET", "/action/rotate", &mut state).status, 404);
        assert_eq!(route("GET", "/missing", &mut state).status, 404);
        assert_eq!(route("POST", "/", &mut state).status, 405);
    }

    #[test]
    fn serves_page_and_raw_svg() {
        let mut state = app();
        let page = route("GET", "/?v=1", &mut state);
        assert_eq!(page.status, 200);
        assert!(page.content_type.starts_with("text/html"));

        let svg = route("GET", "/canvas.svg", &mut state);
        assert_eq!(svg.content_type, "image/svg+xml");
        assert!(svg.body.starts_with(b"<svg"));
    }
}
