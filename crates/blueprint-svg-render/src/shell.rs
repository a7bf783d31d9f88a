use std::fmt::Write;

use blueprint_layout::LayoutNode;
use blueprint_model::{DeviceProfile, Size};

use crate::{SvgRenderOptions, escape_xml};

const MOBILE_BEZEL: f32 = 6.0;
const MOBILE_STATUS_BAR: f32 = 40.0;
const MOBILE_BOTTOM_INSET: f32 = 8.0;
const MOBILE_RADIUS: f32 = 48.0;
const DESKTOP_CHROME: f32 = 40.0;
const DESKTOP_RADIUS: f32 = 8.0;

/// Region inside a device frame that belongs to the screen content, relative
/// to the frame's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentArea {
    pub x: f32,
    pub y: f32,
    pub size: Size,
}

pub fn content_area(profile: DeviceProfile, frame: Size) -> ContentArea {
    match profile {
        DeviceProfile::Mobile => ContentArea {
            x: MOBILE_BEZEL,
            y: MOBILE_STATUS_BAR,
            size: Size {
                width: frame.width - MOBILE_BEZEL * 2.0,
                height: frame.height - MOBILE_STATUS_BAR - MOBILE_BEZEL - MOBILE_BOTTOM_INSET,
            },
        },
        DeviceProfile::Desktop => ContentArea {
            x: 1.0,
            y: DESKTOP_CHROME + 1.0,
            size: Size {
                width: frame.width - 2.0,
                height: frame.height - DESKTOP_CHROME - 2.0,
            },
        },
    }
}

/// Lower-case the title and replace whitespace with dashes, as used in the
/// desktop address bar.
pub fn title_slug(title: &str) -> String {
    title
        .chars()
        .map(|ch| if ch.is_whitespace() { '-' } else { ch })
        .collect::<String>()
        .to_lowercase()
}

pub(crate) fn frame_svg(
    out: &mut String,
    node: &LayoutNode,
    profile: DeviceProfile,
    options: &SvgRenderOptions,
) {
    let w = node.width;
    let h = node.height;
    match profile {
        DeviceProfile::Mobile => {
            let _ = write!(
                out,
                "<rect x=\"{b}\" y=\"{b}\" width=\"{}\" height=\"{}\" rx=\"{MOBILE_RADIUS}\" ry=\"{MOBILE_RADIUS}\" fill=\"{}\" stroke=\"#27272a\" stroke-width=\"{}\"/>",
                w - MOBILE_BEZEL,
                h - MOBILE_BEZEL,
                options.screen_background,
                MOBILE_BEZEL,
                b = MOBILE_BEZEL / 2.0,
            );
            let _ = write!(
                out,
                "<text x=\"30\" y=\"26\" font-family=\"{}\" font-size=\"10\" font-weight=\"bold\" fill=\"#18181b\">9:41</text>",
                options.font_family
            );
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"8\" width=\"80\" height=\"24\" rx=\"12\" fill=\"#18181b\"/>",
                w / 2.0 - 40.0
            );
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"128\" height=\"6\" rx=\"3\" fill=\"#18181b\" opacity=\"0.9\"/>",
                w / 2.0 - 64.0,
                h - 14.0
            );
        }
        DeviceProfile::Desktop => {
            let _ = write!(
                out,
                "<rect x=\"0.5\" y=\"0.5\" width=\"{}\" height=\"{}\" rx=\"{DESKTOP_RADIUS}\" ry=\"{DESKTOP_RADIUS}\" fill=\"{}\" stroke=\"#e4e4e7\"/>",
                w - 1.0,
                h - 1.0,
                options.screen_background
            );
            let _ = write!(
                out,
                "<rect x=\"1\" y=\"1\" width=\"{}\" height=\"{DESKTOP_CHROME}\" fill=\"#fafafa\"/><line x1=\"1\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#e4e4e7\"/>",
                w - 2.0,
                DESKTOP_CHROME + 0.5,
                w - 1.0,
                DESKTOP_CHROME + 0.5
            );
            for idx in 0..3 {
                let _ = write!(
                    out,
                    "<circle cx=\"{}\" cy=\"20\" r=\"6\" fill=\"#d4d4d8\" stroke=\"#a1a1aa\"/>",
                    22.0 + idx as f32 * 20.0
                );
            }
            let bar_x = 140.0;
            let _ = write!(
                out,
                "<rect x=\"{bar_x}\" y=\"6\" width=\"{}\" height=\"28\" rx=\"4\" fill=\"#ffffff\" stroke=\"#e4e4e7\"/>",
                (w - bar_x - 16.0).max(0.0)
            );
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"24\" font-family=\"{}\" font-size=\"12\" fill=\"#71717a\">{}/app/{}</text>",
                bar_x + 12.0,
                options.font_family,
                escape_xml(&options.app_host),
                escape_xml(&title_slug(&node.title))
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_titles() {
        assert_eq!(title_slug("Agent Ops Center"), "agent-ops-center");
        assert_eq!(title_slug("Login / Auth"), "login-/-auth");
    }

    #[test]
    fn content_fits_inside_frame() {
        for profile in DeviceProfile::ALL {
            let frame = profile.node_size();
            let area = content_area(profile, frame);
            assert!(area.x + area.size.width <= frame.width);
            assert!(area.y + area.size.height <= frame.height);
            assert!(area.size.width > 0.0 && area.size.height > 0.0);
        }
    }
}
