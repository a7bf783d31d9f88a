use std::fmt::Write;

use blueprint_model::Size;
use blueprint_svg_render::{ScreenContent, escape_xml};

const FONT: &str = "Inter, Helvetica, Arial, sans-serif";
const INK: &str = "#18181b";
const MUTED: &str = "#71717a";
const BORDER: &str = "#e4e4e7";

/// Static mock screens for the support-desk flow. All copy is display data.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockScreens;

impl ScreenContent for MockScreens {
    fn render(&self, screen: &str, size: Size) -> Option<String> {
        let mut out = String::new();
        let _ = write!(
            out,
            "<rect width=\"{}\" height=\"{}\" fill=\"#fafafa\"/>",
            size.width, size.height
        );
        match screen {
            "login" => login(&mut out, size),
            "dashboard" => dashboard(&mut out, size),
            "chat" => chat(&mut out, size),
            "agent" => agent(&mut out, size),
            "kb" => knowledge_base(&mut out, size),
            _ => return None,
        }
        Some(out)
    }
}

fn text(out: &mut String, x: f32, y: f32, size: f32, color: &str, weight: &str, value: &str) {
    let _ = write!(
        out,
        "<text x=\"{x}\" y=\"{y}\" font-family=\"{FONT}\" font-size=\"{size}\" font-weight=\"{weight}\" fill=\"{color}\">{}</text>",
        escape_xml(value)
    );
}

fn card(out: &mut String, x: f32, y: f32, w: f32, h: f32, fill: &str) {
    let _ = write!(
        out,
        "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" rx=\"12\" fill=\"{fill}\" stroke=\"{BORDER}\"/>"
    );
}

fn login(out: &mut String, size: Size) {
    let pad = 24.0;
    let w = size.width - pad * 2.0;
    text(out, pad, 96.0, 24.0, INK, "bold", "Welcome Back");
    text(out, pad, 120.0, 13.0, MUTED, "normal", "Sign in to Zeal AI Dashboard");
    card(out, pad, 150.0, w, 44.0, "#ffffff");
    text(out, pad + 14.0, 177.0, 13.0, MUTED, "normal", "Email address");
    card(out, pad, 206.0, w, 44.0, "#ffffff");
    text(out, pad + 14.0, 233.0, 13.0, MUTED, "normal", "Password");
    card(out, pad, 270.0, w, 44.0, INK);
    text(out, pad + w / 2.0 - 24.0, 297.0, 14.0, "#ffffff", "bold", "Sign In");
    text(out, pad, 346.0, 12.0, MUTED, "normal", "Forgot password?");
    text(out, pad + w - 96.0, 346.0, 12.0, INK, "bold", "Create account");
}

fn dashboard(out: &mut String, size: Size) {
    let pad = 20.0;
    let w = size.width - pad * 2.0;
    text(out, pad, 40.0, 20.0, INK, "bold", "Hello, Ankur");
    text(out, pad, 60.0, 12.0, MUTED, "normal", "Premium Plan Member");
    text(out, pad, 100.0, 12.0, MUTED, "bold", "Quick Actions");
    let modules = ["Tickets", "Actions", "History", "Settings"];
    let tile = (w - 3.0 * 8.0) / 4.0;
    for (idx, label) in modules.iter().enumerate() {
        let x = pad + idx as f32 * (tile + 8.0);
        card(out, x, 112.0, tile, 56.0, "#ffffff");
        text(out, x + 8.0, 146.0, 10.0, INK, "500", label);
    }
    card(out, pad, 188.0, w, 120.0, INK);
    text(out, pad + 16.0, 220.0, 16.0, "#ffffff", "bold", "AI Concierge");
    text(
        out,
        pad + 16.0,
        244.0,
        11.0,
        "#d4d4d8",
        "normal",
        "Ready to help you with your recent order #8921.",
    );
    text(out, pad + 16.0, 286.0, 12.0, "#ffffff", "bold", "Start Chat");
    text(out, pad, 340.0, 12.0, MUTED, "bold", "Recent Tickets");
    let tickets = [
        ("TIC-102", "Payment Integration Failure", "Open"),
        ("TIC-098", "Account Access Issue", "Closed"),
    ];
    for (idx, (id, title, status)) in tickets.iter().enumerate() {
        let y = 352.0 + idx as f32 * 64.0;
        card(out, pad, y, w, 56.0, "#ffffff");
        text(out, pad + 12.0, y + 22.0, 10.0, MUTED, "normal", id);
        text(out, pad + 12.0, y + 40.0, 12.0, INK, "500", title);
        text(out, pad + w - 56.0, y + 22.0, 10.0, MUTED, "bold", status);
    }
}

fn chat(out: &mut String, size: Size) {
    let pad = 16.0;
    let w = size.width - pad * 2.0;
    text(out, pad, 28.0, 14.0, INK, "bold", "Zeal Agent");
    text(out, pad, 44.0, 10.0, MUTED, "normal", "Powered by Gemini");
    let bubbles = [
        (false, "I've analyzed your logs from the last hour."),
        (true, "Yes, please show me the anomalies."),
        (false, "Here is the latency spike detected at 10:42 AM."),
    ];
    for (idx, (from_user, message)) in bubbles.iter().enumerate() {
        let y = 72.0 + idx as f32 * 72.0;
        let bubble_w = w * 0.8;
        let x = if *from_user { pad + w - bubble_w } else { pad };
        card(out, x, y, bubble_w, 52.0, if *from_user { INK } else { "#ffffff" });
        let color = if *from_user { "#ffffff" } else { INK };
        text(out, x + 12.0, y + 30.0, 11.0, color, "normal", message);
    }
    let bars: [f32; 10] = [40.0, 35.0, 60.0, 45.0, 90.0, 100.0, 80.0, 50.0, 40.0, 30.0];
    let chart_y = 300.0;
    for (idx, pct) in bars.iter().enumerate() {
        let h = 60.0 * pct / 100.0;
        let fill = if *pct > 80.0 { "#ef4444" } else { "#d4d4d8" };
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"6\" height=\"{h}\" rx=\"2\" fill=\"{fill}\"/>",
            pad + 12.0 + idx as f32 * 10.0,
            chart_y + 60.0 - h
        );
    }
    text(out, pad, 392.0, 11.0, INK, "bold", "Generate Report");
    text(out, pad + 120.0, 392.0, 11.0, INK, "bold", "Escalate to Engineer");
    card(out, pad, size.height - 56.0, w, 40.0, "#ffffff");
    text(out, pad + 14.0, size.height - 31.0, 12.0, MUTED, "normal", "Type your message...");
}

fn agent(out: &mut String, size: Size) {
    let pad = 16.0;
    let w = size.width - pad * 2.0;
    text(out, pad, 32.0, 16.0, INK, "bold", "Support Operations");
    let stats = [("Queue Depth", "-12% vs last hour"), ("Avg Resolution", "4m 12s")];
    let stat_w = (w - 8.0) / 2.0;
    for (idx, (title, value)) in stats.iter().enumerate() {
        let x = pad + idx as f32 * (stat_w + 8.0);
        card(out, x, 48.0, stat_w, 64.0, "#ffffff");
        text(out, x + 12.0, 72.0, 10.0, MUTED, "normal", title);
        text(out, x + 12.0, 96.0, 14.0, INK, "bold", value);
    }
    text(out, pad, 140.0, 11.0, MUTED, "bold", "Ticket Volume (AI Handled)");
    let volume: [f32; 7] = [40.0, 30.0, 20.0, 27.0, 18.0, 23.0, 34.0];
    let days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let slot = w / volume.len() as f32;
    for (idx, tickets) in volume.iter().enumerate() {
        let h = tickets * 2.0;
        let x = pad + idx as f32 * slot;
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{h}\" rx=\"2\" fill=\"#a1a1aa\"/>",
            x + slot * 0.2,
            240.0 - h,
            slot * 0.6
        );
        text(out, x + slot * 0.2, 256.0, 9.0, MUTED, "normal", days[idx]);
    }
    text(out, pad, 292.0, 11.0, MUTED, "bold", "Live Feed");
    let feed = [
        ("System updated KB article", "2 minutes ago"),
        ("Escalation: User #9921", "5 minutes ago • Pending"),
    ];
    for (idx, (event, when)) in feed.iter().enumerate() {
        let y = 304.0 + idx as f32 * 52.0;
        card(out, pad, y, w, 44.0, "#ffffff");
        text(out, pad + 12.0, y + 19.0, 11.0, INK, "500", event);
        text(out, pad + 12.0, y + 34.0, 9.0, MUTED, "normal", when);
    }
}

fn knowledge_base(out: &mut String, size: Size) {
    let pad = 20.0;
    let w = size.width - pad * 2.0;
    text(out, pad, 40.0, 20.0, INK, "bold", "Help Center");
    card(out, pad, 56.0, w, 40.0, "#ffffff");
    text(out, pad + 14.0, 81.0, 12.0, MUTED, "normal", "How can we help?");
    let half = (w - 12.0) / 2.0;
    for (idx, topic) in ["Billing", "API"].iter().enumerate() {
        let x = pad + idx as f32 * (half + 12.0);
        card(out, x, 112.0, half, 72.0, "#ffffff");
        text(out, x + 14.0, 156.0, 13.0, INK, "bold", topic);
    }
    text(out, pad, 216.0, 11.0, MUTED, "bold", "Suggested by AI");
    let articles = [
        "Troubleshooting Webhook Latency",
        "Understanding Rate Limits",
        "How to reset API Keys",
    ];
    for (idx, article) in articles.iter().enumerate() {
        let y = 228.0 + idx as f32 * 52.0;
        card(out, pad, y, w, 44.0, "#ffffff");
        text(out, pad + 14.0, y + 27.0, 12.0, INK, "500", article);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_model::{DeviceProfile, support_blueprint};

    #[test]
    fn every_catalog_screen_has_content() {
        let size = DeviceProfile::Mobile.node_size();
        for node in support_blueprint().nodes() {
            let body = MockScreens.render(&node.screen, size);
            assert!(body.is_some(), "no mock for {}", node.screen);
        }
    }

    #[test]
    fn unknown_screens_fall_back() {
        assert!(MockScreens.render("settings", DeviceProfile::Desktop.node_size()).is_none());
    }

    #[test]
    fn escapes_display_copy() {
        let body = MockScreens.render("dashboard", DeviceProfile::Mobile.node_size()).unwrap();
        assert!(body.contains("order #8921."));
        let agent = MockScreens.render("agent", DeviceProfile::Mobile.node_size()).unwrap();
        assert!(agent.contains("User #9921"));
    }
}
