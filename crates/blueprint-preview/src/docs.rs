use std::fmt::Write;

use crate::page::escape_html;

struct Metric {
    name: &'static str,
    baseline: &'static str,
    target: &'static str,
    status: &'static str,
}

const METRICS: &[Metric] = &[
    Metric {
        name: "Deflection Rate",
        baseline: "0%",
        target: "60%",
        status: "On Track",
    },
    Metric {
        name: "AI Latency",
        baseline: "N/A",
        target: "< 200ms",
        status: "Achieved",
    },
];

const TEAM: &[(&str, &str)] = &[
    ("Product Management", "Ankur Madan"),
    ("Product Design", "Ankur Madan"),
    ("Engineering Lead", "TBD"),
    ("User Research", "TBD"),
];

const CONSTRAINTS: &[&str] = &[
    "Must use existing PostgreSQL schema.",
    "No PII can be stored in the vector database.",
    "Latency must remain under 200ms per token generation.",
];

const NON_GOALS: &[&str] = &[
    "Voice support (planned for V2).",
    "Multi-lingual support (English only for V1).",
];

const IDEAS: &[(&str, &str)] = &[
    (
        "Standard Chatbot",
        "Simple decision tree bot. Rejected due to poor user experience.",
    ),
    (
        "Generative AI Agent",
        "Context-aware agent using RAG. Preferred direction.",
    ),
];

struct Story {
    role: &'static str,
    want: &'static str,
    reason: &'static str,
    priority: &'static str,
}

const STORIES: &[Story] = &[
    Story {
        role: "customer",
        want: "reset my password via chat",
        reason: "I don't have to wait for an email",
        priority: "Must Have",
    },
    Story {
        role: "agent",
        want: "summaries of AI chats",
        reason: "I can ramp up quickly on escalations",
        priority: "Must Have",
    },
    Story {
        role: "manager",
        want: "sentiment analysis dashboards",
        reason: "I can track CSAT trends",
        priority: "Nice to Have",
    },
];

/// Static product document. `open_design_tool` is the link target for the
/// "open the design board" call to action.
pub fn render_documentation(open_design_tool: &str) -> String {
    let mut out = String::new();
    out.push_str("<article class=\"doc\">");
    out.push_str(
        "<header><span class=\"pill\">PRD Template</span><h1>Zeal AI Blueprint</h1>\
         <p class=\"meta\">Direct questions to: <strong>Product Team</strong> · Last updated: <strong>Feb 02, 2026</strong></p></header>",
    );

    section(
        &mut out,
        "What",
        "<p>Zeal AI is a hybrid customer support platform designed to reduce human agent load by \
         intelligent triage and automated resolution. Complex queries are escalated to human agents; \
         routine ones are answered directly. This initiative focuses on the <strong>Interactive Service \
         Blueprint</strong> to visualize these flows.</p>",
    );

    section(
        &mut out,
        "Why",
        "<p>Current support costs are scaling linearly with user growth. We need to decouple support \
         volume from headcount.</p><ul class=\"goals\">\
         <li><strong>Business Goal:</strong> Reduce average cost per ticket by 60% while maintaining high CSAT.</li>\
         <li><strong>User Goal:</strong> Reduce first response time from 4 hours to &lt; 200ms for routine inquiries.</li></ul>",
    );

    let mut metrics = String::from(
        "<table><thead><tr><th>Metric</th><th>Baseline</th><th>Target</th><th>Status</th></tr></thead><tbody>",
    );
    for metric in METRICS {
        let _ = write!(
            metrics,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"ok\">{}</td></tr>",
            escape_html(metric.name),
            escape_html(metric.baseline),
            escape_html(metric.target),
            escape_html(metric.status)
        );
    }
    metrics.push_str("</tbody></table>");
    section(&mut out, "Success Criteria", &metrics);

    let mut team = String::from("<dl class=\"team\">");
    for (role, person) in TEAM {
        let _ = write!(team, "<dt>{}</dt><dd>{}</dd>", escape_html(role), escape_html(person));
    }
    team.push_str("</dl>");
    section(&mut out, "Team", &team);

    let mut product = String::new();
    product.push_str(
        "<h3>Problem Statement</h3><p>40% of tickets are \"Level 1\" repetitive queries, with \
         \"Status Check\" and \"Password Reset\" as top categories. This results in agent burnout \
         and slow response times.</p>",
    );
    product.push_str(
        "<h3>Hypothesis &amp; Impact</h3><p>We believe <strong>integrating a retrieval-backed support \
         agent</strong> will lead to <strong>automated resolution of Level 1 tickets</strong>, which \
         will result in a <strong>60% deflection rate</strong>.</p>",
    );
    list(&mut product, "Constraints", CONSTRAINTS);
    list(&mut product, "Non-Goals", NON_GOALS);
    section(&mut out, "Product Spec", &product);

    let mut design = String::new();
    let _ = write!(
        design,
        "<p><a class=\"cta\" href=\"{}\">Open the design board</a></p>",
        escape_html(open_design_tool)
    );
    design.push_str("<h3>Initial Ideas</h3><table><thead><tr><th>Idea</th><th>Description</th></tr></thead><tbody>");
    for (idea, description) in IDEAS {
        let _ = write!(
            design,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(idea),
            escape_html(description)
        );
    }
    design.push_str("</tbody></table><h3>User Stories</h3><ul>");
    for story in STORIES {
        let article = if story.role.starts_with(['a', 'e', 'i', 'o', 'u']) {
            "an"
        } else {
            "a"
        };
        let _ = write!(
            design,
            "<li>As {article} <strong>{}</strong>, I want <strong>{}</strong>, so that {}. <em>{}</em></li>",
            escape_html(story.role),
            escape_html(story.want),
            escape_html(story.reason),
            escape_html(story.priority)
        );
    }
    design.push_str(
        "</ul><h3>Decided Direction</h3><p>\"Transparent Handoff\": the agent console always shows \
         the AI transcript that led to an escalation.</p>",
    );
    section(&mut out, "Design Exploration", &design);

    out.push_str("</article>");
    out
}

fn section(out: &mut String, heading: &str, body: &str) {
    let _ = write!(out, "<section><h2>{}</h2>{body}</section>", escape_html(heading));
}

fn list(out: &mut String, heading: &str, items: &[&str]) {
    let _ = write!(out, "<h3>{}</h3><ul>", escape_html(heading));
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>");
}
