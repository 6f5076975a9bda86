//! HTML rendition of the dashboard view

use std::fmt::Write;

use super::{DashboardView, PredictionView};
use crate::models::NoticeVariant;

/// Escape text for HTML element and attribute content
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:monospace;background:#0b1120;color:#e2e8f0;margin:0;padding:1.5rem}\
section{border:1px solid #1e293b;border-radius:6px;padding:1rem;margin-bottom:1rem}\
.success{color:#22c55e}.primary{color:#06b6d4}.warning{color:#f59e0b}.destructive{color:#ef4444}.muted{color:#64748b}\
.bar{background:#1e293b;height:6px}.bar>div{background:#06b6d4;height:6px}\
.high-risk{background:rgba(239,68,68,.1)}table{width:100%;border-collapse:collapse}";

pub fn render(view: &DashboardView) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title><style>{STYLE}</style></head><body>\
         <header><h1>{title}</h1><p>Advanced Risk Assessment &amp; Simulation Engine</p></header>",
        title = escape(view.title),
    );

    if let Some(notice) = &view.notice {
        let class = match notice.variant {
            NoticeVariant::Success => "success",
            NoticeVariant::Destructive => "destructive",
        };
        let _ = write!(
            html,
            "<section class=\"notice {class}\"><strong>{}</strong><p>{}</p></section>",
            escape(&notice.title),
            escape(&notice.description),
        );
    }

    let status_class = match view.status {
        super::PlantStatus::IncidentDetected => "destructive",
        super::PlantStatus::Nominal => "success",
        _ => "muted",
    };
    let _ = write!(
        html,
        "<section id=\"plant\"><h2>Reactor Core Visualization</h2><p class=\"status {status_class}\">{}</p>",
        escape(view.status_label),
    );

    match &view.prediction {
        Some(prediction) => render_plant(&mut html, prediction),
        None if view.busy => html.push_str("<p>Running simulation...</p>"),
        None => html.push_str(
            "<p>Awaiting Simulation Input</p>\
             <p class=\"muted\">Configure parameters and run simulation to visualize plant status</p>",
        ),
    }
    html.push_str("</section>");

    match &view.prediction {
        Some(prediction) => render_prediction(&mut html, prediction),
        None => html.push_str(
            "<section id=\"prediction\"><p>No prediction data available</p>\
             <p class=\"muted\">Run a simulation to see results</p></section>",
        ),
    }

    html.push_str("</body></html>");
    html
}

fn render_plant(html: &mut String, prediction: &PredictionView) {
    if let Some(incident) = &prediction.incident {
        let mut effects = Vec::new();
        if incident.radiation {
            effects.push("radiation");
        }
        if incident.overheat {
            effects.push("overheat");
        }
        let _ = write!(
            html,
            "<p class=\"incident destructive\" data-effects=\"{}\">{}</p>",
            effects.join(" "),
            escape(&incident.label),
        );
    }

    for readout in &prediction.readouts {
        let _ = write!(
            html,
            "<div>{}: <span class=\"{}\">{}</span></div>",
            readout.label,
            readout.color,
            escape(&readout.text),
        );
    }

    let _ = write!(
        html,
        "<div class=\"{}\">Risk Level: {}</div>",
        prediction.risk.color, prediction.risk.level,
    );

    for stat in [&prediction.shutdown, &prediction.evacuation] {
        let _ = write!(
            html,
            "<div class=\"{}\">{}: <strong>{}</strong></div>",
            stat.highlight.unwrap_or(""),
            stat.label,
            stat.text,
        );
    }
}

fn render_prediction(html: &mut String, prediction: &PredictionView) {
    let _ = write!(
        html,
        "<section id=\"prediction\"><h3>Prediction Summary</h3>\
         <p>Risk Level <span class=\"badge {color}\">{label}</span></p>\
         <div class=\"bar\"><div style=\"width:{progress}%\"></div></div>",
        color = prediction.risk.color,
        label = prediction.risk.label,
        progress = prediction.risk.progress,
    );
    if prediction.human_override {
        html.push_str("<p class=\"warning\">Human Override Detected</p>");
    }
    let _ = write!(html, "<p class=\"muted\">{}</p></section>", escape(&prediction.provenance));

    html.push_str("<section id=\"contributors\"><h3>Top Risk Contributors</h3>");
    for c in &prediction.contributors {
        let _ = write!(
            html,
            "<div><span>{}</span> <strong>{}</strong>\
             <div class=\"bar\"><div style=\"width:{:.0}%\"></div></div>\
             <small>Value: {}</small></div>",
            escape(&c.feature),
            escape(&c.percent),
            c.bar,
            escape(&c.value),
        );
    }
    html.push_str("</section>");

    html.push_str("<section id=\"readings\"><h3>Parameter Readings</h3><table>");
    for r in &prediction.readings {
        let class = if r.high_risk { " class=\"high-risk destructive\"" } else { "" };
        let _ = write!(
            html,
            "<tr{class}><td>{}</td><td>{}</td></tr>",
            escape(&r.name),
            escape(&r.value),
        );
    }
    html.push_str("</table></section>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScenarioInput;
    use crate::session::SessionSnapshot;
    use crate::view::{dashboard, tests::assessment};

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_render_empty_session() {
        let html = render(&dashboard(&SessionSnapshot::default()));
        assert!(html.contains("Awaiting Simulation Input"));
        assert!(html.contains("No prediction data available"));
    }

    #[test]
    fn test_render_incident() {
        let mut scenario = ScenarioInput::default();
        scenario.country = "<script>".to_string();
        let snapshot = SessionSnapshot {
            assessment: Some(assessment(3, true)),
            scenario: Some(scenario),
            ..Default::default()
        };

        let html = render(&dashboard(&snapshot));

        assert!(html.contains("INCIDENT DETECTED"));
        assert!(html.contains("CRITICAL"));
        assert!(html.contains("Core Overheat"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
