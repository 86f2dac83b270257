//! HTML report rendering.

use super::REPORT_TITLE;
use crate::models::{ParsedToolSummary, SummaryOverview};

/// Render the consolidated HTML report.
///
/// Tool names and fragments are inserted as-is.
pub fn render_html_summary(overview: &SummaryOverview, parsed_tools: &[ParsedToolSummary]) -> String {
    let overview_items: String = overview
        .tool_names
        .iter()
        .map(|tool_name| format!("<li>{}</li>", tool_name))
        .collect();

    let tool_sections: String = parsed_tools
        .iter()
        .map(|tool| {
            format!(
                "<section><h2>{}</h2>{}</section>",
                tool.tool, tool.html_template_content
            )
        })
        .collect();

    [
        "<!doctype html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head>".to_string(),
        "  <meta charset=\"utf-8\">".to_string(),
        format!("  <title>{}</title>", REPORT_TITLE),
        "</head>".to_string(),
        "<body>".to_string(),
        format!("  <h1>{}</h1>", REPORT_TITLE),
        "  <section>".to_string(),
        "    <h2>Overview</h2>".to_string(),
        format!("    <ul>{}</ul>", overview_items),
        "  </section>".to_string(),
        format!("  {}", tool_sections),
        "</body>".to_string(),
        "</html>".to_string(),
    ]
    .join("\n")
}
