//! Markdown report rendering.

use super::REPORT_TITLE;
use crate::models::{ParsedToolSummary, SummaryOverview};

/// Render the consolidated Markdown report.
pub fn render_markdown_summary(
    overview: &SummaryOverview,
    parsed_tools: &[ParsedToolSummary],
) -> String {
    let mut lines: Vec<String> = vec![
        format!("# {}", REPORT_TITLE),
        String::new(),
        "## Overview".to_string(),
    ];

    for tool_name in &overview.tool_names {
        lines.push(format!("- {}", tool_name));
    }

    if !parsed_tools.is_empty() {
        lines.push(String::new());
    }

    for tool in parsed_tools {
        lines.push(format!("## {}", tool.tool));
        lines.push(tool.markdown_content.clone());
        lines.push(String::new());
    }

    lines.join("\n").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HtmlTemplateMode, Metadata};

    fn summary(tool: &str, markdown: &str) -> ParsedToolSummary {
        ParsedToolSummary {
            tool: tool.to_string(),
            metadata: Metadata::new(),
            html_template_mode: HtmlTemplateMode::Inline,
            html_template_content: "<div></div>".to_string(),
            markdown_content: markdown.to_string(),
        }
    }

    fn overview(names: &[&str]) -> SummaryOverview {
        SummaryOverview {
            tool_names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_full_document() {
        let tools = vec![
            summary("insider", "Insider findings"),
            summary("lizard", "### Complexity\nAll good"),
        ];

        let markdown = render_markdown_summary(&overview(&["insider", "lizard"]), &tools);

        assert_eq!(
            markdown,
            "# Voyager Summary\n\n## Overview\n- insider\n- lizard\n\n\
             ## insider\nInsider findings\n\n\
             ## lizard\n### Complexity\nAll good"
        );
    }

    #[test]
    fn test_render_without_tools() {
        let markdown = render_markdown_summary(&overview(&["a", "b"]), &[]);

        assert_eq!(markdown, "# Voyager Summary\n\n## Overview\n- a\n- b");
        assert!(markdown.contains("## Overview"));
        assert!(!markdown.contains("## a\n"));
    }

    #[test]
    fn test_render_empty_overview() {
        let markdown = render_markdown_summary(&SummaryOverview::default(), &[]);

        assert_eq!(markdown, "# Voyager Summary\n\n## Overview");
    }

    #[test]
    fn test_sections_follow_record_order_not_overview() {
        let tools = vec![summary("lizard", "L"), summary("dude", "D")];

        let markdown = render_markdown_summary(&overview(&["dude", "lizard"]), &tools);

        let lizard = markdown.find("## lizard").unwrap();
        let dude = markdown.find("## dude").unwrap();
        assert!(lizard < dude);
    }
}
