//! Cross-tool overview.

use crate::models::{ParsedToolSummary, SummaryOverview};

/// Build the overview from parsed summaries, keeping their order.
pub fn build_overview(parsed_tools: &[ParsedToolSummary]) -> SummaryOverview {
    SummaryOverview {
        tool_names: parsed_tools.iter().map(|t| t.tool.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HtmlTemplateMode, Metadata};

    fn summary(tool: &str) -> ParsedToolSummary {
        ParsedToolSummary {
            tool: tool.to_string(),
            metadata: Metadata::new(),
            html_template_mode: HtmlTemplateMode::Inline,
            html_template_content: "<div></div>".to_string(),
            markdown_content: "text".to_string(),
        }
    }

    #[test]
    fn test_build_overview_preserves_order() {
        let tools = vec![summary("lizard"), summary("insider"), summary("dude")];

        let overview = build_overview(&tools);

        assert_eq!(overview.tool_names, vec!["lizard", "insider", "dude"]);
    }

    #[test]
    fn test_build_overview_keeps_duplicates() {
        let tools = vec![summary("jafax"), summary("jafax")];

        let overview = build_overview(&tools);

        assert_eq!(overview.tool_names.len(), tools.len());
        assert_eq!(overview.tool_names, vec!["jafax", "jafax"]);
    }

    #[test]
    fn test_build_overview_empty() {
        assert!(build_overview(&[]).tool_names.is_empty());
    }
}
