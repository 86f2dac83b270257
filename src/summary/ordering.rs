//! Fixed tool ordering for the consolidated reports.

use crate::models::ParsedToolSummary;
use tracing::warn;

/// Known tools, in the order their sections appear in the reports.
pub const TOOL_PRIORITY: &[&str] = &[
    "depminer",
    "dude",
    "honeydew",
    "insider",
    "inspector-git",
    "jafax",
    "lizard",
];

/// Position of a tool in [`TOOL_PRIORITY`], if it is a known tool.
pub fn tool_priority(tool: &str) -> Option<usize> {
    TOOL_PRIORITY.iter().position(|known| *known == tool)
}

/// Reorder parsed summaries by [`TOOL_PRIORITY`].
///
/// Summaries for the same tool keep their relative input order. Summaries
/// for tools missing from the list are dropped from the reports even though
/// they parsed successfully; a warning is logged for each.
pub fn order_by_priority(parsed_tools: Vec<ParsedToolSummary>) -> Vec<ParsedToolSummary> {
    let mut ranked: Vec<(usize, ParsedToolSummary)> = parsed_tools
        .into_iter()
        .filter_map(|summary| match tool_priority(&summary.tool) {
            Some(rank) => Some((rank, summary)),
            None => {
                warn!(
                    "Tool '{}' is not in the known tool list; its summary is left out of the report",
                    summary.tool
                );
                None
            }
        })
        .collect();

    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, summary)| summary).collect()
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
            html_template_content: format!("<div>{}</div>", tool),
            markdown_content: markdown.to_string(),
        }
    }

    fn tools(summaries: &[ParsedToolSummary]) -> Vec<&str> {
        summaries.iter().map(|s| s.tool.as_str()).collect()
    }

    #[test]
    fn test_tool_priority() {
        assert_eq!(tool_priority("depminer"), Some(0));
        assert_eq!(tool_priority("lizard"), Some(6));
        assert_eq!(tool_priority("unknown"), None);
        assert_eq!(tool_priority("Lizard"), None);
    }

    #[test]
    fn test_order_by_priority() {
        let ordered = order_by_priority(vec![
            summary("lizard", "l"),
            summary("depminer", "d"),
            summary("insider", "i"),
        ]);

        assert_eq!(tools(&ordered), vec!["depminer", "insider", "lizard"]);
    }

    #[test]
    fn test_order_by_priority_drops_unknown_tools() {
        let ordered = order_by_priority(vec![summary("newtool", "n"), summary("jafax", "j")]);

        assert_eq!(tools(&ordered), vec!["jafax"]);
    }

    #[test]
    fn test_order_by_priority_is_stable_for_duplicates() {
        let ordered = order_by_priority(vec![
            summary("jafax", "first"),
            summary("dude", "d"),
            summary("jafax", "second"),
        ]);

        let markdown: Vec<_> = ordered.iter().map(|s| s.markdown_content.as_str()).collect();
        assert_eq!(markdown, vec!["d", "first", "second"]);
    }
}
