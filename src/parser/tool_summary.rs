//! Parser for a single tool summary file.

use crate::error::FormatError;
use crate::models::{HtmlTemplateMode, Metadata, ParsedToolSummary};
use tracing::debug;

/// Line that separates sections of a summary file.
const SECTION_DELIMITER: &str = "---";

/// UTF-8 byte order mark some editors put at the start of a file.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Metadata key selecting where the HTML fragment comes from.
pub const HTML_TEMPLATE_KEY: &str = "html-template";

/// Parse the raw text of one tool summary.
///
/// `reference_html` is the content of the tool's separate HTML template
/// file and is only consulted when the summary declares
/// `html-template: reference`.
pub fn parse_tool_summary(
    tool: &str,
    file_path: &str,
    content: &str,
    reference_html: Option<&str>,
) -> Result<ParsedToolSummary, FormatError> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let sections = split_sections(content);

    if sections.len() < 2 {
        return Err(FormatError::MissingMetadata {
            tool: tool.to_string(),
            file_path: file_path.to_string(),
        });
    }

    let metadata = parse_metadata(&sections[0], file_path)?;

    let template_value = match metadata.get(HTML_TEMPLATE_KEY) {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(FormatError::MissingHtmlTemplateKey {
                file_path: file_path.to_string(),
            })
        }
    };

    let mode = HtmlTemplateMode::from_metadata(template_value).ok_or_else(|| {
        FormatError::InvalidHtmlTemplate {
            value: template_value.to_string(),
            file_path: file_path.to_string(),
        }
    })?;

    debug!(
        "Metadata for {} ({} mode): {}",
        tool,
        mode,
        metadata
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let (html_template_content, markdown_content) = match mode {
        HtmlTemplateMode::Inline => {
            let html = sections
                .get(1)
                .ok_or_else(|| FormatError::MissingInlineHtml {
                    tool: tool.to_string(),
                    file_path: file_path.to_string(),
                })?;
            let markdown = sections
                .get(2)
                .ok_or_else(|| missing_markdown(tool, file_path))?;

            (html.clone(), markdown.clone())
        }
        HtmlTemplateMode::Reference => {
            let markdown = sections
                .get(1)
                .ok_or_else(|| missing_markdown(tool, file_path))?;

            let html = reference_html
                .filter(|html| !html.is_empty())
                .ok_or_else(|| FormatError::MissingReferenceHtml {
                    tool: tool.to_string(),
                })?;

            (html.to_string(), markdown.clone())
        }
    };

    Ok(ParsedToolSummary {
        tool: tool.to_string(),
        metadata,
        html_template_mode: mode,
        html_template_content,
        markdown_content,
    })
}

fn missing_markdown(tool: &str, file_path: &str) -> FormatError {
    FormatError::MissingMarkdown {
        tool: tool.to_string(),
        file_path: file_path.to_string(),
    }
}

/// Split content into trimmed, non-empty sections.
///
/// Text before the first delimiter is ignored. The last section does not
/// need a closing delimiter.
fn split_sections(content: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut started = false;

    for line in content.lines() {
        if line.trim() == SECTION_DELIMITER {
            if started {
                sections.push(current.join("\n").trim().to_string());
                current.clear();
            } else {
                started = true;
            }
            continue;
        }

        if started {
            current.push(line);
        }
    }

    if started && !current.is_empty() {
        sections.push(current.join("\n").trim().to_string());
    }

    sections.retain(|section| !section.is_empty());
    sections
}

/// Parse `key: value` lines. Blank lines are skipped.
fn parse_metadata(raw: &str, file_path: &str) -> Result<Metadata, FormatError> {
    let mut metadata = Metadata::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let separator = match line.find(':') {
            Some(index) if index > 0 => index,
            _ => {
                return Err(FormatError::InvalidMetadataLine {
                    line: line.to_string(),
                    file_path: file_path.to_string(),
                })
            }
        };

        metadata.insert(line[..separator].trim(), line[separator + 1..].trim());
    }

    Ok(metadata)
}
