//! End-to-end aggregation run.
//!
//! Reads every tool summary, parses it, orders the results and writes the
//! HTML and Markdown reports. Any read or parse failure aborts the run
//! before a report is written.

use super::{build_overview, order_by_priority};
use crate::error::SummaryError;
use crate::io::FileAccess;
use crate::models::ParsedToolSummary;
use crate::parser::parse_tool_summary;
use crate::report::{render_html_summary, render_markdown_summary};
use serde::Serialize;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_OUT_HTML: &str = "summary.html";
pub const DEFAULT_OUT_MD: &str = "summary.md";

/// Inputs for one aggregation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateSummaryInput {
    /// `(tool, summary file)` pairs, processed in order.
    pub tool_md: Vec<(String, PathBuf)>,
    /// `(tool, HTML template file)` pairs for reference-mode summaries.
    pub tool_html: Vec<(String, PathBuf)>,
    /// Conditions file; must exist when given but is not interpreted.
    pub conditions_file: Option<PathBuf>,
    /// `(key, value)` conditions; carried through but not interpreted.
    pub conditions: Vec<(String, String)>,
    /// HTML output path, [`DEFAULT_OUT_HTML`] when unset.
    pub out_html: Option<PathBuf>,
    /// Markdown output path, [`DEFAULT_OUT_MD`] when unset.
    pub out_md: Option<PathBuf>,
}

/// Outcome of a successful aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateSummaryResult {
    /// Summaries parsed, including ones later left out by tool ordering.
    pub parsed_tools_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_html_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_md_path: Option<PathBuf>,
}

/// Rendered report documents.
struct ReportContent {
    html: String,
    markdown: String,
}

/// Run a complete aggregation.
pub async fn generate_summary<F: FileAccess>(
    files: &F,
    input: &GenerateSummaryInput,
) -> Result<GenerateSummaryResult, SummaryError> {
    check_conditions(files, input).await?;

    let parsed_tools = parse_tool_summaries(files, &input.tool_md, &input.tool_html).await?;
    let parsed_tools_count = parsed_tools.len();
    info!("Parsed {} tool summaries", parsed_tools_count);

    let ordered_tools = order_by_priority(parsed_tools);
    let content = build_report_content(&ordered_tools);

    let out_html = input
        .out_html
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_HTML));
    let out_md = input
        .out_md
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_MD));

    let written_html_path = persist(files, &content.html, out_html).await?;
    let written_md_path = persist(files, &content.markdown, out_md).await?;

    Ok(GenerateSummaryResult {
        parsed_tools_count,
        written_html_path,
        written_md_path,
    })
}

async fn check_conditions<F: FileAccess>(
    files: &F,
    input: &GenerateSummaryInput,
) -> Result<(), SummaryError> {
    if let Some(ref conditions_file) = input.conditions_file {
        if !files.exists(conditions_file).await {
            return Err(SummaryError::Read {
                path: conditions_file.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "conditions file not found"),
            });
        }
        debug!("Conditions file: {}", conditions_file.display());
    }

    for (key, value) in &input.conditions {
        debug!("Condition {}={} (not applied to the reports)", key, value);
    }

    Ok(())
}

/// Read and parse every summary, one file at a time, in input order.
async fn parse_tool_summaries<F: FileAccess>(
    files: &F,
    tool_md: &[(String, PathBuf)],
    tool_html: &[(String, PathBuf)],
) -> Result<Vec<ParsedToolSummary>, SummaryError> {
    // Later pairs for the same tool win.
    let html_by_tool: HashMap<&str, &Path> = tool_html
        .iter()
        .map(|(tool, path)| (tool.as_str(), path.as_path()))
        .collect();

    let mut parsed_tools = Vec::with_capacity(tool_md.len());

    for (tool, md_path) in tool_md {
        let markdown_raw = read(files, md_path).await?;

        let reference_html = match html_by_tool.get(tool.as_str()) {
            Some(html_path) => Some(read(files, html_path).await?),
            None => None,
        };

        let parsed = parse_tool_summary(
            tool,
            &md_path.display().to_string(),
            &markdown_raw,
            reference_html.as_deref(),
        )?;

        debug!(
            "Parsed {} summary from {} ({} mode)",
            tool,
            md_path.display(),
            parsed.html_template_mode
        );
        parsed_tools.push(parsed);
    }

    Ok(parsed_tools)
}

fn build_report_content(ordered_tools: &[ParsedToolSummary]) -> ReportContent {
    let overview = build_overview(ordered_tools);

    ReportContent {
        html: render_html_summary(&overview, ordered_tools),
        markdown: render_markdown_summary(&overview, ordered_tools),
    }
}

async fn read<F: FileAccess>(files: &F, path: &Path) -> Result<String, SummaryError> {
    files.read_text(path).await.map_err(|source| SummaryError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a non-empty document and return where it went.
async fn persist<F: FileAccess>(
    files: &F,
    content: &str,
    path: PathBuf,
) -> Result<Option<PathBuf>, SummaryError> {
    if content.is_empty() {
        debug!("Skipping empty document for {}", path.display());
        return Ok(None);
    }

    files
        .write_text(&path, content)
        .await
        .map_err(|source| SummaryError::Write {
            path: path.clone(),
            source,
        })?;

    info!("Wrote {}", path.display());
    Ok(Some(path))
}
