//! Data models for tool summaries.
//!
//! This module contains the records produced by the summary parser and
//! the overview consumed by the report renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the HTML fragment of a tool summary comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlTemplateMode {
    /// The fragment is embedded in the summary file itself.
    Inline,
    /// The fragment lives in a separate file supplied alongside the summary.
    Reference,
}

impl fmt::Display for HtmlTemplateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlTemplateMode::Inline => write!(f, "inline"),
            HtmlTemplateMode::Reference => write!(f, "reference"),
        }
    }
}

impl HtmlTemplateMode {
    /// Parse a metadata value. Matching is exact, no case folding.
    pub fn from_metadata(value: &str) -> Option<Self> {
        match value {
            "inline" => Some(HtmlTemplateMode::Inline),
            "reference" => Some(HtmlTemplateMode::Reference),
            _ => None,
        }
    }
}

/// Key/value metadata from the first section of a summary file.
///
/// Keys keep their first-insertion order; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, overwriting any earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One tool's contribution to the consolidated reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedToolSummary {
    /// Tool identifier supplied by the caller.
    pub tool: String,
    /// Metadata block; always contains `html-template`.
    pub metadata: Metadata,
    /// Source of the HTML fragment.
    pub html_template_mode: HtmlTemplateMode,
    /// HTML fragment embedded verbatim in the HTML report.
    pub html_template_content: String,
    /// Markdown fragment embedded verbatim in the Markdown report.
    pub markdown_content: String,
}

/// Cross-tool overview shown at the top of both reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOverview {
    /// Tool names in record order.
    pub tool_names: Vec<String>,
}
