//! Tool input discovery.
//!
//! Resolves the `TOOL=PATH` pairs given on the command line against an
//! optional input directory and discovers summaries of known tools that
//! were not named explicitly (`<tool>.md`, with `<tool>.html` as its
//! reference template).

use crate::summary::tool_priority;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const SUMMARY_EXTENSION: &str = "md";
const TEMPLATE_EXTENSION: &str = "html";

/// Summary and template files for one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolInputs {
    /// `(tool, summary file)` pairs.
    pub tool_md: Vec<(String, PathBuf)>,
    /// `(tool, HTML template file)` pairs.
    pub tool_html: Vec<(String, PathBuf)>,
}

impl ToolInputs {
    pub fn is_empty(&self) -> bool {
        self.tool_md.is_empty()
    }
}

/// Scanner for an input directory of tool summaries.
pub struct InputScanner {
    input_dir: Option<PathBuf>,
}

impl InputScanner {
    /// Create a scanner. Without an input directory only explicit pairs are used.
    pub fn new(input_dir: Option<PathBuf>) -> Self {
        Self { input_dir }
    }

    /// Resolve explicit pairs and add discovered ones.
    ///
    /// Explicit pairs keep their order and come first. A discovered file is
    /// only used for a tool that has no explicit pair of the same kind.
    /// Fails when there is neither an explicit summary nor an input directory;
    /// an input directory without known tool files yields no summaries.
    pub fn resolve(
        &self,
        tool_md: &[(String, PathBuf)],
        tool_html: &[(String, PathBuf)],
    ) -> Result<ToolInputs> {
        let mut inputs = ToolInputs {
            tool_md: self.resolve_pairs(tool_md),
            tool_html: self.resolve_pairs(tool_html),
        };

        let Some(ref dir) = self.input_dir else {
            if inputs.is_empty() {
                bail!("No tool summaries to aggregate. Pass --tool-md TOOL=PATH or --input-dir DIR");
            }
            return Ok(inputs);
        };

        let (discovered_md, discovered_html) = discover(dir)?;

        for (tool, path) in discovered_md {
            if !inputs.tool_md.iter().any(|(t, _)| *t == tool) {
                debug!("Discovered {} summary: {}", tool, path.display());
                inputs.tool_md.push((tool, path));
            }
        }

        for (tool, path) in discovered_html {
            if !inputs.tool_html.iter().any(|(t, _)| *t == tool) {
                debug!("Discovered {} HTML template: {}", tool, path.display());
                inputs.tool_html.push((tool, path));
            }
        }

        Ok(inputs)
    }

    fn resolve_pairs(&self, pairs: &[(String, PathBuf)]) -> Vec<(String, PathBuf)> {
        pairs
            .iter()
            .map(|(tool, path)| (tool.clone(), self.resolve_path(path)))
            .collect()
    }

    /// Relative paths are taken from the input directory when one is set.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        match self.input_dir {
            Some(ref dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

type DiscoveredPairs = Vec<(String, PathBuf)>;

/// Find `<tool>.md` and `<tool>.html` for known tools directly inside `dir`.
fn discover(dir: &Path) -> Result<(DiscoveredPairs, DiscoveredPairs)> {
    let mut summaries = Vec::new();
    let mut templates = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("Failed to scan input directory: {}", dir.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let (Some(stem), Some(extension)) = (
            path.file_stem().and_then(|s| s.to_str()),
            path.extension().and_then(|e| e.to_str()),
        ) else {
            continue;
        };

        let Some(rank) = tool_priority(stem) else {
            continue;
        };

        let found = (rank, stem.to_string(), path.to_path_buf());
        match extension {
            SUMMARY_EXTENSION => summaries.push(found),
            TEMPLATE_EXTENSION => templates.push(found),
            _ => {}
        }
    }

    Ok((by_priority(summaries), by_priority(templates)))
}

fn by_priority(mut found: Vec<(usize, String, PathBuf)>) -> DiscoveredPairs {
    found.sort_by_key(|(rank, _, _)| *rank);
    found
        .into_iter()
        .map(|(_, tool, path)| (tool, path))
        .collect()
}
