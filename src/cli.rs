//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Voyager Summary - consolidate analysis tool summaries into one report
///
/// Reads the summary file written by each analysis tool and produces a
/// combined HTML report and a combined Markdown report.
///
/// Examples:
///   voyager-summary --tool-md insider=out/insider.md --tool-md lizard=out/lizard.md
///   voyager-summary --tool-md jafax=jafax.md --tool-html-template jafax=jafax.html
///   voyager-summary --input-dir out --out-html report.html --out-md report.md
///   voyager-summary --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Tool summary file, as TOOL=PATH (repeatable)
    #[arg(long = "tool-md", value_name = "TOOL=PATH", value_parser = parse_tool_path)]
    pub tool_md: Vec<(String, PathBuf)>,

    /// HTML template for a tool whose summary declares html-template: reference,
    /// as TOOL=PATH (repeatable)
    #[arg(long = "tool-html-template", value_name = "TOOL=PATH", value_parser = parse_tool_path)]
    pub tool_html: Vec<(String, PathBuf)>,

    /// Directory holding tool summaries
    ///
    /// Relative --tool-md and --tool-html-template paths are resolved against it,
    /// and <tool>.md / <tool>.html files of known tools are picked up automatically.
    #[arg(long, value_name = "DIR", env = "VOYAGER_INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Conditions file passed through to the aggregation (must exist)
    #[arg(long, value_name = "FILE")]
    pub conditions_file: Option<PathBuf>,

    /// Condition as KEY=VALUE (repeatable)
    #[arg(long = "condition", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub conditions: Vec<(String, String)>,

    /// Output file for the HTML report [default: summary.html]
    #[arg(long, value_name = "FILE")]
    pub out_html: Option<PathBuf>,

    /// Output file for the Markdown report [default: summary.md]
    #[arg(long, value_name = "FILE")]
    pub out_md: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .voyager-summary.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the run result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .voyager-summary.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Parse a `TOOL=PATH` pair.
fn parse_tool_path(value: &str) -> Result<(String, PathBuf), String> {
    let (tool, path) = parse_key_value(value)?;
    Ok((tool, PathBuf::from(path)))
}

/// Parse a `KEY=VALUE` pair. Both sides must be non-empty; only the key is trimmed.
fn parse_key_value(value: &str) -> Result<(String, String), String> {
    let (key, rest) = value
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", value))?;

    let key = key.trim();
    if key.is_empty() || rest.is_empty() {
        return Err(format!("expected KEY=VALUE, got '{}'", value));
    }

    Ok((key.to_string(), rest.to_string()))
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref input_dir) = self.input_dir {
            if !input_dir.exists() {
                return Err(format!(
                    "Input directory does not exist: {}",
                    input_dir.display()
                ));
            }
            if !input_dir.is_dir() {
                return Err(format!(
                    "Input path is not a directory: {}",
                    input_dir.display()
                ));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
