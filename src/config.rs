//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.voyager-summary.toml` files.

use crate::summary::{DEFAULT_OUT_HTML, DEFAULT_OUT_MD};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".voyager-summary.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Report output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory holding tool summaries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<PathBuf>,
}

/// Where the consolidated reports are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// HTML report path.
    #[serde(default = "default_html")]
    pub html: PathBuf,

    /// Markdown report path.
    #[serde(default = "default_markdown")]
    pub markdown: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            html: default_html(),
            markdown: default_markdown(),
        }
    }
}

fn default_html() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_HTML)
}

fn default_markdown() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_MD)
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load configuration from `dir/.voyager-summary.toml`.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref out_html) = args.out_html {
            self.output.html = out_html.clone();
        }
        if let Some(ref out_md) = args.out_md {
            self.output.markdown = out_md.clone();
        }
        if let Some(ref input_dir) = args.input_dir {
            self.general.input_dir = Some(input_dir.clone());
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.html, PathBuf::from("summary.html"));
        assert_eq!(config.output.markdown, PathBuf::from("summary.md"));
        assert!(config.general.input_dir.is_none());
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
input_dir = "reports"

[output]
html = "out/voyager.html"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.input_dir, Some(PathBuf::from("reports")));
        assert_eq!(config.output.html, PathBuf::from("out/voyager.html"));
        assert_eq!(config.output.markdown, PathBuf::from("summary.md"));
    }

    #[test]
    fn test_merge_with_args() {
        let mut config: Config = toml::from_str("[output]\nhtml = \"file.html\"\nmarkdown = \"file.md\"").unwrap();
        let args = Args::parse_from([
            "voyager-summary",
            "--tool-md",
            "insider=insider.md",
            "--out-md",
            "cli.md",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.output.html, PathBuf::from("file.html"));
        assert_eq!(config.output.markdown, PathBuf::from("cli.md"));
    }

    #[test]
    fn test_load_from_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(Config::load_from_dir(temp_dir.path()).unwrap().is_none());

        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[general]\ninput_dir = \"reports\"\n",
        )
        .unwrap();
        let config = Config::load_from_dir(temp_dir.path()).unwrap().unwrap();
        assert_eq!(config.general.input_dir, Some(PathBuf::from("reports")));

        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "[general\n").unwrap();
        assert!(Config::load_from_dir(temp_dir.path()).is_err());
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("summary.md"));
        assert!(toml_str.contains("summary.html"));
    }
}
