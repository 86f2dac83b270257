//! Error types for summary parsing and aggregation.

use std::path::PathBuf;
use thiserror::Error;

/// A tool summary file that does not follow the summary format.
///
/// The display text of each variant is the exact message surfaced to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Missing metadata section in {tool} summary: {file_path}")]
    MissingMetadata { tool: String, file_path: String },

    #[error("Invalid metadata line '{line}' in {file_path}")]
    InvalidMetadataLine { line: String, file_path: String },

    #[error("Missing required metadata key 'html-template' in {file_path}")]
    MissingHtmlTemplateKey { file_path: String },

    #[error("Invalid html-template value '{value}' in {file_path}. Expected 'inline' or 'reference'.")]
    InvalidHtmlTemplate { value: String, file_path: String },

    #[error("Missing inline HTML template section for {tool} in {file_path}")]
    MissingInlineHtml { tool: String, file_path: String },

    #[error("Missing markdown section for {tool} in {file_path}")]
    MissingMarkdown { tool: String, file_path: String },

    #[error("Missing --tool-html-template for {tool} while summary declares html-template: reference")]
    MissingReferenceHtml { tool: String },
}

/// Any failure that aborts an aggregation run.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_messages() {
        let err = FormatError::InvalidHtmlTemplate {
            value: "embedded".to_string(),
            file_path: "/tmp/insider.md".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid html-template value 'embedded' in /tmp/insider.md. Expected 'inline' or 'reference'."
        );

        let err = FormatError::MissingReferenceHtml {
            tool: "jafax".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing --tool-html-template for jafax while summary declares html-template: reference"
        );
    }

    #[test]
    fn test_summary_error_is_transparent_for_format() {
        let err = SummaryError::from(FormatError::MissingHtmlTemplateKey {
            file_path: "/tmp/a.md".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Missing required metadata key 'html-template' in /tmp/a.md"
        );
    }

    #[test]
    fn test_read_error_mentions_path() {
        let err = SummaryError::Read {
            path: PathBuf::from("/in/missing.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/in/missing.md"));
    }
}
