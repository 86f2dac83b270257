//! Consolidated report rendering.
//!
//! Both renderers take the overview and the already ordered summaries;
//! neither reorders nor escapes tool content.

pub mod html;
pub mod markdown;

pub use html::render_html_summary;
pub use markdown::render_markdown_summary;

/// Title shared by both reports.
pub const REPORT_TITLE: &str = "Voyager Summary";
