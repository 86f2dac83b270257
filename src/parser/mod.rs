//! Tool summary parsing.
//!
//! Each analysis tool writes one summary file made of `---` delimited
//! sections: a metadata block, an optional inline HTML fragment, and a
//! Markdown fragment.

pub mod tool_summary;

pub use tool_summary::*;
