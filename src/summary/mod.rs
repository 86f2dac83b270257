//! Summary aggregation.
//!
//! Builds the cross-tool overview, applies the fixed tool ordering and
//! drives a complete aggregation run.

pub mod generate;
pub mod ordering;
pub mod overview;

pub use generate::*;
pub use ordering::*;
pub use overview::*;
