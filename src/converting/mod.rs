//! Document-level transformations: LaTeX normalization for the format
//! command, and LaTeX to Markdown conversion.

mod markdown;
mod tex;

// Re-export all public symbols
pub use markdown::*;
pub use tex::*;
