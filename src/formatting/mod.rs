//! Canonical spacing for code fragments

mod spacing;

// Re-export all public symbols
pub use spacing::*;
