// Types shared across the scanning, formatting, and document layers

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
