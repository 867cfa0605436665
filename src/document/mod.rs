//! Host document handling: loading, and extraction/reinsertion of
//! fenced code regions.

mod fences;

// Re-export all public symbols
pub use fences::*;

use std::path::Path;
use tracing::debug;

use crate::language::LoadingError;

/// Read the whole document into an owned String; fragments and spans
/// borrow from it for the rest of the run.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "No such document".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Could not read document".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}
