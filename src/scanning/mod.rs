//! Lexical scanning of code fragments and classification of angle
//! brackets into template delimiters versus relational and shift
//! operators.

mod brackets;
mod scanner;

// Re-export all public symbols
pub use brackets::*;
pub use scanner::*;
