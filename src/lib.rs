//! Reformats C++ code blocks embedded in LaTeX documents, and converts
//! those documents to Markdown. The formatter is whitespace-only: it
//! adjusts horizontal spacing between tokens inside each line and never
//! splits, joins, or reindents lines.

pub mod converting;
pub mod document;
pub mod formatting;
pub mod language;
pub mod problem;
pub mod regex;
pub mod scanning;
