//! Extraction of fenced code regions from a host document and strictly
//! positional reinsertion of their (possibly reformatted) bodies.
//!
//! The fence syntax recognized on the input side is the LaTeX minted
//! environment: a `\begin{minted}{tag}` line, a body of arbitrarily many
//! lines, and a matching `\end{minted}` line. Placeholders substituted
//! into the host text are NUL-delimited indexed markers, which cannot
//! occur in document text.

use crate::language::*;

const BEGIN_MARKER: &str = "\\begin{minted}{";
const END_MARKER: &str = "\\end{minted}";

/// Language tags routed through the code formatter. Anything else
/// passes through unchanged.
pub fn is_formattable(language: &str) -> bool {
    matches!(
        language
            .to_ascii_lowercase()
            .as_str(),
        "cpp" | "c++" | "cc" | "cxx" | "c"
    )
}

fn placeholder(index: usize) -> String {
    format!("\u{0}fragment:{}\u{0}", index)
}

/// Recognize a begin marker and return its language tag.
fn begin_marker(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix(BEGIN_MARKER)?;
    let end = rest.find('}')?;
    Some(&rest[..end])
}

fn is_end_marker(line: &str) -> bool {
    line.trim() == END_MARKER
}

/// Pull all fenced regions out of a document, replacing each body with a
/// placeholder. Running this followed by [`reinsert_fragments`] with the
/// unmodified bodies reproduces the document exactly.
///
/// A begin marker with no matching end marker is not fatal: the region
/// and everything after it stay in the template untouched, and the
/// marker's byte offset is surfaced in `unterminated`.
pub fn extract_fragments(document: &str) -> Extraction<'_> {
    let mut template = String::with_capacity(document.len());
    let mut fragments = Vec::new();
    let mut unterminated = None;

    let mut offset = 0;
    while offset < document.len() {
        let line_end = next_line_end(document, offset);
        let line = &document[offset..line_end];

        let language = match begin_marker(line) {
            Some(language) => language,
            None => {
                template.push_str(line);
                offset = line_end;
                continue;
            }
        };

        // scan forward for the end marker
        let body_start = line_end;
        let mut cursor = line_end;
        let mut found = None;
        while cursor < document.len() {
            let next = next_line_end(document, cursor);
            if is_end_marker(&document[cursor..next]) {
                found = Some((cursor, next));
                break;
            }
            cursor = next;
        }

        match found {
            Some((body_end, after)) => {
                let index = fragments.len();
                fragments.push(Fragment {
                    language,
                    body: &document[body_start..body_end],
                    index,
                });
                template.push_str(line);
                template.push_str(&placeholder(index));
                template.push_str(&document[body_end..after]);
                offset = after;
            }
            None => {
                // structurally broken document; leave the rest alone
                unterminated = Some(offset);
                template.push_str(&document[offset..]);
                offset = document.len();
            }
        }
    }

    Extraction {
        template,
        fragments,
        unterminated,
    }
}

fn next_line_end(document: &str, offset: usize) -> usize {
    match document[offset..].find('\n') {
        Some(i) => offset + i + 1,
        None => document.len(),
    }
}

/// Substitute fragment bodies back into a placeholder template, each
/// placeholder exactly once, in order.
pub fn reinsert_fragments(template: &str, bodies: &[String]) -> Result<String, DocumentError> {
    let mut result = template.to_string();
    for (index, body) in bodies
        .iter()
        .enumerate()
    {
        let marker = placeholder(index);
        if !result.contains(&marker) {
            return Err(DocumentError::MissingPlaceholder(index));
        }
        result = result.replacen(&marker, body, 1);
    }
    Ok(result)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A begin marker at this byte offset never found its end marker.
    UnterminatedFence(usize),
    /// Reinsertion was handed more bodies than the template has
    /// placeholders for.
    MissingPlaceholder(usize),
}

impl DocumentError {
    pub fn offset(&self) -> usize {
        match self {
            DocumentError::UnterminatedFence(offset) => *offset,
            DocumentError::MissingPlaceholder(_) => 0,
        }
    }

    pub fn message(&self) -> String {
        match self {
            DocumentError::UnterminatedFence(_) => {
                "code block is never closed by \\end{minted}".to_string()
            }
            DocumentError::MissingPlaceholder(index) => {
                format!("no placeholder for fragment {}", index)
            }
        }
    }
}
