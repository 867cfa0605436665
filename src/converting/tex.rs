//! LaTeX-side normalization applied by the format command: math symbol
//! spellings, blank lines around section headings, and reformatting of
//! the embedded code blocks.

use crate::compile;
use crate::document::*;
use crate::formatting::format_fragment;

/// Normalize a LaTeX document in place: unify math symbol spellings,
/// put exactly one blank line around section headings, and reformat
/// every allow-listed code block. Code block bodies are extracted
/// before the text rules run, so they are never touched by them.
///
/// Returns the normalized document and, when a code block was never
/// closed, that condition as a warning value carrying the byte offset
/// of the orphaned begin marker.
pub fn format_document(content: &str) -> Result<(String, Option<DocumentError>), DocumentError> {
    let extraction = extract_fragments(content);
    let unterminated = extraction
        .unterminated
        .map(DocumentError::UnterminatedFence);

    let template = normalize_math(&extraction.template);
    let template = normalize_sections(&template);

    let bodies: Vec<String> = extraction
        .fragments
        .iter()
        .map(|fragment| {
            if is_formattable(fragment.language) {
                format_fragment(fragment.body)
            } else {
                fragment
                    .body
                    .to_string()
            }
        })
        .collect();

    let result = reinsert_fragments(&template, &bodies)?;
    Ok((result, unterminated))
}

/// Unify math symbol spellings towards the slanted forms. The already
/// unified spellings are left alone.
pub fn normalize_math(content: &str) -> String {
    let rules: [(&regex::Regex, &str); 6] = [
        (compile!(r"\\leq($|[^a-zA-Z])"), r"\leqslant$1"),
        (compile!(r"\\le($|[^a-zA-Z])"), r"\leqslant$1"),
        (compile!(r"\\geq($|[^a-zA-Z])"), r"\geqslant$1"),
        (compile!(r"\\ge($|[^a-zA-Z])"), r"\geqslant$1"),
        (compile!(r"\\ne($|[^a-zA-Z])"), r"\neq$1"),
        (compile!(r"\\wedge($|[^a-zA-Z])"), r"\land$1"),
    ];

    let mut result = content.to_string();
    for (pattern, replacement) in rules {
        result = pattern
            .replace_all(&result, replacement)
            .to_string();
    }
    result
}

/// Ensure section headings have exactly one blank line before and after
/// them, and squeeze any other run of blank lines down to one.
pub fn normalize_sections(content: &str) -> String {
    let heading = compile!(r"^\\(sub)*section\{");

    let mut spaced: Vec<&str> = Vec::new();
    for line in content.split('\n') {
        if heading.is_match(line.trim()) {
            if spaced
                .last()
                .map(|previous| {
                    !previous
                        .trim()
                        .is_empty()
                })
                .unwrap_or(false)
            {
                spaced.push("");
            }
            spaced.push(line);
            spaced.push("");
        } else {
            spaced.push(line);
        }
    }

    let mut result: Vec<&str> = Vec::new();
    let mut previous_blank = false;
    for line in spaced {
        let blank = line
            .trim()
            .is_empty();
        if blank && previous_blank {
            continue;
        }
        result.push(line);
        previous_blank = blank;
    }

    result.join("\n")
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn math_symbols_unified() {
        assert_eq!(normalize_math(r"$a \le b$"), r"$a \leqslant b$");
        assert_eq!(normalize_math(r"$a \leq b$"), r"$a \leqslant b$");
        assert_eq!(normalize_math(r"$a \ge b$"), r"$a \geqslant b$");
        assert_eq!(normalize_math(r"$a \ne b$"), r"$a \neq b$");
        assert_eq!(normalize_math(r"$a \wedge b$"), r"$a \land b$");
    }

    #[test]
    fn unified_spellings_untouched() {
        assert_eq!(normalize_math(r"$a \leqslant b$"), r"$a \leqslant b$");
        assert_eq!(normalize_math(r"$a \geqslant b$"), r"$a \geqslant b$");
        assert_eq!(normalize_math(r"$a \neq b$"), r"$a \neq b$");
    }

    #[test]
    fn headings_get_blank_lines() {
        let input = "text\n\\section{Graphs}\nmore";
        let expected = "text\n\n\\section{Graphs}\n\nmore";
        assert_eq!(normalize_sections(input), expected);
    }

    #[test]
    fn blank_runs_squeeze() {
        let input = "a\n\n\n\nb";
        assert_eq!(normalize_sections(input), "a\n\nb");
    }

    #[test]
    fn unterminated_block_surfaced_nonfatally() {
        let input = "intro\n\\begin{minted}{cpp}\nint x;\n";
        let (result, unterminated) = format_document(input).unwrap();
        assert_eq!(unterminated, Some(DocumentError::UnterminatedFence(6)));
        assert_eq!(result, input);
    }

    #[test]
    fn code_blocks_are_protected_from_math_rules() {
        let input = "\
$x \\le y$
\\begin{minted}{cpp}
if(a<b) x=1;
\\end{minted}
";
        let (result, unterminated) = format_document(input).unwrap();
        assert_eq!(unterminated, None);
        assert!(result.contains(r"\leqslant"));
        assert!(result.contains("if (a < b) x = 1;"));
    }

    #[test]
    fn other_languages_pass_through() {
        let input = "\
\\begin{minted}{python}
x=[i for i in range(n)]
\\end{minted}
";
        let (result, _) = format_document(input).unwrap();
        assert!(result.contains("x=[i for i in range(n)]"));
    }
}
