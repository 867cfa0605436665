//! LaTeX to Markdown conversion.
//!
//! The text rules run over a placeholder template with every code block
//! already pulled out, so no substitution can reach into code. Bodies
//! go back in as fenced Markdown blocks at the very end.

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::compile;
use crate::document::*;
use crate::formatting::format_fragment;
use crate::language::Fragment;

static FRONTMATTER: &str = "\
# {title}

{blurb}

---

";

#[derive(Serialize)]
struct Context {
    title: String,
    blurb: String,
}

/// Convert a LaTeX document to Markdown. Allow-listed code blocks are
/// reformatted on the way; everything else inside them is preserved
/// byte for byte.
///
/// Returns the Markdown text and, when a code block was never closed,
/// that condition as a warning value whose offset points into the full
/// input.
pub fn convert_to_markdown(
    content: &str,
    title: &str,
) -> Result<(String, Option<DocumentError>), DocumentError> {
    let (body, base) = document_body(content);
    debug!("Converting {} bytes of document body", body.len());

    let extraction = extract_fragments(body);
    let unterminated = extraction
        .unterminated
        .map(|offset| DocumentError::UnterminatedFence(offset + base));

    let template = strip_fence_markers(&extraction.template);
    let template = convert_headings(&template);
    let template = convert_emphasis(&template);
    let template = clean_artifacts(&template);

    let blocks: Vec<String> = extraction
        .fragments
        .iter()
        .map(|fragment| fenced_block(fragment))
        .collect();

    let converted = reinsert_fragments(&template, &blocks)?;
    Ok((frontmatter(title) + &converted, unterminated))
}

/// The content between \begin{document} and \end{document}, or the
/// whole input when there is no document environment. Also returns the
/// byte offset the body starts at.
fn document_body(content: &str) -> (&str, usize) {
    let start = match content.find("\\begin{document}") {
        Some(at) => at + "\\begin{document}".len(),
        None => return (content, 0),
    };
    let end = content
        .find("\\end{document}")
        .unwrap_or(content.len());
    (&content[start..end], start)
}

/// Remove the minted begin/end markers, leaving each placeholder on a
/// line of its own. The end marker's newline stays put so the line
/// structure the comment and artifact rules depend on is not disturbed.
fn strip_fence_markers(template: &str) -> String {
    let begin = compile!(r"\\begin\{minted\}\{[^}]+\}\n?");
    let end = compile!(r"\\end\{minted\}");

    let result = begin.replace_all(template, "");
    end.replace_all(&result, "")
        .to_string()
}

fn convert_headings(content: &str) -> String {
    let rules: [(&regex::Regex, &str); 3] = [
        (compile!(r"\\section\{([^}]+)\}"), "# $1"),
        (compile!(r"\\subsection\{([^}]+)\}"), "## $1"),
        (compile!(r"\\subsubsection\{([^}]+)\}"), "### $1"),
    ];

    let mut result = content.to_string();
    for (pattern, replacement) in rules {
        result = pattern
            .replace_all(&result, replacement)
            .to_string();
    }
    result
}

fn convert_emphasis(content: &str) -> String {
    let rules: [(&regex::Regex, &str); 3] = [
        (compile!(r"\\textbf\{([^}]+)\}"), "**$1**"),
        (compile!(r"\\textit\{([^}]+)\}"), "*$1*"),
        (compile!(r"\\texttt\{([^}]+)\}"), "`$1`"),
    ];

    let mut result = content.to_string();
    for (pattern, replacement) in rules {
        result = pattern
            .replace_all(&result, replacement)
            .to_string();
    }
    result
}

/// Strip the LaTeX that has no Markdown counterpart: known layout
/// commands, environment markers, comment lines, lone braces, and
/// stray backslashes. Runs on the placeholder template only, so code
/// is out of reach.
fn clean_artifacts(content: &str) -> String {
    // ordered so that longer command names win over their prefixes
    let command = compile!(
        r"\\(tableofcontents|footnotesize|scriptsize|raggedright|raggedleft|centering|underline|footnote|maketitle|clearpage|pagebreak|noindent|newpage|textbf|textit|texttt|vspace|hspace|indent|large|Large|LARGE|small|tiny|huge|Huge|emph|label|vfill|hfill|cite|ref)(\{[^}]*\}|\[[^\]]*\])?"
    );

    let mut result = compile!(r"%=+[^=]*=+%")
        .replace_all(content, "")
        .to_string();
    result = command
        .replace_all(&result, "")
        .to_string();
    result = compile!(r"\\begin\{[^}]+\}")
        .replace_all(&result, "")
        .to_string();
    result = compile!(r"\\end\{[^}]+\}")
        .replace_all(&result, "")
        .to_string();
    result = compile!(r"(?m)^\s*[{}]\s*$")
        .replace_all(&result, "")
        .to_string();
    result = compile!(r"(?m)^%.*$")
        .replace_all(&result, "")
        .to_string();
    result = compile!(r"\\\\")
        .replace_all(&result, "")
        .to_string();
    result = compile!(r"\\\s")
        .replace_all(&result, " ")
        .to_string();
    result = compile!(r"(?m)\\$")
        .replace_all(&result, "")
        .to_string();

    let trimmed: Vec<&str> = result
        .lines()
        .map(|line| line.trim())
        .collect();
    let result = trimmed.join("\n");

    compile!(r"\n{3,}")
        .replace_all(&result, "\n\n")
        .to_string()
}

/// Render one extracted fragment as a fenced Markdown block, formatted
/// when its language is allow-listed.
fn fenced_block(fragment: &Fragment) -> String {
    let body = if is_formattable(fragment.language) {
        format_fragment(fragment.body)
    } else {
        fragment
            .body
            .to_string()
    };

    // no trailing newline; the placeholder's own line supplies it
    let body = body.trim_end_matches('\n');
    if body.is_empty() {
        format!("```{}\n```", fragment.language)
    } else {
        format!("```{}\n{}\n```", fragment.language, body)
    }
}

fn frontmatter(title: &str) -> String {
    let mut tt = TinyTemplate::new();
    tt.add_template("frontmatter", FRONTMATTER)
        .unwrap();

    let context = Context {
        title: title.to_string(),
        blurb: "A consolidated reference of data structures, algorithms, and contest techniques."
            .to_string(),
    };

    tt.render("frontmatter", &context)
        .unwrap()
}
