// Program wide top-level diagnostics

use std::path::Path;

use owo_colors::OwoColorize;

/// Render a caret diagnostic pointing at a byte offset in a source
/// document. Used for structural problems that are worth telling the
/// user about but do not stop the run.
pub fn report(filename: &Path, source: &str, offset: usize, problem: &str) -> String {
    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("?");

    let line = i + 1;
    let column = j + 1;

    let width = line
        .to_string()
        .len();
    let width = 3.max(width);

    format!(
        r#"
{}: {}
{}:{}:{}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}
            "#,
        "warning".bright_yellow(),
        problem.bold(),
        filename.to_string_lossy(),
        line,
        column,
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
    )
    .trim_ascii()
    .to_string()
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number, also zero-origin for consistency.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => offset - start - 1,
        None => offset,
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn counting_lines() {
        let content = "This is a test";

        let n = calculate_line_number(content, 5);
        assert_eq!(n + 1, 1);

        let content = r#"
This
is
a
test
            "#
        .trim_ascii();

        let n = calculate_line_number(content, 10);
        assert_eq!(n + 1, 4);

        let after = content
            .lines()
            .nth(n)
            .unwrap();
        assert_eq!(after, "test");
    }

    #[test]
    fn counting_columns() {
        let content = "one\ntwo\nthree";

        assert_eq!(calculate_column_number(content, 0), 0);
        assert_eq!(calculate_column_number(content, 4), 0);
        assert_eq!(calculate_column_number(content, 6), 2);
    }

    #[test]
    fn report_names_the_location() {
        let content = "fine\n\\begin{minted}{cpp}\nbroken\n";
        let rendered = report(
            Path::new("notes.tex"),
            content,
            5,
            "code block is never closed",
        );
        assert!(rendered.contains("notes.tex:2:1"));
        assert!(rendered.contains("\\begin{minted}{cpp}"));
    }
}
