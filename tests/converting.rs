#[cfg(test)]
mod verify {
    use snipfmt::converting::*;

    const DOCUMENT: &str = "\
\\documentclass{book}
\\begin{document}
\\section{Graphs}
Some \\textbf{bold} prose with $a \\le b$ inline.
\\begin{minted}{cpp}
if(u<v) swap(u,v);
\\end{minted}
\\end{document}
";

    #[test]
    fn format_normalizes_text_and_code() {
        let (result, unterminated) = format_document(DOCUMENT).unwrap();
        assert_eq!(unterminated, None);
        assert!(result.contains(r"$a \leqslant b$"));
        assert!(result.contains("if (u < v) swap(u, v);"));
        // the document structure survives
        assert!(result.contains("\\begin{minted}{cpp}"));
        assert!(result.contains("\\end{minted}"));
        assert!(result.contains("\\end{document}"));
    }

    #[test]
    fn format_is_idempotent() {
        let (once, _) = format_document(DOCUMENT).unwrap();
        let (twice, _) = format_document(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn convert_produces_markdown() {
        let (result, unterminated) = convert_to_markdown(DOCUMENT, "Notes").unwrap();
        assert_eq!(unterminated, None);
        assert!(result.starts_with("# Notes\n"));
        assert!(result.contains("# Graphs"));
        assert!(result.contains("**bold**"));
        assert!(result.contains("```cpp\nif (u < v) swap(u, v);\n```"));
        assert!(!result.contains("\\section"));
        assert!(!result.contains("\\begin{minted}"));
        assert!(!result.contains("\\documentclass"));
    }

    #[test]
    fn convert_keeps_other_languages_verbatim() {
        let document = "\
\\begin{document}
\\begin{minted}{python}
x=[i for i in range(n)]
\\end{minted}
\\end{document}
";
        let (result, _) = convert_to_markdown(document, "Notes").unwrap();
        assert!(result.contains("```python\nx=[i for i in range(n)]\n```"));
    }

    #[test]
    fn unterminated_offset_maps_to_the_full_input() {
        let document = "\
\\begin{document}
text
\\begin{minted}{cpp}
int x;
\\end{document}
";
        let (_, unterminated) = convert_to_markdown(document, "Notes").unwrap();
        let warning = unterminated.unwrap();
        assert!(document[warning.offset()..].starts_with("\\begin{minted}{cpp}"));
        assert!(warning
            .message()
            .contains("never closed"));
    }
}
