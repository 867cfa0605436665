#[cfg(test)]
mod verify {
    use snipfmt::document::*;

    const DOCUMENT: &str = "\
\\section{Union Find}

Some prose about merging sets.

\\begin{minted}{cpp}
int find(int x) {
    if(p[x]!=x) p[x]=find(p[x]);
    return p[x];
}
\\end{minted}

\\begin{minted}{python}
def find(x): ...
\\end{minted}
";

    #[test]
    fn each_region_extracted_once() {
        let extraction = extract_fragments(DOCUMENT);
        assert_eq!(
            extraction
                .fragments
                .len(),
            2
        );
        assert_eq!(extraction.fragments[0].language, "cpp");
        assert_eq!(extraction.fragments[1].language, "python");
        assert_eq!(extraction.unterminated, None);
    }

    #[test]
    fn template_has_no_code() {
        let extraction = extract_fragments(DOCUMENT);
        assert!(!extraction
            .template
            .contains("find"));
        assert!(extraction
            .template
            .contains("Some prose about merging sets."));
    }

    #[test]
    fn unmodified_bodies_restore_the_document() {
        let extraction = extract_fragments(DOCUMENT);
        let bodies: Vec<String> = extraction
            .fragments
            .iter()
            .map(|fragment| {
                fragment
                    .body
                    .to_string()
            })
            .collect();
        let restored = reinsert_fragments(&extraction.template, &bodies).unwrap();
        assert_eq!(restored, DOCUMENT);
    }

    #[test]
    fn fragments_are_isolated() {
        // reformatting one body must not disturb the other
        let extraction = extract_fragments(DOCUMENT);
        let mut bodies: Vec<String> = extraction
            .fragments
            .iter()
            .map(|fragment| {
                fragment
                    .body
                    .to_string()
            })
            .collect();
        bodies[0] = "changed\n".to_string();

        let restored = reinsert_fragments(&extraction.template, &bodies).unwrap();
        assert!(restored.contains("changed"));
        assert!(restored.contains("def find(x): ..."));
        assert!(!restored.contains("if(p[x]!=x)"));
    }

    #[test]
    fn unterminated_region_is_reported_not_fatal() {
        let document = "intro\n\\begin{minted}{cpp}\nint x;\n";
        let extraction = extract_fragments(document);
        assert_eq!(extraction.unterminated, Some(6));
        assert_eq!(extraction.template, document);
        assert!(extraction
            .fragments
            .is_empty());
    }

    #[test]
    fn code_resembling_markers_stays_inside_its_region() {
        let document = "\
\\begin{minted}{cpp}
puts(\"\\\\end{minted}\");
wait, that was a string
\\end{minted}
";
        // the end marker only counts when it is the whole line
        let extraction = extract_fragments(document);
        assert_eq!(
            extraction
                .fragments
                .len(),
            1
        );
        assert!(extraction.fragments[0]
            .body
            .contains("that was a string"));
    }
}
