//! Spacing rule engine: walks a classified token sequence and emits
//! canonical text, one logical line at a time.
//!
//! Each adjacency produces exactly one space or none. Literal and
//! comment spans pass through byte for byte, leading indentation is
//! preserved verbatim, and pairs no rule covers keep the presence (not
//! the width) of whatever whitespace the input had.

use crate::language::*;
use crate::scanning::*;

/// Reformat one code fragment. Total: malformed input degrades to
/// best-effort output, it never fails.
pub fn format_fragment(text: &str) -> String {
    let mut lines = Vec::new();
    let mut in_comment = false;

    for line in text.split('\n') {
        let (formatted, still_open) = format_line(line, in_comment);
        in_comment = still_open;
        lines.push(formatted);
    }

    lines.join("\n")
}

fn format_line(line: &str, in_comment: bool) -> (String, bool) {
    let trimmed = line.trim_end();

    if in_comment {
        // the leading span is the continuation of a block comment and
        // passes through verbatim; anything after the terminator is
        // canonicalized as usual
        let (spans, open) = scan_line(trimmed, true);
        let tokens = classify(&spans);
        return (render(&tokens, ""), open);
    }

    let content = trimmed.trim_start();
    if content.is_empty() {
        return (String::new(), false);
    }

    // preprocessor directives are out of scope; reformatting would
    // mangle #include <...> paths
    if content.starts_with('#') {
        return (trimmed.to_string(), false);
    }

    let indent = &trimmed[..trimmed.len() - content.len()];
    let (spans, open) = scan_line(content, false);
    let tokens = classify(&spans);
    (render(&tokens, indent), open)
}

fn render(tokens: &[Token], indent: &str) -> String {
    let mut output = String::with_capacity(indent.len() + tokens.len() * 4);
    output.push_str(indent);

    let mut previous: Option<&Token> = None;
    let mut had_space = false;
    let mut ternary = false;

    for token in tokens {
        if token.kind == TokenKind::Whitespace {
            had_space = true;
            continue;
        }
        if let Some(prev) = previous {
            if separator(prev, token, had_space, ternary) {
                output.push(' ');
            }
        }
        output.push_str(token.text);
        if token.kind == TokenKind::Punct('?') {
            ternary = true;
        }
        previous = Some(token);
        had_space = false;
    }

    output
}

/// Decide whether one space goes between two adjacent tokens. The rules
/// are ordered; the first that applies wins. `ternary` says whether a
/// `?` occurred earlier on the line, which settles how a `:` reads.
fn separator(prev: &Token, cur: &Token, had_space: bool, ternary: bool) -> bool {
    use OpKind::*;
    use TokenKind::*;

    // template brackets bind tight on both sides, except that a close
    // followed by an identifier is a declaration
    if prev.kind == Op(TemplateOpen) || cur.kind == Op(TemplateOpen) {
        return false;
    }
    if cur.kind == Op(TemplateClose) {
        return false;
    }
    if prev.kind == Op(TemplateClose) {
        return cur.kind == Word;
    }

    if cur.kind == Comment || prev.kind == Comment {
        return had_space;
    }

    // nothing inside the opening or before the closing of a bracket pair
    if matches!(cur.kind, Punct(')') | Punct(']')) {
        return false;
    }
    if matches!(prev.kind, Punct('(') | Punct('[')) {
        return false;
    }

    // comma and semicolon: none before, one after, except against a
    // closing brace
    if matches!(cur.kind, Punct(',') | Punct(';')) {
        return false;
    }
    if matches!(prev.kind, Punct(',') | Punct(';')) {
        return !matches!(cur.kind, Punct('}'));
    }

    if cur.kind == Punct('(') {
        return match prev.kind {
            Word => is_control_keyword(prev.text) || is_statement_keyword(prev.text),
            Op(Binary) => true,
            Op(Unary) | Op(Glued) => false,
            Punct(')') | Punct(']') => false,
            _ => had_space,
        };
    }

    if cur.kind == Punct('{') {
        return matches!(prev.kind, Word | Literal | Punct(')') | Punct(']'));
    }

    if prev.kind == Punct('}') && cur.kind == Word {
        return true;
    }

    // the conditional operator is padded like a binary; a `:` with no
    // `?` before it keeps its shape so case labels stay intact
    if cur.kind == Punct('?') && matches!(prev.kind, Word | Literal | Punct(')') | Punct(']')) {
        return true;
    }
    if prev.kind == Punct('?') {
        return true;
    }
    if ternary && (cur.kind == Punct(':') || prev.kind == Punct(':')) {
        return true;
    }

    // a statement keyword jammed against a closing parenthesis, as in
    // if(!ok)return
    if prev.kind == Punct(')') && cur.kind == Word {
        return is_control_keyword(cur.text) || is_statement_keyword(cur.text) || had_space;
    }

    if prev.kind == Op(Binary) {
        return true;
    }
    if cur.kind == Op(Glued) || prev.kind == Op(Glued) {
        return false;
    }
    if cur.kind == Op(Binary) {
        return true;
    }

    if prev.kind == Op(Unary) {
        return false;
    }
    if cur.kind == Op(Unary) {
        return if let Word = prev.kind {
            is_statement_keyword(prev.text) || had_space
        } else {
            had_space
        };
    }

    if prev.kind == Word && cur.kind == Word {
        return true;
    }

    had_space
}
