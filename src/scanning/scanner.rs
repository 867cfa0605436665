//! Lexical scanner turning one physical line into a sequence of spans.
//!
//! Scanning is total; a character that matches no other rule becomes a
//! single-character punctuation span, so no input is ever lost.

use crate::language::*;

/// Characters that form maximal operator runs.
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '<' | '>' | '=' | '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '!' | '~'
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug)]
struct Scanner<'i> {
    line: &'i str,
    offset: usize,
}

impl<'i> Scanner<'i> {
    fn rest(&self) -> &'i str {
        &self.line[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest()
            .chars()
            .next()
    }

    fn advance(&mut self, width: usize) {
        self.offset += width;
    }

    fn slice_from(&self, start: usize) -> &'i str {
        &self.line[start..self.offset]
    }

    fn take_while<F>(&mut self, predicate: F)
    where
        F: Fn(char) -> bool,
    {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance(c.len_utf8());
        }
    }

    /// Consume a quoted literal. Backslash escapes the following
    /// character. An unterminated literal extends to the end of the line.
    fn take_quoted(&mut self, delimiter: char) {
        self.advance(delimiter.len_utf8());
        while let Some(c) = self.peek() {
            self.advance(c.len_utf8());
            if c == '\\' {
                if let Some(escaped) = self.peek() {
                    self.advance(escaped.len_utf8());
                }
            } else if c == delimiter {
                break;
            }
        }
    }
}

/// Scan one physical line into spans. `in_comment` carries the only
/// cross-line state there is: whether the line starts inside a block
/// comment opened on an earlier line. Returns the spans and whether a
/// block comment is still open at the end of the line.
pub fn scan_line(line: &str, in_comment: bool) -> (Vec<Span<'_>>, bool) {
    let mut spans = Vec::new();
    let mut input = Scanner { line, offset: 0 };
    let mut open = in_comment;

    if open {
        let start = input.offset;
        match input
            .rest()
            .find("*/")
        {
            Some(i) => {
                input.advance(i + 2);
                open = false;
            }
            None => {
                let width = input
                    .rest()
                    .len();
                input.advance(width);
            }
        }
        if input.offset > start {
            spans.push(Span {
                kind: SpanKind::BlockComment,
                text: input.slice_from(start),
            });
        }
    }

    while let Some(c) = input.peek() {
        let start = input.offset;

        let kind = if c == '"' {
            input.take_quoted('"');
            SpanKind::Str
        } else if c == '\'' {
            input.take_quoted('\'');
            SpanKind::Char
        } else if input
            .rest()
            .starts_with("//")
        {
            let width = input
                .rest()
                .len();
            input.advance(width);
            SpanKind::LineComment
        } else if input
            .rest()
            .starts_with("/*")
        {
            input.advance(2);
            match input
                .rest()
                .find("*/")
            {
                Some(i) => input.advance(i + 2),
                None => {
                    let width = input
                        .rest()
                        .len();
                    input.advance(width);
                    open = true;
                }
            }
            SpanKind::BlockComment
        } else if is_word_char(c) {
            input.take_while(is_word_char);
            SpanKind::Word
        } else if is_operator_char(c) {
            input.take_while(is_operator_char);
            SpanKind::Operator
        } else if c.is_whitespace() {
            input.take_while(char::is_whitespace);
            SpanKind::Whitespace
        } else {
            input.advance(c.len_utf8());
            SpanKind::Punct
        };

        spans.push(Span {
            kind,
            text: input.slice_from(start),
        });
    }

    (spans, open)
}
