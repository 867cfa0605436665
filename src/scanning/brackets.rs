//! Depth-tracked resolution of `<` and `>` between template delimiters
//! and relational/shift operators.
//!
//! A `<` preceded by an identifier only provisionally opens a template;
//! the decision is confirmed when a matching `>` closes it and revoked
//! when something that cannot appear inside template arguments shows up
//! first, or when the line ends with the bracket still open. A run of
//! `>` characters closes one frame per character, but only when enough
//! frames are open; otherwise it keeps its shift/relational reading.
//! Classification never fails, it only degrades to the operator reading.

use crate::language::*;

pub fn classify<'i>(spans: &[Span<'i>]) -> Vec<Token<'i>> {
    let mut classifier = Classifier {
        tokens: Vec::with_capacity(spans.len()),
        frames: Vec::new(),
    };

    for span in spans {
        classifier.consume(span);
    }

    // An unterminated template is never valid, so anything still open
    // reverts to the relational reading.
    classifier.downgrade();
    classifier.tokens
}

struct Classifier<'i> {
    tokens: Vec<Token<'i>>,
    frames: Vec<usize>,
}

/// Operators that cannot occur between a template's `<` and `>`.
fn is_downgrade_operator(text: &str) -> bool {
    matches!(
        text,
        "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "^=" | "|=" | "&=" | "<<=" | ">>=" | "&&" | "||"
            | "<<"
    )
}

impl<'i> Classifier<'i> {
    fn push(&mut self, kind: TokenKind, text: &'i str) {
        self.tokens
            .push(Token { kind, text });
    }

    fn previous(&self) -> Option<&Token<'i>> {
        self.tokens
            .iter()
            .rev()
            .find(|token| token.is_significant())
    }

    /// Revoke all provisionally open frames.
    fn downgrade(&mut self) {
        while let Some(index) = self
            .frames
            .pop()
        {
            self.tokens[index].kind = TokenKind::Op(OpKind::Binary);
        }
    }

    fn consume(&mut self, span: &Span<'i>) {
        match span.kind {
            SpanKind::Word => self.push(TokenKind::Word, span.text),
            SpanKind::Str | SpanKind::Char => {
                // a literal cannot be a template argument
                self.downgrade();
                self.push(TokenKind::Literal, span.text);
            }
            SpanKind::LineComment | SpanKind::BlockComment => {
                self.push(TokenKind::Comment, span.text)
            }
            SpanKind::Whitespace => self.push(TokenKind::Whitespace, span.text),
            SpanKind::Punct => {
                let c = span
                    .text
                    .chars()
                    .next()
                    .unwrap_or(' ');
                if matches!(c, ';' | '{' | '}' | '?') {
                    self.downgrade();
                }
                self.push(TokenKind::Punct(c), span.text);
            }
            SpanKind::Operator => self.split_run(span.text),
        }
    }

    /// Split a maximal operator run into individual operators, settling
    /// the `<` and `>` readings as we go.
    fn split_run(&mut self, run: &'i str) {
        let mut rest = run;
        while !rest.is_empty() {
            let width = self.take_operator(rest);
            rest = &rest[width..];
        }
    }

    /// Consume one operator from the front of `rest`, returning its
    /// width in bytes.
    fn take_operator(&mut self, rest: &'i str) -> usize {
        // Fused forms first; their angle characters keep the operator
        // reading outright.
        for compound in ["<<=", ">>="] {
            if rest.starts_with(compound) {
                self.downgrade();
                self.push(TokenKind::Op(OpKind::Binary), &rest[..3]);
                return 3;
            }
        }
        if rest.starts_with(">=") {
            self.push(TokenKind::Op(OpKind::Binary), &rest[..2]);
            return 2;
        }
        if rest.starts_with('>') {
            return self.take_closes(rest);
        }
        if rest.starts_with("<<") {
            self.downgrade();
            self.push(TokenKind::Op(OpKind::Binary), &rest[..2]);
            return 2;
        }
        if rest.starts_with("<=") {
            self.push(TokenKind::Op(OpKind::Binary), &rest[..2]);
            return 2;
        }
        if rest.starts_with('<') {
            self.take_open(&rest[..1]);
            return 1;
        }
        for compound in [
            "->", "++", "--", "==", "!=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "^=", "|=",
            "&=",
        ] {
            if rest.starts_with(compound) {
                let kind = match compound {
                    "->" | "++" | "--" => TokenKind::Op(OpKind::Glued),
                    _ => TokenKind::Op(OpKind::Binary),
                };
                if is_downgrade_operator(compound) {
                    self.downgrade();
                }
                self.push(kind, &rest[..2]);
                return 2;
            }
        }
        self.take_single(&rest[..1]);
        1
    }

    /// A lone `<`: provisionally a template open when an identifier
    /// precedes it, otherwise less-than.
    fn take_open(&mut self, text: &'i str) {
        let plausible = match self.previous() {
            Some(token) => match token.kind {
                TokenKind::Word => {
                    !is_control_keyword(token.text) && !is_statement_keyword(token.text)
                }
                _ => false,
            },
            None => false,
        };

        if plausible {
            self.frames
                .push(
                    self.tokens
                        .len(),
                );
            self.push(TokenKind::Op(OpKind::TemplateOpen), text);
        } else {
            self.push(TokenKind::Op(OpKind::Binary), text);
        }
    }

    /// A run of `>` characters: close one frame per character when that
    /// many frames are open and the preceding token can end a template
    /// argument; otherwise keep the shift/relational reading. This is
    /// what turns the trailing `>>` of `vector<vector<int>>` into two
    /// closes while leaving `a >> b` alone.
    fn take_closes(&mut self, rest: &'i str) -> usize {
        let k = rest
            .chars()
            .take_while(|&c| c == '>')
            .count();

        let terminator = match self.previous() {
            Some(token) => match token.kind {
                TokenKind::Word | TokenKind::Punct(')') | TokenKind::Punct(']') => true,
                TokenKind::Op(OpKind::TemplateClose) | TokenKind::Op(OpKind::TemplateOpen) => true,
                TokenKind::Op(OpKind::Glued) => matches!(token.text, "*" | "&"),
                _ => false,
            },
            None => false,
        };

        if terminator
            && self
                .frames
                .len()
                >= k
        {
            for i in 0..k {
                self.frames
                    .pop();
                self.push(TokenKind::Op(OpKind::TemplateClose), &rest[i..i + 1]);
            }
        } else {
            // shift/greater reading; any open frame was a misread
            let mut remaining = k;
            let mut at = 0;
            while remaining >= 2 {
                self.push(TokenKind::Op(OpKind::Binary), &rest[at..at + 2]);
                at += 2;
                remaining -= 2;
            }
            if remaining == 1 {
                self.push(TokenKind::Op(OpKind::Binary), &rest[at..at + 1]);
            }
            self.downgrade();
        }
        k
    }

    /// Single-character operators, with unary detection for the forms
    /// that have both readings.
    fn take_single(&mut self, text: &'i str) {
        let kind = match text {
            "!" | "~" => TokenKind::Op(OpKind::Unary),
            "=" => {
                self.downgrade();
                TokenKind::Op(OpKind::Binary)
            }
            "*" | "&"
                if !self
                    .frames
                    .is_empty() =>
            {
                // pointer/reference declarator inside template arguments,
                // as in vector<Node*>
                TokenKind::Op(OpKind::Glued)
            }
            "+" | "-" | "*" | "&" if self.unary_context() => TokenKind::Op(OpKind::Unary),
            _ => TokenKind::Op(OpKind::Binary),
        };
        self.push(kind, text);
    }

    fn unary_context(&self) -> bool {
        match self.previous() {
            None => true,
            Some(token) => match token.kind {
                TokenKind::Op(OpKind::Binary)
                | TokenKind::Op(OpKind::TemplateOpen)
                | TokenKind::Op(OpKind::Unary) => true,
                TokenKind::Punct('(')
                | TokenKind::Punct('[')
                | TokenKind::Punct('{')
                | TokenKind::Punct(',')
                | TokenKind::Punct(';')
                | TokenKind::Punct(':')
                | TokenKind::Punct('?') => true,
                TokenKind::Word => is_statement_keyword(token.text),
                _ => false,
            },
        }
    }
}
