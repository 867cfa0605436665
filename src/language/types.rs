//! Types shared between the scanner, classifier, spacing engine, and the
//! document extraction layer.

/// One contiguous slice of a scanned line.
///
/// The invariant the scanner maintains is that concatenating the texts of
/// the spans produced for a line reproduces that line byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'i> {
    pub kind: SpanKind,
    pub text: &'i str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Identifier or numeric literal, including suffixes such as `1ULL`.
    Word,
    /// Double-quoted string literal, escapes included, verbatim.
    Str,
    /// Single-quoted character literal, verbatim.
    Char,
    /// `//` to end of line, verbatim.
    LineComment,
    /// `/* ... */`, possibly continued from or onto another line.
    BlockComment,
    /// Maximal run of operator characters.
    Operator,
    /// Single punctuation character: brackets, comma, semicolon, and
    /// anything the scanner does not otherwise recognize.
    Punct,
    Whitespace,
}

/// A span with its role resolved. Operator runs have been split into
/// individual operators with their `<` and `>` readings settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'i> {
    pub kind: TokenKind,
    pub text: &'i str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    /// String or character literal; passes through the spacing engine
    /// untouched.
    Literal,
    /// Line or block comment; also passes through untouched.
    Comment,
    Whitespace,
    Punct(char),
    Op(OpKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// `<` opening a template parameter list.
    TemplateOpen,
    /// `>` closing a template parameter list.
    TemplateClose,
    /// Padded with one space on both sides.
    Binary,
    /// Attached to its operand; no space between it and what follows.
    Unary,
    /// Operators that never take padding: `->`, `++`, `--`.
    Glued,
}

impl<'i> Token<'i> {
    pub fn is_significant(&self) -> bool {
        !matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// Keywords that take a space before their opening parenthesis.
pub fn is_control_keyword(word: &str) -> bool {
    matches!(word, "if" | "for" | "while" | "switch")
}

/// Keywords after which an operator is in unary position, `return -1`
/// being the usual case.
pub fn is_statement_keyword(word: &str) -> bool {
    matches!(word, "return" | "case" | "else" | "goto" | "throw")
}

/// One embedded code region pulled out of a host document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'i> {
    /// The language tag carried by the begin marker, e.g. `cpp`.
    pub language: &'i str,
    /// The region body: the lines between the markers, verbatim,
    /// trailing newline included.
    pub body: &'i str,
    /// Position in the extraction order, also the placeholder index.
    pub index: usize,
}

/// The result of pulling all fenced regions out of a document. Owns the
/// fragment list for the duration of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'i> {
    /// The host document with each region replaced by a placeholder.
    pub template: String,
    pub fragments: Vec<Fragment<'i>>,
    /// Byte offset of a begin marker that never found its end marker. The
    /// unterminated region and everything after it are left in `template`
    /// untouched; this is surfaced so callers can warn about it.
    pub unterminated: Option<usize>,
}
