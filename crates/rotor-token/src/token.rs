/// A position in source text, tracking line and column for error reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Span covering `self` through `other`. Line and column stay those of `self`.
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end.max(self.end),
            line: self.line,
            column: self.column,
        }
    }
}

/// Token classification.
///
/// Data-carrying variants embed their value directly (no separate `value` field on Token).
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals (carry data)
    Number(i64),
    Identifier(String),
    String(String),

    /// Operator symbol such as `+`, `<<=` or `&&`.
    Operator(String),
    Keyword(String),
    /// Punctuation like `;`, `(` or `{`.
    Symbol(char),

    // Non-semantic
    Comment(String),
    Newline,
}

impl TokenKind {
    /// Short human-readable name used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Number(n) => format!("number {n}"),
            TokenKind::Identifier(name) => format!("identifier '{name}'"),
            TokenKind::String(s) => format!("string \"{s}\""),
            TokenKind::Operator(op) => format!("operator '{op}'"),
            TokenKind::Keyword(kw) => format!("keyword '{kw}'"),
            TokenKind::Symbol(c) => format!("symbol '{c}'"),
            TokenKind::Comment(_) => "comment".to_string(),
            TokenKind::Newline => "newline".to_string(),
        }
    }
}

/// A token produced by an external lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Comments and newlines carry no meaning for expression parsing.
    pub fn is_discardable(&self) -> bool {
        matches!(self.kind, TokenKind::Comment(_) | TokenKind::Newline)
    }

    /// Whether this token can be turned into a leaf node.
    pub fn is_operand(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Number(_) | TokenKind::Identifier(_) | TokenKind::String(_)
        )
    }

    /// The operator symbol, if this is an operator token.
    pub fn operator(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }
}
