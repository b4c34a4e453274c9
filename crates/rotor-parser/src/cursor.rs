//! Read-only cursor over a lexer's token stream.
//!
//! Comments and newlines are skipped transparently before every look at
//! the stream, so the parser only ever sees semantic tokens.

use rotor_token::{Span, Token};

/// Sequential access over borrowed tokens with one token of lookahead.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    position: Span,
    last: Option<&'a Token>,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            position: Span::default(),
            last: None,
        }
    }

    /// The next semantic token, without consuming it.
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.skip_discardable();
        self.tokens.get(self.pos)
    }

    /// Consume and return the next semantic token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a Token> {
        self.skip_discardable();
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        self.position = token.span;
        self.last = Some(token);
        log::trace!(
            "consumed {} at {}:{}",
            token.kind.describe(),
            token.span.line,
            token.span.column
        );
        Some(token)
    }

    /// Span of the most recently consumed token.
    pub fn position(&self) -> Span {
        self.position
    }

    pub fn last_token(&self) -> Option<&'a Token> {
        self.last
    }

    /// True when only comments and newlines remain.
    pub fn is_at_end(&self) -> bool {
        self.tokens[self.pos..].iter().all(Token::is_discardable)
    }

    fn skip_discardable(&mut self) {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(Token::is_discardable)
        {
            self.pos += 1;
        }
    }
}
