//! Rotor tokens
//!
//! The token contract between an external lexer and `rotor-parser`.
//! Tokens carry their payload in the kind variant and a source span for
//! diagnostics. Comments and newlines are kept in the stream so the lexer
//! stays lossless; the parser filters them out.
//!
//! # Example
//!
//! ```
//! use rotor_token::{Span, Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Number(42), Span::new(0, 2, 1, 1));
//! assert!(token.is_operand());
//! assert!(!token.is_discardable());
//! ```

pub mod token;

pub use token::{Span, Token, TokenKind};
