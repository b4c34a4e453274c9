//! Rotor Parser
//!
//! Turns a token stream into binary expression trees in two phases. The
//! expression parser reads left to right and always folds the rest of the
//! expression into the right operand, which yields right-skewed trees.
//! Each freshly built node is then passed to the reorderer, which rotates
//! subtrees until they agree with the operator precedence table.
//!
//! # Example
//!
//! ```
//! use rotor_parser::Parser;
//! use rotor_token::{Span, Token, TokenKind};
//!
//! let tokens = vec![
//!     Token::new(TokenKind::Number(4), Span::new(0, 1, 1, 1)),
//!     Token::new(TokenKind::Operator("*".into()), Span::new(2, 3, 1, 3)),
//!     Token::new(TokenKind::Number(5), Span::new(4, 5, 1, 5)),
//!     Token::new(TokenKind::Operator("+".into()), Span::new(6, 7, 1, 7)),
//!     Token::new(TokenKind::Number(6), Span::new(8, 9, 1, 9)),
//! ];
//!
//! let roots = Parser::parse(&tokens).unwrap();
//! assert_eq!(roots.len(), 1);
//! assert_eq!(roots[0].to_string(), "+(*(4, 5), 6)");
//! ```

pub mod ast;
pub mod config;
pub mod cursor;
pub mod parser;
pub mod precedence;
pub mod reorder;

pub use ast::{BinaryExpr, Node, NodeFlags, NodeKind};
pub use config::ParserConfig;
pub use parser::Parser;
pub use precedence::{Associativity, PrecedenceGroup, UnknownOperator, OPERATOR_PRECEDENCE};
pub use reorder::reorder;

use rotor_token::Span;

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at line {line}, column {column}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn at(span: Span, kind: ParseErrorKind) -> Self {
        Self {
            kind,
            line: span.line,
            column: span.column,
        }
    }
}

/// Conditions that abort a parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("{0} cannot be converted to a node")]
    UnconvertibleToken(String),

    #[error(transparent)]
    UnknownOperator(#[from] UnknownOperator),

    #[error("operator '{0}' has no right operand")]
    MissingRightOperand(String),

    #[error("expression nesting exceeds the limit of {0}")]
    NestingTooDeep(usize),
}
