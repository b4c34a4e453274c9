//! Expression tree produced by the parser.
//!
//! Leaves come straight from operand tokens; interior nodes are binary
//! expressions that exclusively own both operands. Tree shape only changes
//! through [`crate::reorder`], which relinks boxes and never clones a node.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use rotor_token::{Span, Token, TokenKind};

use crate::{ParseError, ParseErrorKind};

/// Bitset of per-node markers for downstream consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeFlags(u32);

impl NodeFlags {
    pub const NONE: NodeFlags = NodeFlags(0);
    /// The node has become an operand of a larger expression.
    pub const INSIDE_EXPRESSION: NodeFlags = NodeFlags(0b1);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: NodeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: NodeFlags) {
        self.0 |= other.0;
    }
}

impl BitOr for NodeFlags {
    type Output = NodeFlags;

    fn bitor(self, rhs: NodeFlags) -> NodeFlags {
        NodeFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for NodeFlags {
    fn bitor_assign(&mut self, rhs: NodeFlags) {
        self.insert(rhs);
    }
}

/// A node in the expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    pub kind: NodeKind,
    pub flags: NodeFlags,
    pub span: Span,
}

/// Node classification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeKind {
    Number(i64),
    Identifier(String),
    String(String),
    Expression(BinaryExpr),
}

/// A binary expression. Both operands are always present.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinaryExpr {
    pub op: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

impl Node {
    /// Convert a single operand token into a leaf.
    pub fn from_token(token: &Token) -> Result<Node, ParseError> {
        let kind = match &token.kind {
            TokenKind::Number(n) => NodeKind::Number(*n),
            TokenKind::Identifier(name) => NodeKind::Identifier(name.clone()),
            TokenKind::String(s) => NodeKind::String(s.clone()),
            other => {
                return Err(ParseError::at(
                    token.span,
                    ParseErrorKind::UnconvertibleToken(other.describe()),
                ))
            }
        };

        Ok(Node {
            kind,
            flags: NodeFlags::NONE,
            span: token.span,
        })
    }

    /// Combine two operands under `op`.
    pub fn expression(left: Node, right: Node, op: impl Into<String>) -> Node {
        let span = left.span.to(right.span);
        Node {
            kind: NodeKind::Expression(BinaryExpr {
                op: op.into(),
                left: Box::new(left),
                right: Box::new(right),
            }),
            flags: NodeFlags::NONE,
            span,
        }
    }

    pub fn as_expression(&self) -> Option<&BinaryExpr> {
        match &self.kind {
            NodeKind::Expression(exp) => Some(exp),
            _ => None,
        }
    }

    pub fn as_expression_mut(&mut self) -> Option<&mut BinaryExpr> {
        match &mut self.kind {
            NodeKind::Expression(exp) => Some(exp),
            _ => None,
        }
    }

    /// Operator of an expression node.
    pub fn op(&self) -> Option<&str> {
        self.as_expression().map(|exp| exp.op.as_str())
    }

    pub fn is_expression(&self) -> bool {
        matches!(self.kind, NodeKind::Expression(_))
    }

    pub fn mark(&mut self, flags: NodeFlags) {
        self.flags |= flags;
    }
}

/// Compact prefix form: `+(*(4, 5), 6)`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Number(n) => write!(f, "{n}"),
            NodeKind::Identifier(name) => write!(f, "{name}"),
            NodeKind::String(s) => write!(f, "{s:?}"),
            NodeKind::Expression(exp) => write!(f, "{}({}, {})", exp.op, exp.left, exp.right),
        }
    }
}
