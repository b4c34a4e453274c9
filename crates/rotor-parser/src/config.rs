//! Parser configuration.

use crate::precedence::{PrecedenceGroup, OPERATOR_PRECEDENCE};

/// Operator chains longer than this are rejected by default.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings shared by every parse run with a [`crate::Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Precedence groups, tightest binding first.
    pub precedence: &'static [PrecedenceGroup],
    /// Maximum number of operators nested in one expression. Both the
    /// parser and the reorderer recurse once per level.
    pub max_depth: usize,
}

impl ParserConfig {
    pub fn with_precedence(mut self, precedence: &'static [PrecedenceGroup]) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            precedence: &OPERATOR_PRECEDENCE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
