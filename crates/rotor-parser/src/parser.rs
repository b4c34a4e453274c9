//! Expression parser and top-level driver.
//!
//! A top-level unit is a maximal run of alternating operand and operator
//! tokens. Every operator recursively parses the *entire* remainder of the
//! unit as its right operand, so the raw tree leans right; each combined
//! node is handed to [`reorder`] before it is returned, which restores the
//! precedence table's shape bottom-up.

use rotor_token::{Span, Token};

use crate::ast::{Node, NodeFlags};
use crate::config::ParserConfig;
use crate::cursor::TokenCursor;
use crate::precedence::lookup;
use crate::reorder::reorder;
use crate::{ParseError, ParseErrorKind};

/// Context copied into every recursive parse call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct History {
    /// Flags given to leaves created at this level.
    flags: NodeFlags,
    /// Operators enclosing this level.
    depth: usize,
}

impl History {
    fn begin(flags: NodeFlags) -> Self {
        Self { flags, depth: 0 }
    }

    fn down(self, flags: NodeFlags) -> Self {
        Self {
            flags,
            depth: self.depth + 1,
        }
    }
}

/// Outcome of one expression step.
enum Step {
    /// A node was produced and becomes the pending left operand.
    Continue(Node),
    /// The unit is complete.
    Done(Option<Node>),
}

/// Expression parser over a borrowed token stream.
///
/// All state for one parse lives here, so independent parsers never
/// interfere with each other.
pub struct Parser<'a> {
    cursor: TokenCursor<'a>,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default configuration.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: &'a [Token], config: ParserConfig) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            config,
        }
    }

    /// Parse every top-level expression in `tokens`.
    pub fn parse(tokens: &[Token]) -> Result<Vec<Node>, ParseError> {
        Parser::new(tokens).parse_roots()
    }

    /// Parse top-level expressions until the input is exhausted or a token
    /// that cannot start an expression is reached.
    ///
    /// Stopping early is not an error; use [`Parser::is_at_end`] to require
    /// that the whole stream was consumed.
    pub fn parse_roots(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut roots = Vec::new();

        while let Some(root) = self.parse_next()? {
            log::debug!("parsed root {root}");
            roots.push(root);
        }

        Ok(roots)
    }

    /// Parse the next top-level expression, if the next token can start one.
    pub fn parse_next(&mut self) -> Result<Option<Node>, ParseError> {
        match self.cursor.peek() {
            Some(token) if token.is_operand() => {
                self.parse_expressionable(History::begin(NodeFlags::NONE))
            }
            _ => Ok(None),
        }
    }

    /// True when only comments and newlines remain.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Span of the last consumed token.
    pub fn position(&self) -> Span {
        self.cursor.position()
    }

    pub fn last_token(&self) -> Option<&'a Token> {
        self.cursor.last_token()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn parse_expressionable(&mut self, history: History) -> Result<Option<Node>, ParseError> {
        let mut pending = None;

        loop {
            match self.parse_expressionable_single(history, pending)? {
                Step::Continue(node) => pending = Some(node),
                Step::Done(node) => return Ok(node),
            }
        }
    }

    fn parse_expressionable_single(
        &mut self,
        history: History,
        pending: Option<Node>,
    ) -> Result<Step, ParseError> {
        let Some(token) = self.cursor.peek() else {
            return Ok(Step::Done(pending));
        };

        match pending {
            None if token.is_operand() => {
                let node = self.parse_single_token_to_node(history)?;
                Ok(Step::Continue(node))
            }
            Some(left) => match token.operator() {
                Some(op) => {
                    let node = self.parse_exp(history, left, op, token.span)?;
                    Ok(Step::Continue(node))
                }
                // An operand right after a finished operand starts the next unit.
                None => Ok(Step::Done(Some(left))),
            },
            // Operators with no left operand end the unit quietly.
            None => Ok(Step::Done(None)),
        }
    }

    fn parse_single_token_to_node(&mut self, history: History) -> Result<Node, ParseError> {
        let Some(token) = self.cursor.next() else {
            return Err(self.error(ParseErrorKind::UnconvertibleToken(
                "end of input".to_string(),
            )));
        };

        let mut node = Node::from_token(token)?;
        node.mark(history.flags);
        Ok(node)
    }

    /// Parse `left op <rest>` where `op` is the next token.
    fn parse_exp(
        &mut self,
        history: History,
        mut left: Node,
        op: &str,
        op_span: Span,
    ) -> Result<Node, ParseError> {
        self.cursor.next(); // consume operator

        lookup(self.config.precedence, op).map_err(|e| ParseError::at(op_span, e.into()))?;
        if history.depth >= self.config.max_depth {
            return Err(ParseError::at(
                op_span,
                ParseErrorKind::NestingTooDeep(self.config.max_depth),
            ));
        }

        left.mark(NodeFlags::INSIDE_EXPRESSION);

        let inner = history.down(history.flags | NodeFlags::INSIDE_EXPRESSION);
        let Some(mut right) = self.parse_expressionable(inner)? else {
            return Err(ParseError::at(
                op_span,
                ParseErrorKind::MissingRightOperand(op.to_string()),
            ));
        };
        right.mark(NodeFlags::INSIDE_EXPRESSION);

        let mut exp = Node::expression(left, right, op);
        reorder(&mut exp, self.config.precedence)
            .map_err(|e| ParseError::at(op_span, e.into()))?;

        Ok(exp)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::at(self.cursor.position(), kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use pretty_assertions::assert_eq;
    use rotor_token::TokenKind;

    /// Tokens for a whitespace-separated source, one column per character.
    fn tokens(source: &str) -> Vec<Token> {
        let mut out = Vec::new();
        let mut offset = 0;
        for word in source.split(' ') {
            if !word.is_empty() {
                let kind = if let Ok(n) = word.parse() {
                    TokenKind::Number(n)
                } else if word.chars().all(|c| c.is_alphanumeric() || c == '_') {
                    TokenKind::Identifier(word.to_string())
                } else if word == ";" {
                    TokenKind::Symbol(';')
                } else {
                    TokenKind::Operator(word.to_string())
                };
                let span = Span::new(offset, offset + word.len(), 1, offset + 1);
                out.push(Token::new(kind, span));
            }
            offset += word.len() + 1;
        }
        out
    }

    fn parse(source: &str) -> Vec<Node> {
        Parser::parse(&tokens(source)).unwrap()
    }

    fn parse_one(source: &str) -> String {
        let roots = parse(source);
        assert_eq!(roots.len(), 1, "expected one root for {source:?}");
        roots[0].to_string()
    }

    fn parse_err(source: &str) -> ParseError {
        Parser::parse(&tokens(source)).unwrap_err()
    }

    // --- Precedence ---

    #[test]
    fn test_looser_first() {
        assert_eq!(parse_one("1 + 2 * 3"), "+(1, *(2, 3))");
    }

    #[test]
    fn test_tighter_first() {
        assert_eq!(parse_one("4 * 5 + 6"), "+(*(4, 5), 6)");
    }

    #[test]
    fn test_mixed_chain() {
        assert_eq!(parse_one("1 + 2 + 3 * 4"), "+(+(1, 2), *(3, 4))");
    }

    #[test]
    fn test_products_around_sum() {
        assert_eq!(parse_one("a * b + c * d"), "+(*(a, b), *(c, d))");
    }

    #[test]
    fn test_left_assoc_chain() {
        assert_eq!(parse_one("a - b - c - d"), "-(-(-(a, b), c), d)");
    }

    #[test]
    fn test_right_assoc_chain() {
        assert_eq!(parse_one("a = b = c"), "=(a, =(b, c))");
    }

    #[test]
    fn test_assignment_of_sum() {
        assert_eq!(parse_one("x = y + 1"), "=(x, +(y, 1))");
    }

    #[test]
    fn test_comparison_of_shifts() {
        assert_eq!(parse_one("a << 1 < b >> 2"), "<(<<(a, 1), >>(b, 2))");
    }

    #[test]
    fn test_logical_chain() {
        assert_eq!(
            parse_one("a == 1 && b != 2 || c"),
            "||(&&(==(a, 1), !=(b, 2)), c)"
        );
    }

    // --- Leaves and units ---

    #[test]
    fn test_single_leaf() {
        let roots = parse("42");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].kind, NodeKind::Number(42));
        assert_eq!(roots[0].flags, NodeFlags::NONE);
    }

    #[test]
    fn test_independent_units() {
        let roots = parse("1 2 + 3");
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].to_string(), "1");
        assert_eq!(roots[1].to_string(), "+(2, 3)");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), vec![]);
    }

    #[test]
    fn test_stops_at_symbol() {
        let toks = tokens("1 + 2 ; 3");
        let mut parser = Parser::new(&toks);
        let roots = parser.parse_roots().unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].to_string(), "+(1, 2)");
        assert!(!parser.is_at_end());
    }

    #[test]
    fn test_leading_operator_yields_nothing() {
        let toks = tokens("+ 1");
        let mut parser = Parser::new(&toks);
        assert_eq!(parser.parse_roots().unwrap(), vec![]);
        assert!(!parser.is_at_end());
    }

    // --- Flags ---

    #[test]
    fn test_operands_are_marked() {
        let root = &parse("1 + 2")[0];
        assert!(!root.flags.contains(NodeFlags::INSIDE_EXPRESSION));
        let exp = root.as_expression().unwrap();
        assert!(exp.left.flags.contains(NodeFlags::INSIDE_EXPRESSION));
        assert!(exp.right.flags.contains(NodeFlags::INSIDE_EXPRESSION));
    }

    // --- Errors ---

    #[test]
    fn test_unknown_operator() {
        let err = parse_err("1 <=> 2");
        assert_eq!(
            err.kind,
            ParseErrorKind::UnknownOperator(crate::UnknownOperator("<=>".into()))
        );
        assert_eq!((err.line, err.column), (1, 3));
    }

    #[test]
    fn test_missing_right_operand() {
        let err = parse_err("1 +");
        assert_eq!(err.kind, ParseErrorKind::MissingRightOperand("+".into()));
        assert_eq!(err.column, 3);
    }

    #[test]
    fn test_operator_after_operator() {
        let err = parse_err("1 + * 2");
        assert_eq!(err.kind, ParseErrorKind::MissingRightOperand("+".into()));
    }

    #[test]
    fn test_nesting_limit() {
        let toks = tokens("1 + 2 + 3 + 4");
        let config = ParserConfig::default().with_max_depth(2);
        let err = Parser::with_config(&toks, config).parse_roots().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep(2));
        assert_eq!(err.column, 11);

        let toks = tokens("1 + 2 + 3");
        let roots = Parser::with_config(&toks, config).parse_roots().unwrap();
        assert_eq!(roots[0].to_string(), "+(+(1, 2), 3)");
    }

    #[test]
    fn test_position_tracking() {
        let toks = tokens("1 + 2");
        let mut parser = Parser::new(&toks);
        parser.parse_roots().unwrap();
        assert_eq!(parser.position(), Span::new(4, 5, 1, 5));
        assert_eq!(
            parser.last_token().map(|t| &t.kind),
            Some(&TokenKind::Number(2))
        );
    }
}
