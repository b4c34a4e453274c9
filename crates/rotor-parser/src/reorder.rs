//! Precedence reordering of right-skewed expression trees.
//!
//! The expression parser always folds the whole remainder of an expression
//! into the right operand, so `4 * 5 + 6` comes out as `*(4, +(5, 6))`.
//! [`reorder`] fixes such trees by left-rotating every node whose operator
//! has priority over its right child's operator:
//!
//! ```text
//!     P                Q
//!    / \              / \
//!   L   Q     =>     P   RR
//!      / \          / \
//!     RL  RR       L   RL
//! ```
//!
//! The left child is never inspected. Operands on the left are always
//! finalized before they are combined.

use std::mem;

use crate::ast::{BinaryExpr, Node, NodeFlags, NodeKind};
use crate::precedence::{left_op_has_priority, PrecedenceGroup, UnknownOperator};

/// Normalize `node` in place against `table`, returning how many rotations
/// were applied. A tree that is already normalized is left untouched.
pub fn reorder(node: &mut Node, table: &[PrecedenceGroup]) -> Result<usize, UnknownOperator> {
    let Some(exp) = node.as_expression() else {
        return Ok(0);
    };
    let Some(right_op) = exp.right.op() else {
        return Ok(0);
    };

    let has_priority = left_op_has_priority(table, &exp.op, right_op)?;
    log::trace!("'{}' over '{}': priority = {has_priority}", exp.op, right_op);
    if !has_priority {
        return Ok(0);
    }

    log::debug!("rotating {} at {}:{}", node, node.span.line, node.span.column);
    shift_children_left(node);

    let mut rotations = 1;
    if let Some(exp) = node.as_expression_mut() {
        rotations += reorder(&mut exp.left, table)?;
        rotations += reorder(&mut exp.right, table)?;
    }
    Ok(rotations)
}

/// Rotate `P(L, Q(RL, RR))` into `Q(P(L, RL), RR)`.
///
/// `node` keeps its span and flags. Nodes that are not an expression with
/// an expression on the right are left as they are.
fn shift_children_left(node: &mut Node) {
    let kind = mem::replace(&mut node.kind, NodeKind::Number(0));

    node.kind = match kind {
        NodeKind::Expression(BinaryExpr { op, left, right }) => match *right {
            Node {
                kind: NodeKind::Expression(inner),
                ..
            } => {
                let mut new_left = Node::expression(*left, *inner.left, op);
                new_left.mark(NodeFlags::INSIDE_EXPRESSION);
                NodeKind::Expression(BinaryExpr {
                    op: inner.op,
                    left: Box::new(new_left),
                    right: inner.right,
                })
            }
            right => NodeKind::Expression(BinaryExpr {
                op,
                left,
                right: Box::new(right),
            }),
        },
        other => other,
    };
}
