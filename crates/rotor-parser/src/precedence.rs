//! Operator precedence table.
//!
//! Groups are ordered from tightest to loosest binding: the index of a
//! group in the table is its rank, and a lower rank binds tighter.

/// Evaluation order for operators of the same precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    LeftToRight,
    RightToLeft,
}

/// A set of operators sharing one precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecedenceGroup {
    pub associativity: Associativity,
    pub operators: &'static [&'static str],
}

impl PrecedenceGroup {
    pub const fn new(associativity: Associativity, operators: &'static [&'static str]) -> Self {
        Self {
            associativity,
            operators,
        }
    }

    pub fn contains(&self, op: &str) -> bool {
        self.operators.iter().any(|candidate| *candidate == op)
    }
}

/// An operator symbol with no entry in the precedence table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no precedence defined for operator '{0}'")]
pub struct UnknownOperator(pub String);

use Associativity::{LeftToRight, RightToLeft};

/// C-like precedence table used by default.
pub static OPERATOR_PRECEDENCE: [PrecedenceGroup; 14] = [
    PrecedenceGroup::new(LeftToRight, &["++", "--", "()", "[]", "(", "[", ".", "->"]),
    PrecedenceGroup::new(LeftToRight, &["*", "/", "%"]),
    PrecedenceGroup::new(LeftToRight, &["+", "-"]),
    PrecedenceGroup::new(LeftToRight, &["<<", ">>"]),
    PrecedenceGroup::new(LeftToRight, &["<", "<=", ">", ">="]),
    PrecedenceGroup::new(LeftToRight, &["==", "!="]),
    PrecedenceGroup::new(LeftToRight, &["&"]),
    PrecedenceGroup::new(LeftToRight, &["^"]),
    PrecedenceGroup::new(LeftToRight, &["|"]),
    PrecedenceGroup::new(LeftToRight, &["&&"]),
    PrecedenceGroup::new(LeftToRight, &["||"]),
    PrecedenceGroup::new(RightToLeft, &["?", ":"]),
    PrecedenceGroup::new(
        RightToLeft,
        &["=", "+=", "-=", "*=", "/=", "%=", "<<=", ">>=", "&=", "^=", "|="],
    ),
    PrecedenceGroup::new(LeftToRight, &[","]),
];

/// Find the rank and group of `op`.
pub fn lookup<'t>(
    table: &'t [PrecedenceGroup],
    op: &str,
) -> Result<(usize, &'t PrecedenceGroup), UnknownOperator> {
    table
        .iter()
        .enumerate()
        .find(|(_, group)| group.contains(op))
        .ok_or_else(|| UnknownOperator(op.to_string()))
}

/// Whether `left` must bind before `right` when `right` sits in the right
/// subtree of `left`.
///
/// A right-to-left `left` never has priority. Otherwise `left` has priority
/// when its rank is not looser than `right`'s, which includes `left == right`.
pub fn left_op_has_priority(
    table: &[PrecedenceGroup],
    left: &str,
    right: &str,
) -> Result<bool, UnknownOperator> {
    let (left_rank, left_group) = lookup(table, left)?;
    let (right_rank, _) = lookup(table, right)?;

    if left_group.associativity == RightToLeft {
        return Ok(false);
    }
    if left == right {
        return Ok(true);
    }

    Ok(left_rank <= right_rank)
}
