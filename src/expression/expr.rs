//! Predicate tree representation.

use crate::expression::CompareOp;

/// One side of a comparison. A `Raw` operand is a bare token whose meaning
/// (column reference or literal, and the literal's type) is resolved per row
/// at evaluation time; a `Str` operand is a quoted string literal and is
/// always Utf8String.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Null,
    Raw(String),
    Str(String),
}

/// A single comparison leaf: `left op right`.
#[derive(Debug, Clone, PartialEq)]
pub struct Test {
    pub left: Operand,
    pub op: CompareOp,
    pub right: Operand,
}

/// Boolean expression tree built from a WHERE clause. Built once per query
/// and discarded after evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
    Test(Test),
}

impl Predicate {
    pub fn and(left: Predicate, right: Predicate) -> Predicate {
        Predicate::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Predicate, right: Predicate) -> Predicate {
        Predicate::Or(Box::new(left), Box::new(right))
    }

    pub fn test(left: Operand, op: CompareOp, right: Operand) -> Predicate {
        Predicate::Test(Test { left, op, right })
    }
}
