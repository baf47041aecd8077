//! Comparison operators appearing in predicate tests.

use crate::sql::Token;
use std::cmp::Ordering;

/// The six comparison operators of the predicate grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    pub fn from_token(token: &Token) -> Option<CompareOp> {
        match token {
            Token::Equal => Some(CompareOp::Eq),
            Token::NotEqual => Some(CompareOp::Ne),
            Token::Less => Some(CompareOp::Lt),
            Token::LessEqual => Some(CompareOp::Le),
            Token::Greater => Some(CompareOp::Gt),
            Token::GreaterEqual => Some(CompareOp::Ge),
            _ => None,
        }
    }

    /// Ordering operators are undefined for boolean and binary cells and for
    /// NULL tests.
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            CompareOp::Lt | CompareOp::Le | CompareOp::Gt | CompareOp::Ge
        )
    }

    /// Whether a total-order comparison result satisfies this operator.
    pub fn holds(&self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds() {
        assert!(CompareOp::Eq.holds(Ordering::Equal));
        assert!(!CompareOp::Eq.holds(Ordering::Less));
        assert!(CompareOp::Ne.holds(Ordering::Greater));
        assert!(CompareOp::Lt.holds(Ordering::Less));
        assert!(CompareOp::Le.holds(Ordering::Equal));
        assert!(CompareOp::Gt.holds(Ordering::Greater));
        assert!(CompareOp::Ge.holds(Ordering::Equal));
        assert!(!CompareOp::Ge.holds(Ordering::Less));
    }

    #[test]
    fn test_is_ordering() {
        assert!(!CompareOp::Eq.is_ordering());
        assert!(!CompareOp::Ne.is_ordering());
        assert!(CompareOp::Lt.is_ordering());
        assert!(CompareOp::Ge.is_ordering());
    }

    #[test]
    fn test_from_token() {
        assert_eq!(CompareOp::from_token(&Token::Equal), Some(CompareOp::Eq));
        assert_eq!(CompareOp::from_token(&Token::NotEqual), Some(CompareOp::Ne));
        assert_eq!(CompareOp::from_token(&Token::And), None);
    }
}
