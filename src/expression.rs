//! Predicate expression framework for query evaluation.
//!
//! This module provides:
//! - The predicate tree representation (AND/OR/Test)
//! - A parenthesis-aware recursive-descent parser
//! - Per-row operand resolution and typed comparison evaluation

pub mod eval;
pub mod expr;
pub mod operator;
pub mod parser;

pub use eval::PredicateEvaluator;
pub use expr::{Operand, Predicate, Test};
pub use operator::CompareOp;
pub use parser::{check_parentheses, parse_predicate, PredicateParser};
