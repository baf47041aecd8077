//! Query error types.

use crate::access::CellType;
use thiserror::Error;

/// Errors that can occur while parsing or evaluating a query, or at the
/// storage boundary. Every failure aborts the whole query; partial results
/// are never returned.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("not a select query")]
    NotASelectQuery,

    #[error("no 'from' keyword in the query")]
    MissingFromClause,

    #[error("no columns selected")]
    NoColumnsSelected,

    #[error("no table name")]
    MissingTableName,

    #[error("{name}: no such table")]
    UnknownTable { name: String },

    #[error("{name}: no such table column")]
    UnknownColumn { name: String },

    #[error("bad parenthesis structure")]
    UnbalancedParentheses,

    #[error("predicate syntax error: {0}")]
    PredicateSyntax(String),

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("operation '{op}' is not defined for {cell_type} values")]
    UndefinedOperation {
        op: &'static str,
        cell_type: CellType,
    },

    #[error("'{token}' is not a valid {expected} literal")]
    InvalidLiteral { token: String, expected: CellType },

    #[error("null comparison error: {0}")]
    NullComparison(String),

    #[error("schema violation: {0}")]
    SchemaViolation(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("storage encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
