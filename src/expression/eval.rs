//! Predicate evaluation: operand resolution and typed comparison.
//!
//! Each operand of a test is resolved independently against the current row:
//! the `null` keyword is the NULL marker; a bare token naming a column
//! (case-insensitive) is a column reference; anything else is a literal,
//! classified by the fixed priority order i32, i64, f32, f64, boolean,
//! string. Evaluation never mutates the row; it is a pure function of
//! (predicate, row).

use crate::access::{Cell, CellType, ColumnDescriptor, Row};
use crate::error::{QueryError, QueryResult};
use crate::expression::{CompareOp, Operand, Predicate, Test};

static NULL_CELL: Cell = Cell::Null;

/// Evaluates a predicate tree against one row.
pub struct PredicateEvaluator<'a> {
    columns: &'a [ColumnDescriptor],
    row: &'a Row,
}

/// An operand after per-row resolution.
enum Resolved<'a> {
    /// The `null` keyword.
    Null,
    /// A column reference and the row's cell under it.
    Column { cell_type: CellType, cell: &'a Cell },
    /// A bare literal; its type is decided by the other side or by inference.
    Bare(&'a str),
    /// A quoted string literal.
    Text(&'a str),
}

impl<'a> PredicateEvaluator<'a> {
    pub fn new(columns: &'a [ColumnDescriptor], row: &'a Row) -> Self {
        Self { columns, row }
    }

    /// Evaluate the tree. AND/OR short-circuit left-to-right: an error in
    /// the right subtree never surfaces when the left side already decides
    /// the result.
    pub fn matches(&self, predicate: &Predicate) -> QueryResult<bool> {
        match predicate {
            Predicate::And(left, right) => {
                if !self.matches(left)? {
                    return Ok(false);
                }
                self.matches(right)
            }
            Predicate::Or(left, right) => {
                if self.matches(left)? {
                    return Ok(true);
                }
                self.matches(right)
            }
            Predicate::Test(test) => self.eval_test(test),
        }
    }

    fn eval_test(&self, test: &Test) -> QueryResult<bool> {
        let op = test.op;
        let left = self.resolve(&test.left);
        let right = self.resolve(&test.right);

        use Resolved::{Bare, Column, Null, Text};
        match (left, right) {
            (Null, Null) => null_against_null(op),

            (Null, Column { cell, .. }) | (Column { cell, .. }, Null) => {
                null_against_column(op, cell)
            }

            // A NULL can only be tested against a column's nullity.
            (Null, Bare(_) | Text(_)) | (Bare(_) | Text(_), Null) => {
                Err(QueryError::NullComparison(
                    "cannot compare NULL with a literal".to_string(),
                ))
            }

            (
                Column {
                    cell_type: left_type,
                    cell: left_cell,
                },
                Column {
                    cell_type: right_type,
                    cell: right_cell,
                },
            ) => {
                if left_type != right_type {
                    return Err(QueryError::TypeMismatch(format!(
                        "comparing two columns of different types: {} vs {}",
                        left_type, right_type
                    )));
                }
                compare_cells(op, left_cell, right_cell)
            }

            (Column { cell_type, cell }, Bare(token)) => {
                let literal = parse_under(cell_type, token)?;
                compare_cells(op, cell, &literal)
            }
            (Bare(token), Column { cell_type, cell }) => {
                let literal = parse_under(cell_type, token)?;
                compare_cells(op, &literal, cell)
            }

            (Column { cell_type, cell }, Text(text)) => {
                require_string_column(cell_type)?;
                compare_cells(op, cell, &Cell::Utf8String(text.to_string()))
            }
            (Text(text), Column { cell_type, cell }) => {
                require_string_column(cell_type)?;
                compare_cells(op, &Cell::Utf8String(text.to_string()), cell)
            }

            (Bare(left_token), Bare(right_token)) => {
                let left_literal = Cell::infer_literal(left_token);
                let right_literal = Cell::infer_literal(right_token);
                if left_literal.cell_type() != right_literal.cell_type() {
                    return Err(QueryError::TypeMismatch(format!(
                        "literals '{}' and '{}' have different types",
                        left_token, right_token
                    )));
                }
                compare_cells(op, &left_literal, &right_literal)
            }

            (Bare(token), Text(text)) => {
                let literal = require_string_literal(token)?;
                compare_cells(op, &literal, &Cell::Utf8String(text.to_string()))
            }
            (Text(text), Bare(token)) => {
                let literal = require_string_literal(token)?;
                compare_cells(op, &Cell::Utf8String(text.to_string()), &literal)
            }

            (Text(left_text), Text(right_text)) => compare_cells(
                op,
                &Cell::Utf8String(left_text.to_string()),
                &Cell::Utf8String(right_text.to_string()),
            ),
        }
    }

    fn resolve<'b>(&'b self, operand: &'b Operand) -> Resolved<'b> {
        match operand {
            Operand::Null => Resolved::Null,
            Operand::Str(text) => Resolved::Text(text),
            Operand::Raw(token) => {
                match self.columns.iter().position(|column| column.matches(token)) {
                    Some(index) => Resolved::Column {
                        cell_type: self.columns[index].cell_type(),
                        cell: self.row.get(index).unwrap_or(&NULL_CELL),
                    },
                    None => Resolved::Bare(token),
                }
            }
        }
    }
}

fn null_against_null(op: CompareOp) -> QueryResult<bool> {
    if op.is_ordering() {
        return Err(QueryError::NullComparison(format!(
            "cannot compare two nulls with operation '{}'",
            op.as_str()
        )));
    }
    Ok(op == CompareOp::Eq)
}

fn null_against_column(op: CompareOp, cell: &Cell) -> QueryResult<bool> {
    if op.is_ordering() {
        return Err(QueryError::NullComparison(format!(
            "cannot test a column against NULL with operation '{}'",
            op.as_str()
        )));
    }
    if op == CompareOp::Eq {
        Ok(cell.is_null())
    } else {
        Ok(!cell.is_null())
    }
}

/// Parse a bare literal under a column's declared type. A literal that does
/// not parse under the type is a type mismatch at the comparison site.
fn parse_under(cell_type: CellType, token: &str) -> QueryResult<Cell> {
    Cell::parse_as(cell_type, token).map_err(|_| {
        QueryError::TypeMismatch(format!(
            "literal '{}' does not parse as {}",
            token, cell_type
        ))
    })
}

/// A quoted string literal only ever compares against string columns.
fn require_string_column(cell_type: CellType) -> QueryResult<()> {
    if cell_type == CellType::Utf8String {
        Ok(())
    } else {
        Err(QueryError::TypeMismatch(format!(
            "comparing a {} column with a string literal",
            cell_type
        )))
    }
}

/// A bare literal next to a quoted string must itself classify as a string.
fn require_string_literal(token: &str) -> QueryResult<Cell> {
    let literal = Cell::infer_literal(token);
    match literal.cell_type() {
        Some(CellType::Utf8String) => Ok(literal),
        other => Err(QueryError::TypeMismatch(format!(
            "literal '{}' is {}, not a string",
            token,
            other.map_or("null".to_string(), |t| t.to_string())
        ))),
    }
}

/// Execute one comparison between two type-reconciled cells.
///
/// A NULL cell never satisfies a typed comparison: only `!=` holds. Boolean
/// and binary cells define only `=`/`!=`; floats compare with IEEE semantics
/// and bit-value equality; strings order lexicographically by code point.
fn compare_cells(op: CompareOp, left: &Cell, right: &Cell) -> QueryResult<bool> {
    if left.is_null() || right.is_null() {
        return Ok(op == CompareOp::Ne);
    }

    match (left, right) {
        (Cell::Int32(a), Cell::Int32(b)) => Ok(op.holds(a.cmp(b))),
        (Cell::Int64(a), Cell::Int64(b)) => Ok(op.holds(a.cmp(b))),
        (Cell::Float32(a), Cell::Float32(b)) => Ok(compare_ieee(op, a, b)),
        (Cell::Float64(a), Cell::Float64(b)) => Ok(compare_ieee(op, a, b)),
        (Cell::Boolean(a), Cell::Boolean(b)) => match op {
            CompareOp::Eq => Ok(a == b),
            CompareOp::Ne => Ok(a != b),
            _ => Err(QueryError::UndefinedOperation {
                op: op.as_str(),
                cell_type: CellType::Boolean,
            }),
        },
        (Cell::Utf8String(a), Cell::Utf8String(b)) => Ok(op.holds(a.cmp(b))),
        (Cell::Binary(a), Cell::Binary(b)) => match op {
            CompareOp::Eq => Ok(a == b),
            CompareOp::Ne => Ok(a != b),
            _ => Err(QueryError::UndefinedOperation {
                op: op.as_str(),
                cell_type: CellType::Binary,
            }),
        },
        (a, b) => Err(QueryError::TypeMismatch(format!(
            "cannot compare {} with {}",
            a.cell_type().map_or("null".to_string(), |t| t.to_string()),
            b.cell_type().map_or("null".to_string(), |t| t.to_string()),
        ))),
    }
}

fn compare_ieee<T: PartialOrd>(op: CompareOp, a: &T, b: &T) -> bool {
    match op {
        CompareOp::Eq => a == b,
        CompareOp::Ne => a != b,
        CompareOp::Lt => a < b,
        CompareOp::Le => a <= b,
        CompareOp::Gt => a > b,
        CompareOp::Ge => a >= b,
    }
}
