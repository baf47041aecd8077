use crate::error::{QueryError, QueryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive types a table column can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellType {
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    Utf8String,
    Binary,
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::Int32 => "int32",
            CellType::Int64 => "int64",
            CellType::Float32 => "float32",
            CellType::Float64 => "float64",
            CellType::Boolean => "boolean",
            CellType::Utf8String => "string",
            CellType::Binary => "binary",
        };
        write!(f, "{}", name)
    }
}

/// One typed value (or NULL) stored at a row/column intersection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Null,
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Boolean(bool),
    Utf8String(String),
    Binary(Vec<u8>),
}

impl Cell {
    /// The type of this cell's payload, or None for NULL.
    pub fn cell_type(&self) -> Option<CellType> {
        match self {
            Cell::Null => None,
            Cell::Int32(_) => Some(CellType::Int32),
            Cell::Int64(_) => Some(CellType::Int64),
            Cell::Float32(_) => Some(CellType::Float32),
            Cell::Float64(_) => Some(CellType::Float64),
            Cell::Boolean(_) => Some(CellType::Boolean),
            Cell::Utf8String(_) => Some(CellType::Utf8String),
            Cell::Binary(_) => Some(CellType::Binary),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Check if this cell can be stored under a column of the given type.
    /// NULL is compatible with every column type.
    pub fn is_compatible_with(&self, cell_type: CellType) -> bool {
        match self.cell_type() {
            None => true,
            Some(actual) => actual == cell_type,
        }
    }

    /// Parse a bare literal token under a declared column type.
    ///
    /// Integer tokens honor the `0b` (base-2) and `0x` (base-16) prefixes,
    /// case-insensitively. Boolean tokens must be exactly `true` or `false`.
    /// Binary columns have no literal form.
    pub fn parse_as(cell_type: CellType, token: &str) -> QueryResult<Cell> {
        let parsed = match cell_type {
            CellType::Int32 => parse_radix_i32(token).map(Cell::Int32),
            CellType::Int64 => parse_radix_i64(token).map(Cell::Int64),
            CellType::Float32 => token.parse::<f32>().ok().map(Cell::Float32),
            CellType::Float64 => token.parse::<f64>().ok().map(Cell::Float64),
            CellType::Boolean => match token {
                "true" => Some(Cell::Boolean(true)),
                "false" => Some(Cell::Boolean(false)),
                _ => None,
            },
            CellType::Utf8String => Some(Cell::Utf8String(token.to_string())),
            CellType::Binary => None,
        };

        parsed.ok_or_else(|| QueryError::InvalidLiteral {
            token: token.to_string(),
            expected: cell_type,
        })
    }

    /// Classify a bare literal by the fixed priority order:
    /// i32, i64, f32, f64, boolean, then string as the fallback.
    /// The first successful parse wins.
    pub fn infer_literal(token: &str) -> Cell {
        if let Some(value) = parse_radix_i32(token) {
            return Cell::Int32(value);
        }
        if let Some(value) = parse_radix_i64(token) {
            return Cell::Int64(value);
        }
        if let Ok(value) = token.parse::<f32>() {
            return Cell::Float32(value);
        }
        if let Ok(value) = token.parse::<f64>() {
            return Cell::Float64(value);
        }
        match token {
            "true" => Cell::Boolean(true),
            "false" => Cell::Boolean(false),
            _ => Cell::Utf8String(token.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => write!(f, "null"),
            Cell::Int32(value) => write!(f, "{}", value),
            Cell::Int64(value) => write!(f, "{}", value),
            Cell::Float32(value) => write!(f, "{}", value),
            Cell::Float64(value) => write!(f, "{}", value),
            Cell::Boolean(value) => write!(f, "{}", value),
            Cell::Utf8String(value) => write!(f, "{}", value),
            Cell::Binary(bytes) => {
                write!(f, "0x")?;
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

/// Split a `0b`/`0x` prefix off an integer token. The prefix check runs on
/// the token as-is; normalization to lower case happens at tokenization.
fn split_radix(token: &str) -> (&str, u32) {
    if let Some(rest) = token.strip_prefix("0b") {
        (rest, 2)
    } else if let Some(rest) = token.strip_prefix("0x") {
        (rest, 16)
    } else {
        (token, 10)
    }
}

fn parse_radix_i32(token: &str) -> Option<i32> {
    let (digits, radix) = split_radix(token);
    if digits.is_empty() {
        return None;
    }
    i32::from_str_radix(digits, radix).ok()
}

fn parse_radix_i64(token: &str) -> Option<i64> {
    let (digits, radix) = split_radix(token);
    if digits.is_empty() {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}
