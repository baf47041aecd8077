use crate::access::{Cell, CellType, Row};
use crate::error::{QueryError, QueryResult};
use serde::{Deserialize, Serialize};

/// A column's name and declared type. Names are stored lower-cased; lookups
/// are case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    name: String,
    cell_type: CellType,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, cell_type: CellType) -> Self {
        Self {
            name: name.into().to_lowercase(),
            cell_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// An in-memory table: a name, an ordered column sequence and append-ordered
/// rows. Rows are append-only; iteration yields them in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    name: String,
    columns: Vec<ColumnDescriptor>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table. Column names must be unique (case-insensitive).
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> QueryResult<Self> {
        for (index, column) in columns.iter().enumerate() {
            if columns[..index].iter().any(|c| c.matches(column.name())) {
                return Err(QueryError::SchemaViolation(format!(
                    "duplicate column name '{}'",
                    column.name()
                )));
            }
        }

        Ok(Self {
            name: name.into().to_lowercase(),
            columns,
            rows: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.matches(name))
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.matches(name))
    }

    /// Append a row. The cell sequence must match the column sequence in
    /// arity, and each non-null cell must match its column's declared type.
    pub fn append_row(&mut self, cells: Vec<Cell>) -> QueryResult<()> {
        if cells.len() != self.columns.len() {
            return Err(QueryError::SchemaViolation(format!(
                "table '{}' has {} columns, row has {} cells",
                self.name,
                self.columns.len(),
                cells.len()
            )));
        }

        for (cell, column) in cells.iter().zip(self.columns.iter()) {
            if !cell.is_compatible_with(column.cell_type()) {
                return Err(QueryError::SchemaViolation(format!(
                    "column '{}' is {}, got a {} cell",
                    column.name(),
                    column.cell_type(),
                    cell.cell_type().map_or("null".to_string(), |t| t.to_string())
                )));
            }
        }

        self.rows.push(Row::new(cells));
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
