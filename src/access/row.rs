use crate::access::{Cell, ColumnDescriptor};
use serde::{Deserialize, Serialize};

/// One table row: an ordered sequence of cells, positionally aligned with
/// the owning table's column descriptors. Rows never exist standalone; the
/// table validates arity and types on append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Look up a cell by column name (case-insensitive) against the owning
    /// table's column slice.
    pub fn lookup<'a>(&'a self, columns: &[ColumnDescriptor], name: &str) -> Option<&'a Cell> {
        columns
            .iter()
            .position(|column| column.matches(name))
            .and_then(|index| self.cells.get(index))
    }
}
