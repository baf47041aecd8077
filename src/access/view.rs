use crate::access::{Cell, ColumnDescriptor};
use std::fmt;

/// The immutable result of one query: the projected column descriptors (in
/// requested order, duplicates preserved) and the selected rows' values, in
/// the source table's append order. A view keeps no reference to the source
/// table beyond the values it copied.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    columns: Vec<ColumnDescriptor>,
    rows: Vec<Vec<Cell>>,
}

impl TableView {
    pub(crate) fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push_row(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TableView {
    /// Render as an aligned text table. NULL cells render as `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|column| column.name().len())
            .collect();
        for row in &rendered {
            for (width, value) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(value.len());
            }
        }

        for (index, column) in self.columns.iter().enumerate() {
            if index > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{:<width$}", column.name(), width = widths[index])?;
        }
        writeln!(f)?;

        let total: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(total))?;

        for row in &rendered {
            for (index, value) in row.iter().enumerate() {
                if index > 0 {
                    write!(f, " | ")?;
                }
                write!(f, "{:<width$}", value, width = widths[index])?;
            }
            writeln!(f)?;
        }

        write!(f, "{} row(s)", self.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::CellType;

    #[test]
    fn test_render_null_as_literal_token() {
        let mut view = TableView::new(vec![
            ColumnDescriptor::new("id", CellType::Int32),
            ColumnDescriptor::new("msg", CellType::Utf8String),
        ]);
        view.push_row(vec![Cell::Int32(1), Cell::Null]);

        let text = view.to_string();
        assert!(text.contains("null"));
        assert!(text.contains("id"));
        assert!(text.contains("1 row(s)"));
    }

    #[test]
    fn test_empty_view() {
        let view = TableView::new(vec![ColumnDescriptor::new("id", CellType::Int32)]);
        assert!(view.is_empty());
        assert!(view.to_string().contains("0 row(s)"));
    }
}
