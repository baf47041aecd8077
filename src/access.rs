//! Access layer: typed cells, rows, tables and query result views.

pub mod cell;
pub mod row;
pub mod table;
pub mod view;

pub use cell::{Cell, CellType};
pub use row::Row;
pub use table::{ColumnDescriptor, Table};
pub use view::TableView;
