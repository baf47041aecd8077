use crate::access::{ColumnDescriptor, Table};
use crate::error::{QueryError, QueryResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// The database container: a named, ordered set of tables. Passed explicitly
/// into the query function; there is no process-wide singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    name: String,
    tables: Vec<Table>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a table. Table names are case-insensitive and unique.
    pub fn create_table(
        &mut self,
        name: impl Into<String>,
        columns: Vec<ColumnDescriptor>,
    ) -> QueryResult<&mut Table> {
        let table = Table::new(name, columns)?;
        if self.table(table.name()).is_some() {
            return Err(QueryError::SchemaViolation(format!(
                "table '{}' already exists",
                table.name()
            )));
        }
        self.tables.push(table);
        let index = self.tables.len() - 1;
        Ok(&mut self.tables[index])
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|table| table.name().eq_ignore_ascii_case(name))
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables
            .iter_mut()
            .find(|table| table.name().eq_ignore_ascii_case(name))
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Persist the whole container to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> QueryResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        bincode::serialize_into(BufWriter::new(file), self)?;
        log::info!("saved database '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Load a previously saved container.
    pub fn load(path: impl AsRef<Path>) -> QueryResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let database: Database = bincode::deserialize_from(BufReader::new(file))?;
        log::info!(
            "loaded database '{}' ({} tables) from {}",
            database.name,
            database.tables.len(),
            path.display()
        );
        Ok(database)
    }
}
