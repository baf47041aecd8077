//! The SELECT orchestrator: clause location, projection resolution, row
//! filtering and view construction.

use crate::access::{Cell, ColumnDescriptor, TableView};
use crate::database::Database;
use crate::error::{QueryError, QueryResult};
use crate::expression::{parse_predicate, PredicateEvaluator};
use crate::sql::SelectCommand;

/// Run one `select <cols> from <table> [where <predicate>][;]` command
/// against the database and build the projected result view.
///
/// The call is synchronous and read-only: it fully parses and evaluates
/// before returning, and any evaluation error aborts the whole query with no
/// partial result. Filtering is stable; surviving rows keep the table's
/// append order.
pub fn select(database: &Database, command: &str) -> QueryResult<TableView> {
    let command = SelectCommand::parse(command)?;

    let table = database
        .table(&command.table)
        .ok_or_else(|| QueryError::UnknownTable {
            name: command.table.clone(),
        })?;

    // Resolve the projection; duplicates stay as separate columns in the
    // requested order.
    let mut projection: Vec<usize> = Vec::with_capacity(command.columns.len());
    for name in &command.columns {
        let index = table
            .column_index(name)
            .ok_or_else(|| QueryError::UnknownColumn { name: name.clone() })?;
        projection.push(index);
    }

    let predicate = match &command.predicate {
        Some(spec) => Some(parse_predicate(spec)?),
        None => None,
    };

    let projected_columns: Vec<ColumnDescriptor> = projection
        .iter()
        .map(|&index| table.columns()[index].clone())
        .collect();
    let mut view = TableView::new(projected_columns);

    for row in table.rows() {
        let selected = match &predicate {
            None => true,
            Some(predicate) => {
                PredicateEvaluator::new(table.columns(), row).matches(predicate)?
            }
        };

        if selected {
            view.push_row(
                projection
                    .iter()
                    .map(|&index| row.get(index).cloned().unwrap_or(Cell::Null))
                    .collect(),
            );
        }
    }

    log::debug!(
        "select on '{}': {} of {} rows matched",
        command.table,
        view.row_count(),
        table.row_count()
    );

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{Cell, CellType};

    fn database() -> Database {
        let mut db = Database::new("test_db");
        let person = db
            .create_table(
                "person",
                vec![
                    ColumnDescriptor::new("id", CellType::Int32),
                    ColumnDescriptor::new("first_name", CellType::Utf8String),
                    ColumnDescriptor::new("last_name", CellType::Utf8String),
                ],
            )
            .unwrap();
        person
            .append_row(vec![
                Cell::Int32(1),
                Cell::Utf8String("rodion".to_string()),
                Cell::Utf8String("efremov".to_string()),
            ])
            .unwrap();
        person
            .append_row(vec![
                Cell::Int32(2),
                Cell::Utf8String("violetta".to_string()),
                Cell::Utf8String("ervasti".to_string()),
            ])
            .unwrap();
        db
    }

    #[test]
    fn test_unknown_table() {
        let db = database();
        assert!(matches!(
            select(&db, "select id from nobody"),
            Err(QueryError::UnknownTable { .. })
        ));
    }

    #[test]
    fn test_unknown_column_names_the_offender() {
        let db = database();
        match select(&db, "select id, age from person") {
            Err(QueryError::UnknownColumn { name }) => assert_eq!(name, "age"),
            other => panic!("expected UnknownColumn, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_projection_order_and_duplicates() {
        let db = database();
        let view = select(&db, "select first_name, id, id from person").unwrap();
        let names: Vec<&str> = view.columns().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["first_name", "id", "id"]);
        assert_eq!(
            view.rows()[0],
            vec![
                Cell::Utf8String("rodion".to_string()),
                Cell::Int32(1),
                Cell::Int32(1),
            ]
        );
    }

    #[test]
    fn test_no_where_selects_every_row() {
        let db = database();
        let view = select(&db, "select id from person").unwrap();
        assert_eq!(view.row_count(), 2);
    }

    #[test]
    fn test_evaluation_error_aborts_whole_query() {
        let db = database();
        // The first row would match before the second row's comparison runs;
        // the error still wipes the whole result.
        assert!(matches!(
            select(&db, "select id from person where id = 1 or id = 'x'"),
            Err(QueryError::TypeMismatch(_))
        ));
    }
}
