// Clause locator - splits a SELECT command into its column list, table name
// and optional predicate substring.

use crate::error::{QueryError, QueryResult};

/// The located pieces of one `select ... from ... [where ...]` command.
/// Column and table names are normalized to lower case here, once; the
/// predicate substring is handed to the predicate lexer untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectCommand {
    pub columns: Vec<String>,
    pub table: String,
    pub predicate: Option<String>,
}

impl SelectCommand {
    pub fn parse(command: &str) -> QueryResult<Self> {
        let tokens: Vec<&str> = command.split_whitespace().collect();

        match tokens.first() {
            Some(first) if first.eq_ignore_ascii_case("select") => {}
            _ => return Err(QueryError::NotASelectQuery),
        }

        let from_index = find_keyword(&tokens, "from").ok_or(QueryError::MissingFromClause)?;
        if from_index < 2 {
            return Err(QueryError::NoColumnsSelected);
        }
        if from_index == tokens.len() - 1 {
            return Err(QueryError::MissingTableName);
        }

        let column_part = tokens[1..from_index].join(" ");
        let columns = column_part
            .split(',')
            .map(|piece| piece.trim().to_lowercase())
            .collect();

        let mut table = tokens[from_index + 1].to_lowercase();
        if table.ends_with(';') {
            table.pop();
        }

        let predicate = find_keyword(&tokens, "where").map(|where_index| {
            let mut spec = tokens[where_index + 1..].join(" ");
            if spec.ends_with(';') {
                spec.pop();
            }
            spec
        });

        Ok(Self {
            columns,
            table,
            predicate,
        })
    }
}

/// Case-insensitive whole-token search, first match wins.
fn find_keyword(tokens: &[&str], keyword: &str) -> Option<usize> {
    tokens
        .iter()
        .position(|token| token.eq_ignore_ascii_case(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_select() {
        let command = SelectCommand::parse("select id, first_name from person").unwrap();
        assert_eq!(command.columns, vec!["id", "first_name"]);
        assert_eq!(command.table, "person");
        assert_eq!(command.predicate, None);
    }

    #[test]
    fn test_case_and_semicolon_normalization() {
        let command = SelectCommand::parse("SELECT Id FROM Person;").unwrap();
        assert_eq!(command.columns, vec!["id"]);
        assert_eq!(command.table, "person");
    }

    #[test]
    fn test_where_clause_collected() {
        let command =
            SelectCommand::parse("select id from person where id = 1 and first_name = rodion;")
                .unwrap();
        assert_eq!(
            command.predicate.as_deref(),
            Some("id = 1 and first_name = rodion")
        );
    }

    #[test]
    fn test_semicolon_optional_in_both_positions() {
        let without = SelectCommand::parse("select id from person where id = 1").unwrap();
        assert_eq!(without.predicate.as_deref(), Some("id = 1"));
        assert_eq!(without.table, "person");

        let bare_table = SelectCommand::parse("select id from person").unwrap();
        assert_eq!(bare_table.table, "person");
    }

    #[test]
    fn test_not_a_select_query() {
        assert!(matches!(
            SelectCommand::parse("insert into person"),
            Err(QueryError::NotASelectQuery)
        ));
        assert!(matches!(
            SelectCommand::parse(""),
            Err(QueryError::NotASelectQuery)
        ));
    }

    #[test]
    fn test_missing_from() {
        assert!(matches!(
            SelectCommand::parse("select id, first_name"),
            Err(QueryError::MissingFromClause)
        ));
    }

    #[test]
    fn test_no_columns_selected() {
        assert!(matches!(
            SelectCommand::parse("select from person"),
            Err(QueryError::NoColumnsSelected)
        ));
    }

    #[test]
    fn test_missing_table_name() {
        assert!(matches!(
            SelectCommand::parse("select id from"),
            Err(QueryError::MissingTableName)
        ));
    }

    #[test]
    fn test_column_list_split_on_commas() {
        // Commas glued to names still split correctly.
        let command = SelectCommand::parse("select id,first_name , last_name from person").unwrap();
        assert_eq!(command.columns, vec!["id", "first_name", "last_name"]);
    }
}
