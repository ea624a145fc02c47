//! Database initialization for the application's SQLite schema.

use rusqlite::Connection;

use crate::{
    Error,
    auth::create_user_table,
    expense::create_expense_table,
    income::create_income_table,
};

/// An alias for row IDs in the application database.
pub type DatabaseId = i64;

/// Create the tables for the domain models if they do not already exist.
///
/// # Errors
///
/// Returns an [Error::SqlError] if any of the table creation queries fail.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_user_table(connection)?;
    create_income_table(connection)?;
    create_expense_table(connection)?;

    Ok(())
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn creates_all_tables() {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");

        initialize(&connection).expect("Could not initialize database");

        let count: i64 = connection
            .query_row(
                "SELECT COUNT(name) FROM sqlite_master WHERE type = 'table' \
                AND name IN ('user', 'income_entry', 'expense_entry')",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(count, 3, "want 3 tables, got {count}");
    }

    #[test]
    fn is_idempotent() {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");

        initialize(&connection).expect("Could not initialize database");
        initialize(&connection).expect("Initializing twice should not fail");
    }
}
