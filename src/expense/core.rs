use std::fmt;

use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, db::DatabaseId, income::week_of_month};

/// How an expense was paid for.
///
/// Only cash expenses reduce the physical money held in the cash box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Money spent on a given date.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseEntry {
    /// The id for the expense entry.
    pub id: DatabaseId,
    /// The date the money was spent.
    pub date: Date,
    /// What the money was spent on.
    pub description: String,
    /// The amount spent.
    pub amount: f64,
    /// How the expense was paid for.
    pub payment_method: PaymentMethod,
    /// Which week of the month the expense date falls in, starting at 1.
    pub week_of_month: u8,
}

pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense_entry (
            id INTEGER PRIMARY KEY,
            date TEXT NOT NULL,
            description TEXT NOT NULL,
            amount REAL NOT NULL,
            payment_method TEXT NOT NULL,
            week_of_month INTEGER NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_expense_entry(row: &rusqlite::Row) -> Result<ExpenseEntry, rusqlite::Error> {
    let payment_method: String = row.get(4)?;
    let payment_method = match payment_method.as_str() {
        "Cash" => PaymentMethod::Cash,
        "Card" => PaymentMethod::Card,
        other => {
            return Err(rusqlite::Error::FromSqlConversionFailure(
                4,
                rusqlite::types::Type::Text,
                format!("unknown payment method {other:?}").into(),
            ));
        }
    };

    Ok(ExpenseEntry {
        id: row.get(0)?,
        date: row.get(1)?,
        description: row.get(2)?,
        amount: row.get(3)?,
        payment_method,
        week_of_month: row.get(5)?,
    })
}

/// Create an expense entry and store it in the database.
///
/// The description is stored with surrounding whitespace removed.
///
/// # Errors
/// Returns [Error::EmptyDescription] if the description is blank,
/// [Error::NonPositiveAmount] if the amount is not greater than zero, or
/// [Error::SqlError] if the insert fails.
pub fn create_expense_entry(
    date: Date,
    description: &str,
    amount: f64,
    payment_method: PaymentMethod,
    connection: &Connection,
) -> Result<ExpenseEntry, Error> {
    let description = description.trim();

    if description.is_empty() {
        return Err(Error::EmptyDescription);
    }

    if !(amount > 0.0 && amount.is_finite()) {
        return Err(Error::NonPositiveAmount);
    }

    let week = week_of_month(date);

    connection.execute(
        "INSERT INTO expense_entry (date, description, amount, payment_method, week_of_month)
        VALUES (?1, ?2, ?3, ?4, ?5)",
        params![date, description, amount, payment_method.as_str(), week],
    )?;

    let id = connection.last_insert_rowid();

    Ok(ExpenseEntry {
        id,
        date,
        description: description.to_owned(),
        amount,
        payment_method,
        week_of_month: week,
    })
}

/// Get all expense entries ordered by date, oldest first.
pub fn get_all_expense_entries(connection: &Connection) -> Result<Vec<ExpenseEntry>, Error> {
    let mut stmt = connection.prepare(
        "SELECT id, date, description, amount, payment_method, week_of_month
        FROM expense_entry
        ORDER BY date ASC, id ASC",
    )?;

    let entries = stmt
        .query_map([], map_row_to_expense_entry)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(entries)
}

#[cfg(test)]
mod create_expense_entry_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::Error;

    use super::{
        PaymentMethod, create_expense_entry, create_expense_table, get_all_expense_entries,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_expense_table(&conn).unwrap();
        conn
    }

    #[test]
    fn sql_is_valid() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), create_expense_table(&connection));
    }

    #[test]
    fn creates_expense_and_derives_week() {
        let conn = get_test_connection();

        let entry = create_expense_entry(
            date!(2024 - 06 - 30),
            "Cleaning supplies",
            42.50,
            PaymentMethod::Cash,
            &conn,
        )
        .expect("could not create expense entry");

        assert_eq!(entry.week_of_month, 5);
        assert_eq!(get_all_expense_entries(&conn).unwrap(), vec![entry]);
    }

    #[test]
    fn trims_description() {
        let conn = get_test_connection();

        let entry = create_expense_entry(
            date!(2024 - 06 - 12),
            "  Projector bulb  ",
            89.99,
            PaymentMethod::Card,
            &conn,
        )
        .expect("could not create expense entry");

        assert_eq!(entry.description, "Projector bulb");
    }

    #[test]
    fn rejects_blank_description() {
        let conn = get_test_connection();

        let result =
            create_expense_entry(date!(2024 - 06 - 12), "   ", 10.0, PaymentMethod::Cash, &conn);

        assert!(matches!(result, Err(Error::EmptyDescription)));
        assert_eq!(get_all_expense_entries(&conn).unwrap(), vec![]);
    }

    #[test]
    fn rejects_zero_amount() {
        let conn = get_test_connection();

        let result =
            create_expense_entry(date!(2024 - 06 - 12), "Rent", 0.0, PaymentMethod::Cash, &conn);

        assert!(matches!(result, Err(Error::NonPositiveAmount)));
    }

    #[test]
    fn rejects_negative_amount() {
        let conn = get_test_connection();

        let result =
            create_expense_entry(date!(2024 - 06 - 12), "Rent", -5.0, PaymentMethod::Card, &conn);

        assert!(matches!(result, Err(Error::NonPositiveAmount)));
    }

    #[test]
    fn round_trips_payment_method() {
        let conn = get_test_connection();

        create_expense_entry(date!(2024 - 06 - 12), "Rent", 500.0, PaymentMethod::Card, &conn)
            .unwrap();
        create_expense_entry(date!(2024 - 06 - 13), "Flowers", 15.0, PaymentMethod::Cash, &conn)
            .unwrap();

        let methods = get_all_expense_entries(&conn)
            .unwrap()
            .into_iter()
            .map(|entry| entry.payment_method)
            .collect::<Vec<_>>();

        assert_eq!(methods, vec![PaymentMethod::Card, PaymentMethod::Cash]);
    }
}
