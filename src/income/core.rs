use rusqlite::{Connection, params};
use time::Date;

use crate::{Error, db::DatabaseId};

/// The service days an income entry can be recorded against.
///
/// "Special" covers one-off events such as conferences that fall outside the
/// regular service schedule.
pub const DAY_LABELS: [&str; 4] = ["Thursday", "Saturday", "Sunday", "Special"];

/// The money collected during a single church service.
///
/// Offerings and tithes are recorded separately, each split by collection
/// channel. Card amounts are tracked but never count towards cash on hand.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeEntry {
    /// The id for the income entry.
    pub id: DatabaseId,
    /// The date of the service.
    pub date: Date,
    /// The service day, one of [DAY_LABELS].
    pub day_label: String,
    /// Offerings collected as bank notes.
    pub offering_bills: f64,
    /// Offerings collected as coins.
    pub offering_coins: f64,
    /// Offerings collected by card.
    pub offering_card: f64,
    /// Tithes collected as bank notes.
    pub tithe_bills: f64,
    /// Tithes collected as coins.
    pub tithe_coins: f64,
    /// Tithes collected by card.
    pub tithe_card: f64,
    /// Which week of the month the service date falls in, starting at 1.
    pub week_of_month: u8,
}

impl IncomeEntry {
    /// The total money collected across all channels.
    pub fn total(&self) -> f64 {
        self.offering_bills
            + self.offering_coins
            + self.offering_card
            + self.tithe_bills
            + self.tithe_coins
            + self.tithe_card
    }

    /// The physical money collected, i.e. bills and coins but not card.
    pub fn cash_total(&self) -> f64 {
        self.offering_bills + self.offering_coins + self.tithe_bills + self.tithe_coins
    }

    /// The money collected by card.
    pub fn card_total(&self) -> f64 {
        self.offering_card + self.tithe_card
    }
}

/// Which week of the month a date falls in: days 1-7 are week 1, days 8-14
/// are week 2, and so on up to week 5 for days 29-31.
pub fn week_of_month(date: Date) -> u8 {
    (date.day() - 1) / 7 + 1
}

pub fn create_income_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS income_entry (
            id INTEGER PRIMARY KEY,
            date TEXT NOT NULL,
            day_label TEXT NOT NULL,
            offering_bills REAL NOT NULL,
            offering_coins REAL NOT NULL,
            offering_card REAL NOT NULL,
            tithe_bills REAL NOT NULL,
            tithe_coins REAL NOT NULL,
            tithe_card REAL NOT NULL,
            week_of_month INTEGER NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_income_entry(row: &rusqlite::Row) -> Result<IncomeEntry, rusqlite::Error> {
    Ok(IncomeEntry {
        id: row.get(0)?,
        date: row.get(1)?,
        day_label: row.get(2)?,
        offering_bills: row.get(3)?,
        offering_coins: row.get(4)?,
        offering_card: row.get(5)?,
        tithe_bills: row.get(6)?,
        tithe_coins: row.get(7)?,
        tithe_card: row.get(8)?,
        week_of_month: row.get(9)?,
    })
}

/// Create an income entry for `date` and store it in the database.
///
/// Each element of `amounts` pairs a field name with the amount collected,
/// in the order offering bills, coins, card, then tithe bills, coins, card.
///
/// # Errors
/// Returns [Error::NegativeAmount] if any amount is less than zero, or
/// [Error::SqlError] if the insert fails.
pub fn create_income_entry(
    date: Date,
    day_label: &str,
    amounts: [(&'static str, f64); 6],
    connection: &Connection,
) -> Result<IncomeEntry, Error> {
    for (field, amount) in amounts {
        if amount < 0.0 {
            return Err(Error::NegativeAmount(field));
        }
    }

    let [(_, offering_bills), (_, offering_coins), (_, offering_card), (_, tithe_bills), (_, tithe_coins), (_, tithe_card)] =
        amounts;
    let week = week_of_month(date);

    connection.execute(
        "INSERT INTO income_entry (
            date, day_label,
            offering_bills, offering_coins, offering_card,
            tithe_bills, tithe_coins, tithe_card,
            week_of_month
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            date,
            day_label,
            offering_bills,
            offering_coins,
            offering_card,
            tithe_bills,
            tithe_coins,
            tithe_card,
            week
        ],
    )?;

    let id = connection.last_insert_rowid();

    Ok(IncomeEntry {
        id,
        date,
        day_label: day_label.to_owned(),
        offering_bills,
        offering_coins,
        offering_card,
        tithe_bills,
        tithe_coins,
        tithe_card,
        week_of_month: week,
    })
}

/// Get all income entries ordered by date, oldest first.
pub fn get_all_income_entries(connection: &Connection) -> Result<Vec<IncomeEntry>, Error> {
    let mut stmt = connection.prepare(
        "SELECT id, date, day_label,
            offering_bills, offering_coins, offering_card,
            tithe_bills, tithe_coins, tithe_card,
            week_of_month
        FROM income_entry
        ORDER BY date ASC, id ASC",
    )?;

    let entries = stmt
        .query_map([], map_row_to_income_entry)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(entries)
}


#[cfg(test)]
mod income_entry_tests {
    use time::macros::date;

    use super::IncomeEntry;

    fn sample_entry() -> IncomeEntry {
        IncomeEntry {
            id: 1,
            date: date!(2024 - 06 - 09),
            day_label: "Sunday".to_owned(),
            offering_bills: 100.0,
            offering_coins: 5.0,
            offering_card: 20.0,
            tithe_bills: 50.0,
            tithe_coins: 0.0,
            tithe_card: 10.0,
            week_of_month: 2,
        }
    }

    #[test]
    fn total_sums_all_channels() {
        assert_eq!(sample_entry().total(), 185.0);
    }

    #[test]
    fn cash_total_excludes_card() {
        assert_eq!(sample_entry().cash_total(), 155.0);
    }

    #[test]
    fn card_total_sums_card_channels() {
        assert_eq!(sample_entry().card_total(), 30.0);
    }
}
