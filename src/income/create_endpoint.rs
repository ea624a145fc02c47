//! Defines the endpoint for recording the income collected during a service.
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer};
use time::Date;

use crate::{
    Error,
    dashboard::{FormErrors, LedgerState, render_ledger_content},
    income::create_income_entry,
};

/// The form data for recording a service's income.
///
/// Amount fields left empty or filled with something that is not a number
/// are treated as zero so that a treasurer can fill in only the channels
/// money actually came in through.
#[derive(Debug, Deserialize)]
pub struct IncomeForm {
    /// The date of the service.
    pub date: Date,
    /// The service day, e.g. "Sunday".
    pub day_label: String,
    #[serde(deserialize_with = "amount_or_zero")]
    pub offering_bills: f64,
    #[serde(deserialize_with = "amount_or_zero")]
    pub offering_coins: f64,
    #[serde(deserialize_with = "amount_or_zero")]
    pub offering_card: f64,
    #[serde(deserialize_with = "amount_or_zero")]
    pub tithe_bills: f64,
    #[serde(deserialize_with = "amount_or_zero")]
    pub tithe_coins: f64,
    #[serde(deserialize_with = "amount_or_zero")]
    pub tithe_card: f64,
}

fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    Ok(raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0))
}

/// A route handler for recording income, returns the refreshed ledger view.
///
/// Negative amounts are rejected and reported next to the income form.
pub async fn create_income_endpoint(
    State(state): State<LedgerState>,
    Form(form): Form<IncomeForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let amounts = [
        ("offering_bills", form.offering_bills),
        ("offering_coins", form.offering_coins),
        ("offering_card", form.offering_card),
        ("tithe_bills", form.tithe_bills),
        ("tithe_coins", form.tithe_coins),
        ("tithe_card", form.tithe_card),
    ];

    let errors = match create_income_entry(form.date, &form.day_label, amounts, &connection) {
        Ok(_) => FormErrors::default(),
        Err(Error::NegativeAmount(field)) => FormErrors {
            income: Some(format!("Amounts cannot be negative (check {field}).")),
            ..FormErrors::default()
        },
        Err(error) => {
            tracing::error!("could not create income entry with {form:?}: {error}");
            return error.into_response();
        }
    };

    match render_ledger_content(&connection, &state.local_timezone, errors) {
        Ok(markup) => (StatusCode::OK, markup).into_response(),
        Err(error) => error.into_response(),
    }
}
