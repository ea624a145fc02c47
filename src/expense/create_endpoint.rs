//! Defines the endpoint for recording an expense.
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    dashboard::{FormErrors, LedgerState, render_ledger_content},
    expense::{PaymentMethod, create_expense_entry},
};

/// The form data for recording an expense.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// The date the money was spent.
    pub date: Date,
    /// What the money was spent on.
    pub description: String,
    /// The amount spent.
    pub amount: f64,
    /// How the expense was paid for.
    pub payment_method: PaymentMethod,
}

/// A route handler for recording an expense, returns the refreshed ledger view.
///
/// A blank description or an amount that is not greater than zero is rejected
/// and reported next to the expense form.
pub async fn create_expense_endpoint(
    State(state): State<LedgerState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let result = create_expense_entry(
        form.date,
        &form.description,
        form.amount,
        form.payment_method,
        &connection,
    );

    let errors = match result {
        Ok(_) => FormErrors::default(),
        Err(Error::EmptyDescription) => FormErrors {
            expense: Some("Please enter a description.".to_owned()),
            ..FormErrors::default()
        },
        Err(Error::NonPositiveAmount) => FormErrors {
            expense: Some("The amount must be greater than zero.".to_owned()),
            ..FormErrors::default()
        },
        Err(error) => {
            tracing::error!("could not create expense entry with {form:?}: {error}");
            return error.into_response();
        }
    };

    match render_ledger_content(&connection, &state.local_timezone, errors) {
        Ok(markup) => (StatusCode::OK, markup).into_response(),
        Err(error) => error.into_response(),
    }
}
