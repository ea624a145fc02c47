//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - The ledger partial returned by the income and expense endpoints
//! - The state type shared by the handlers that read and write entries

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error,
    auth::CurrentUser,
    dashboard::{forms::expense_form, forms::income_form, summary_cards, tables::movements_table},
    endpoints,
    expense::get_all_expense_entries,
    html::{PAGE_CONTAINER_STYLE, base, euro_input_styles},
    income::get_all_income_entries,
    navigation::NavBar,
    timezone::get_local_offset,
};

/// The state needed by the handlers that display or update the ledger.
#[derive(Debug, Clone)]
pub struct LedgerState {
    /// The database connection for reading and writing entries.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Europe/Madrid".
    pub local_timezone: String,
}

impl FromRef<AppState> for LedgerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Validation messages to display next to the entry forms.
#[derive(Debug, Clone, Default)]
pub struct FormErrors {
    /// The message to display under the income form.
    pub income: Option<String>,
    /// The message to display under the expense form.
    pub expense: Option<String>,
}

/// Display the dashboard: summary cards, entry forms and the list of
/// recorded movements.
pub async fn get_dashboard_page(
    State(state): State<LedgerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let ledger = render_ledger_content(&connection, &state.local_timezone, FormErrors::default())?;

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl"
            {
                h2 class="text-xl font-bold mb-4" { "Welcome, " (user.username) }

                (ledger)
            }
        }
    );

    Ok(base("Dashboard", &[euro_input_styles()], &content).into_response())
}

/// Renders the part of the dashboard that changes when an entry is recorded.
///
/// The income and expense endpoints return this partial so that htmx can swap
/// it in without a full page reload.
pub fn render_ledger_content(
    connection: &Connection,
    local_timezone: &str,
    errors: FormErrors,
) -> Result<Markup, Error> {
    let income = get_all_income_entries(connection)
        .inspect_err(|error| tracing::error!("could not get income entries: {error}"))?;
    let expenses = get_all_expense_entries(connection)
        .inspect_err(|error| tracing::error!("could not get expense entries: {error}"))?;

    let today = local_today(local_timezone)?;

    Ok(html!(
        div id="ledger-content"
        {
            (summary_cards(&income, &expenses))

            div class="grid grid-cols-1 lg:grid-cols-2 gap-4 w-full"
            {
                (income_form(today, errors.income.as_deref()))
                (expense_form(today, errors.expense.as_deref()))
            }

            (movements_table(&income, &expenses))
        }
    ))
}

fn local_today(local_timezone: &str) -> Result<Date, Error> {
    let local_offset = get_local_offset(local_timezone).ok_or_else(|| {
        tracing::error!("invalid timezone {local_timezone}");
        Error::InvalidTimezoneError(local_timezone.to_owned())
    })?;

    Ok(OffsetDateTime::now_utc().to_offset(local_offset).date())
}

#[cfg(test)]
mod dashboard_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Extension, extract::State, http::StatusCode};
    use rusqlite::Connection;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        auth::{CurrentUser, UserID},
        db::initialize,
        expense::{PaymentMethod, create_expense_entry},
        income::create_income_entry,
        test_utils::{assert_valid_html, parse_html_document},
    };

    use super::{FormErrors, LedgerState, get_dashboard_page, render_ledger_content};

    fn get_test_state() -> LedgerState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        LedgerState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn test_user() -> CurrentUser {
        CurrentUser {
            id: UserID::new(1),
            username: "admin".to_owned(),
        }
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let state = get_test_state();

        {
            let connection = state.db_connection.lock().unwrap();
            create_income_entry(
                date!(2024 - 06 - 09),
                "Sunday",
                [
                    ("offering_bills", 100.0),
                    ("offering_coins", 5.0),
                    ("offering_card", 20.0),
                    ("tithe_bills", 50.0),
                    ("tithe_coins", 0.0),
                    ("tithe_card", 10.0),
                ],
                &connection,
            )
            .unwrap();
            create_expense_entry(
                date!(2024 - 06 - 12),
                "Cleaning supplies",
                42.50,
                PaymentMethod::Cash,
                &connection,
            )
            .unwrap();
        }

        let response = get_dashboard_page(State(state), Extension(test_user()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Welcome, admin"), "welcome header missing");
        assert!(text.contains("€185.00"), "summary cards missing");

        let form_selector = Selector::parse("form").unwrap();
        let forms = html.select(&form_selector).count();
        assert_eq!(forms, 2, "want income and expense forms, got {forms}");

        let table_selector = Selector::parse("table").unwrap();
        assert!(
            html.select(&table_selector).next().is_some(),
            "movements table missing"
        );
    }

    #[tokio::test]
    async fn dashboard_page_shows_placeholder_with_no_entries() {
        let state = get_test_state();

        let response = get_dashboard_page(State(state), Extension(test_user()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let text = html.root_element().text().collect::<String>();

        assert!(text.contains("Nothing recorded yet"));
    }

    #[test]
    fn ledger_partial_is_swappable() {
        let state = get_test_state();
        let connection = state.db_connection.lock().unwrap();

        let markup = render_ledger_content(&connection, "Etc/UTC", FormErrors::default())
            .unwrap()
            .into_string();
        let fragment = Html::parse_fragment(&markup);

        let selector = Selector::parse("div#ledger-content").unwrap();
        assert!(
            fragment.select(&selector).next().is_some(),
            "partial must carry the id htmx targets"
        );
    }

    #[test]
    fn ledger_partial_shows_form_errors() {
        let state = get_test_state();
        let connection = state.db_connection.lock().unwrap();

        let markup = render_ledger_content(
            &connection,
            "Etc/UTC",
            FormErrors {
                income: Some("Amounts cannot be negative (check tithe_coins).".to_owned()),
                expense: Some("Please enter a description.".to_owned()),
            },
        )
        .unwrap()
        .into_string();

        assert!(markup.contains("Amounts cannot be negative"));
        assert!(markup.contains("Please enter a description."));
    }
}
