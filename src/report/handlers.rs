//! The route handler for the monthly report page.

use axum::response::{IntoResponse, Response};
use axum::extract::State;
use maud::{Markup, html};

use crate::{
    Error,
    dashboard::{LedgerState, summary_cards},
    endpoints,
    expense::{ExpenseEntry, get_all_expense_entries},
    html::{PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency},
    income::{IncomeEntry, get_all_income_entries},
    navigation::NavBar,
    report::{cash_expense, cash_collected, channel_totals_for, weekly_breakdown},
};

const SECTION_HEADING_STYLE: &str = "text-lg font-semibold mt-6 mb-2";

/// Display the monthly report: headline figures, per-channel subtotals and
/// the week by week breakdown.
pub async fn get_report_page(State(state): State<LedgerState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let income = get_all_income_entries(&connection)
        .inspect_err(|error| tracing::error!("could not get income entries: {error}"))?;
    let expenses = get_all_expense_entries(&connection)
        .inspect_err(|error| tracing::error!("could not get expense entries: {error}"))?;

    let nav_bar = NavBar::new(endpoints::REPORT_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl"
            {
                h2 class="text-xl font-bold mb-4" { "Monthly Report" }

                (summary_cards(&income, &expenses))

                h3 class=(SECTION_HEADING_STYLE) { "By Channel" }
                (channel_table(&income, &expenses))

                h3 class=(SECTION_HEADING_STYLE) { "By Week" }
                (weekly_table(&income, &expenses))
            }
        }
    );

    Ok(base("Monthly Report", &[], &content).into_response())
}

fn channel_table(income: &[IncomeEntry], expenses: &[ExpenseEntry]) -> Markup {
    let totals = channel_totals_for(income, expenses);
    let rows = [
        ("Bills", format_currency(totals.bills)),
        ("Coins", format_currency(totals.coins)),
        ("Card income", format_currency(totals.card_income)),
        ("Card expenses", format_currency(totals.card_expense)),
        ("Cash collected", format_currency(cash_collected(income))),
        ("Cash spent", format_currency(cash_expense(expenses))),
    ];

    html! {
        div class="w-full overflow-x-auto shadow rounded-lg"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Channel" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Total" }
                    }
                }

                tbody
                {
                    @for (label, amount) in &rows {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (label) }
                            td class=(TABLE_CELL_STYLE) { (amount) }
                        }
                    }
                }
            }
        }
    }
}

fn weekly_table(income: &[IncomeEntry], expenses: &[ExpenseEntry]) -> Markup {
    let breakdown = weekly_breakdown(income, expenses);

    html! {
        div class="w-full overflow-x-auto shadow rounded-lg"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Week" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Income" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Expenses" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Balance" }
                    }
                }

                tbody
                {
                    @for week in &breakdown {
                        @let balance = week.balance();
                        @let balance_style = if balance < 0.0 {
                            "text-red-600 dark:text-red-500"
                        } else {
                            "text-green-600 dark:text-green-500"
                        };

                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { "Week " (week.week) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(week.income)) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(week.expense)) }
                            td class=(TABLE_CELL_STYLE) {
                                span class=(balance_style) { (format_currency(balance)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod report_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;
    use scraper::Selector;
    use time::macros::date;

    use crate::{
        dashboard::LedgerState,
        db::initialize,
        expense::{PaymentMethod, create_expense_entry},
        income::create_income_entry,
        test_utils::{assert_valid_html, parse_html_document},
    };

    use super::get_report_page;

    fn get_test_state() -> LedgerState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        LedgerState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn seed_entries(state: &LedgerState) {
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

    #[tokio::test]
    async fn report_page_loads_successfully() {
        let state = get_test_state();
        seed_entries(&state);

        let response = get_report_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("By Channel"));
        assert!(text.contains("By Week"));
        assert!(text.contains("€185.00"), "total income missing: {text}");
        assert!(text.contains("€155.00"), "cash collected missing: {text}");
    }

    #[tokio::test]
    async fn report_shows_four_weeks_by_default() {
        let state = get_test_state();
        seed_entries(&state);

        let response = get_report_page(State(state)).await.unwrap();
        let html = parse_html_document(response).await;

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Week 4"));
        assert!(!text.contains("Week 5"));
    }

    #[tokio::test]
    async fn report_shows_week_five_when_used() {
        let state = get_test_state();

        {
            let connection = state.db_connection.lock().unwrap();
            create_income_entry(
                date!(2024 - 05 - 30),
                "Thursday",
                [
                    ("offering_bills", 40.0),
                    ("offering_coins", 0.0),
                    ("offering_card", 0.0),
                    ("tithe_bills", 0.0),
                    ("tithe_coins", 0.0),
                    ("tithe_card", 0.0),
                ],
                &connection,
            )
            .unwrap();
        }

        let response = get_report_page(State(state)).await.unwrap();
        let html = parse_html_document(response).await;

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Week 5"));
    }

    #[tokio::test]
    async fn weekly_table_reports_each_weeks_balance() {
        let state = get_test_state();

        {
            let connection = state.db_connection.lock().unwrap();
            create_income_entry(
                date!(2024 - 06 - 02),
                "Sunday",
                [
                    ("offering_bills", 100.0),
                    ("offering_coins", 0.0),
                    ("offering_card", 0.0),
                    ("tithe_bills", 0.0),
                    ("tithe_coins", 0.0),
                    ("tithe_card", 0.0),
                ],
                &connection,
            )
            .unwrap();
            create_expense_entry(
                date!(2024 - 06 - 05),
                "Flowers",
                25.0,
                PaymentMethod::Cash,
                &connection,
            )
            .unwrap();
            create_expense_entry(
                date!(2024 - 06 - 12),
                "Rent",
                80.0,
                PaymentMethod::Card,
                &connection,
            )
            .unwrap();
        }

        let response = get_report_page(State(state)).await.unwrap();
        let html = parse_html_document(response).await;

        let table_selector = Selector::parse("table").unwrap();
        let weekly_table = html
            .select(&table_selector)
            .last()
            .expect("the weekly table should be the last table on the page");
        let text = weekly_table.text().collect::<String>();

        assert!(text.contains("Balance"), "no balance column: {text}");
        assert!(text.contains("€75.00"), "week 1 balance missing: {text}");
        assert!(text.contains("-€80.00"), "week 2 balance missing: {text}");

        let weekly_html = weekly_table.html();
        assert!(
            weekly_html.contains("text-red-600"),
            "overdrawn week not highlighted: {weekly_html}"
        );
    }

    #[tokio::test]
    async fn report_renders_tables() {
        let state = get_test_state();

        let response = get_report_page(State(state)).await.unwrap();
        let html = parse_html_document(response).await;

        let table_selector = Selector::parse("table").unwrap();
        let tables = html.select(&table_selector).count();
        assert_eq!(tables, 2, "want channel and weekly tables, got {tables}");
    }
}
