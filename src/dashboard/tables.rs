//! The table listing all recorded movements, income and expenses alike.

use maud::{Markup, html};
use time::Date;

use crate::{
    expense::{ExpenseEntry, PaymentMethod},
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
    income::IncomeEntry,
};

const BADGE_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 text-xs font-semibold \
    rounded-full bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300";

struct MovementRow {
    date: Date,
    description: String,
    detail: String,
    amount: Markup,
}

fn income_row(entry: &IncomeEntry) -> MovementRow {
    let mut channels = Vec::new();

    if entry.offering_bills + entry.tithe_bills > 0.0 {
        channels.push("Bills");
    }

    if entry.offering_coins + entry.tithe_coins > 0.0 {
        channels.push("Coins");
    }

    if entry.card_total() > 0.0 {
        channels.push("Card");
    }

    MovementRow {
        date: entry.date,
        description: format!("Offerings & tithes ({})", entry.day_label),
        detail: channels.join(", "),
        amount: html! {
            span class="text-green-600 dark:text-green-500"
            {
                "+" (format_currency(entry.total()))
            }
        },
    }
}

fn expense_row(entry: &ExpenseEntry) -> MovementRow {
    let detail = match entry.payment_method {
        PaymentMethod::Cash => "Cash",
        PaymentMethod::Card => "Card",
    };

    MovementRow {
        date: entry.date,
        description: entry.description.clone(),
        detail: detail.to_owned(),
        amount: html! {
            span class="text-red-600 dark:text-red-500"
            {
                "-" (format_currency(entry.amount))
            }
        },
    }
}

/// Renders all recorded income and expense entries as a single table ordered
/// by date, oldest first.
pub(super) fn movements_table(income: &[IncomeEntry], expenses: &[ExpenseEntry]) -> Markup {
    let mut rows = income
        .iter()
        .map(income_row)
        .chain(expenses.iter().map(expense_row))
        .collect::<Vec<_>>();
    rows.sort_by_key(|row| row.date);

    html! {
        div class="w-full overflow-x-auto shadow rounded-lg mt-6"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Channel" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                    }
                }

                tbody
                {
                    @if rows.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) colspan="4"
                            {
                                "Nothing recorded yet. Use the forms above to record the first service."
                            }
                        }
                    }

                    @for row in &rows {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (row.date) }
                            td class=(TABLE_CELL_STYLE) { (row.description) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                @if !row.detail.is_empty() {
                                    span class=(BADGE_STYLE) { (row.detail) }
                                }
                            }
                            td class=(TABLE_CELL_STYLE) { (row.amount) }
                        }
                    }
                }
            }
        }
    }
}
