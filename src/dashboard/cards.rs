//! Summary cards showing the headline figures for the congregation's books.

use maud::{Markup, html};

use crate::{
    expense::ExpenseEntry,
    html::format_currency,
    income::IncomeEntry,
    report::{net_balance, physical_cash_on_hand, total_expense, total_income},
};

const CARD_STYLE: &str = "p-4 bg-white rounded-lg shadow dark:bg-gray-800";
const CARD_LABEL_STYLE: &str = "text-sm font-medium text-gray-500 dark:text-gray-400";

/// Renders the four headline figures: total income, total expenses, the net
/// balance and the physical cash that should be in the cash box.
pub fn summary_cards(income: &[IncomeEntry], expenses: &[ExpenseEntry]) -> Markup {
    let balance = net_balance(income, expenses);
    let balance_style = if balance < 0.0 {
        "text-2xl font-bold text-red-600 dark:text-red-500"
    } else {
        "text-2xl font-bold text-green-600 dark:text-green-500"
    };

    html! {
        div class="grid grid-cols-2 lg:grid-cols-4 gap-4 w-full mb-6"
        {
            div class=(CARD_STYLE)
            {
                p class=(CARD_LABEL_STYLE) { "Total Income" }
                p class="text-2xl font-bold" { (format_currency(total_income(income))) }
            }

            div class=(CARD_STYLE)
            {
                p class=(CARD_LABEL_STYLE) { "Total Expenses" }
                p class="text-2xl font-bold" { (format_currency(total_expense(expenses))) }
            }

            div class=(CARD_STYLE)
            {
                p class=(CARD_LABEL_STYLE) { "Net Balance" }
                p class=(balance_style) { (format_currency(balance)) }
            }

            div class=(CARD_STYLE)
            {
                p class=(CARD_LABEL_STYLE) { "Cash on Hand" }
                p class="text-2xl font-bold" { (format_currency(physical_cash_on_hand(income, expenses))) }
            }
        }
    }
}
