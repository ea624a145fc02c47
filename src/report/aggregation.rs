//! Pure aggregation functions over the recorded income and expense entries.

use crate::{
    expense::{ExpenseEntry, PaymentMethod},
    income::IncomeEntry,
};

/// The total money collected across all income entries and channels.
pub fn total_income(income: &[IncomeEntry]) -> f64 {
    income.iter().map(IncomeEntry::total).sum()
}

/// The total money spent across all expense entries, cash and card alike.
pub fn total_expense(expenses: &[ExpenseEntry]) -> f64 {
    expenses.iter().map(|entry| entry.amount).sum()
}

/// The overall balance: all income minus all expenses, card included.
pub fn net_balance(income: &[IncomeEntry], expenses: &[ExpenseEntry]) -> f64 {
    total_income(income) - total_expense(expenses)
}

/// The physical money collected, i.e. bills and coins but not card income.
pub fn cash_collected(income: &[IncomeEntry]) -> f64 {
    income.iter().map(IncomeEntry::cash_total).sum()
}

/// The total money spent from the cash box.
pub fn cash_expense(expenses: &[ExpenseEntry]) -> f64 {
    expenses
        .iter()
        .filter(|entry| entry.payment_method == PaymentMethod::Cash)
        .map(|entry| entry.amount)
        .sum()
}

/// The physical money that should be in the cash box: the cash collected
/// minus the cash spent. Card income and card expenses never touch the box.
pub fn physical_cash_on_hand(income: &[IncomeEntry], expenses: &[ExpenseEntry]) -> f64 {
    cash_collected(income) - cash_expense(expenses)
}

/// Subtotals per collection and payment channel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChannelTotals {
    /// Income collected as bank notes.
    pub bills: f64,
    /// Income collected as coins.
    pub coins: f64,
    /// Income collected by card.
    pub card_income: f64,
    /// Expenses paid by card.
    pub card_expense: f64,
}

/// Break the recorded entries down into per-channel subtotals.
pub fn channel_totals_for(income: &[IncomeEntry], expenses: &[ExpenseEntry]) -> ChannelTotals {
    let mut totals = ChannelTotals::default();

    for entry in income {
        totals.bills += entry.offering_bills + entry.tithe_bills;
        totals.coins += entry.offering_coins + entry.tithe_coins;
        totals.card_income += entry.card_total();
    }

    totals.card_expense = expenses
        .iter()
        .filter(|entry| entry.payment_method == PaymentMethod::Card)
        .map(|entry| entry.amount)
        .sum();

    totals
}

/// The income and expense totals for one week of the month.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    /// The week of the month, starting at 1.
    pub week: u8,
    /// The total income recorded in this week.
    pub income: f64,
    /// The total expenses recorded in this week.
    pub expense: f64,
}

impl WeekSummary {
    /// The week's income minus its expenses. Negative when the week spent
    /// more than it collected.
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

/// Break the recorded entries down by week of the month.
///
/// Weeks 1 through 4 are always present. Week 5 covers the days past the 28th
/// and is only included when an entry actually falls in it.
pub fn weekly_breakdown(income: &[IncomeEntry], expenses: &[ExpenseEntry]) -> Vec<WeekSummary> {
    let has_week_five = income.iter().any(|entry| entry.week_of_month == 5)
        || expenses.iter().any(|entry| entry.week_of_month == 5);
    let last_week = if has_week_five { 5 } else { 4 };

    (1..=last_week)
        .map(|week| WeekSummary {
            week,
            income: income
                .iter()
                .filter(|entry| entry.week_of_month == week)
                .map(|entry| entry.total())
                .sum(),
            expense: expenses
                .iter()
                .filter(|entry| entry.week_of_month == week)
                .map(|entry| entry.amount)
                .sum(),
        })
        .collect()
}
