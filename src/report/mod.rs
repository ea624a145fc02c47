//! The monthly report summarises the recorded income and expenses: overall
//! totals, subtotals per collection channel and a week by week breakdown.

mod aggregation;
mod handlers;

pub use aggregation::{
    ChannelTotals, WeekSummary, cash_collected, cash_expense, channel_totals_for, net_balance,
    physical_cash_on_hand, total_expense, total_income, weekly_breakdown,
};
pub use handlers::get_report_page;
