//! Expense entries record money spent, either from the physical cash box or
//! by card.

mod core;
mod create_endpoint;

pub use core::{
    ExpenseEntry, PaymentMethod, create_expense_entry, create_expense_table, get_all_expense_entries,
};
pub use create_endpoint::{ExpenseForm, create_expense_endpoint};
