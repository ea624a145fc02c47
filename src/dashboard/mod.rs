//! The dashboard is the main working view: summary cards, the entry forms for
//! income and expenses, and the list of recorded movements.

mod cards;
mod forms;
mod handlers;
mod tables;

pub use handlers::{FormErrors, LedgerState, get_dashboard_page, render_ledger_content};

pub(crate) use cards::summary_cards;
