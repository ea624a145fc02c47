//! Income entries record the money collected during a church service,
//! split into offerings and tithes and by collection channel (bills,
//! coins and card).

mod core;
mod create_endpoint;

pub use core::{
    DAY_LABELS, IncomeEntry, create_income_entry, create_income_table, get_all_income_entries,
    week_of_month,
};
pub use create_endpoint::{IncomeForm, create_income_endpoint};
