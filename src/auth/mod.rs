//! User authentication: password hashing, session tokens stored in private
//! cookies, the auth middleware, and the log-in/log-out routes.

mod cookie;
mod log_in;
mod log_out;
mod middleware;
mod password;
mod token;
mod user;

pub use cookie::{DEFAULT_COOKIE_DURATION, invalidate_auth_cookie, set_auth_cookie};
pub use log_in::{get_index_page, get_log_in_page, post_log_in};
pub use log_out::get_log_out;
pub use middleware::{AuthState, CurrentUser, auth_guard, auth_guard_hx};
pub use password::{PasswordHash, ValidatedPassword};
pub use user::{
    SeedOutcome, User, UserID, create_user, create_user_table, get_user_by_username, upsert_user,
};

pub(crate) use cookie::get_token_from_cookies;

#[cfg(test)]
pub(crate) use cookie::COOKIE_TOKEN;
