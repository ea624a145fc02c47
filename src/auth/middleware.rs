//! Authentication middleware that validates the session token cookie and
//! redirects unauthenticated viewers to the log-in page.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use time::Duration;

use crate::{AppState, auth::cookie::get_token_from_cookies, auth::UserID, endpoints};

/// The state needed for the auth middleware
#[derive(Clone)]
pub struct AuthState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AuthState> for Key {
    fn from_ref(state: &AuthState) -> Self {
        state.cookie_key.clone()
    }
}

/// The identity decoded from the session token, made available to route
/// handlers via `Extension(current_user): Extension<CurrentUser>`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    /// The ID of the logged-in user.
    pub id: UserID,
    /// The username of the logged-in user.
    pub username: String,
}

/// Middleware function that checks for a valid session token cookie.
/// The decoded identity is placed into the request and then the request executed
/// normally if the cookie is valid, otherwise a redirect to the log-in page is
/// returned using `get_redirect`.
#[inline]
async fn auth_guard_internal(
    state: AuthState,
    request: Request,
    next: Next,
    get_redirect: impl Fn() -> Response,
) -> Response {
    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(err) => {
            tracing::error!("Error getting cookie jar: {err:?}. Redirecting to log in page.");
            return get_redirect();
        }
    };

    let token = match get_token_from_cookies(&jar) {
        Ok(token) => token,
        Err(_) => return get_redirect(),
    };

    parts.extensions.insert(CurrentUser {
        id: token.user_id,
        username: token.username,
    });
    let request = Request::from_parts(parts, body);

    next.run(request).await
}

/// Middleware function that checks for a valid session token cookie.
/// The identity is placed into the request and then the request executed normally
/// if the cookie is valid, otherwise a redirect to the log-in page is returned.
///
/// **Note**: Route handlers can use the function argument
/// `Extension(current_user): Extension<CurrentUser>` to receive the identity.
///
/// **Note**: The app state must contain an `axum_extra::extract::cookie::Key` for decrypting and verifying the cookie contents.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    auth_guard_internal(state, request, next, || {
        Redirect::to(endpoints::LOG_IN_VIEW).into_response()
    })
    .await
}

/// Middleware function that checks for a valid session token cookie.
/// The identity is placed into the request and then the request executed normally
/// if the cookie is valid, otherwise a HTMX redirect to the log-in page is returned.
///
/// POST routes driven by HTMX need the HX-Redirect header for auth redirects
/// to work properly.
pub async fn auth_guard_hx(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    auth_guard_internal(state, request, next, || {
        (
            HxRedirect(endpoints::LOG_IN_VIEW.to_owned()),
            StatusCode::OK,
        )
            .into_response()
    })
    .await
}
