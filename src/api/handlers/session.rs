//! Session handlers: login and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{AccountResponse, LoginRequest, LoginResponse};
use crate::api::extract::SessionToken;
use crate::app_state::AppState;
use crate::error::{BookingError, ErrorResponse};

/// `POST /sessions` — Authenticate and open a session.
///
/// # Errors
///
/// Returns [`BookingError::InvalidCredentials`] or
/// [`BookingError::AccountDisabled`].
#[utoipa::path(
    post,
    path = "/api/v1/sessions",
    tag = "Sessions",
    summary = "Log in",
    description = "Verifies the username/password pair and returns a bearer token. Disabled accounts fail distinctly from wrong credentials.",
    request_body = LoginRequest,
    responses(
        (status = 201, description = "Session opened", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account disabled", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let (token, account) = state.accounts.login(&req.username, &req.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            token,
            account: AccountResponse::from(&account),
        }),
    ))
}

/// `DELETE /sessions/current` — Close the current session.
///
/// # Errors
///
/// Returns [`BookingError::Unauthenticated`] when no token is presented.
#[utoipa::path(
    delete,
    path = "/api/v1/sessions/current",
    tag = "Sessions",
    summary = "Log out",
    description = "Deletes the session behind the presented bearer token.",
    responses(
        (status = 204, description = "Session closed"),
        (status = 401, description = "No session token", body = ErrorResponse),
    )
)]
pub async fn logout(
    SessionToken(token): SessionToken,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BookingError> {
    state.accounts.logout(token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Session routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/sessions", post(login)).route(
        "/sessions/current",
        axum::routing::delete(logout),
    )
}
