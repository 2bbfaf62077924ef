//! Account handlers: registration, availability checks, administration.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    AccountResponse, AvailabilityResponse, CheckEmailRequest, CheckUsernameRequest,
    RegisterRequest,
};
use crate::api::extract::CurrentAdmin;
use crate::app_state::AppState;
use crate::domain::AccountId;
use crate::error::{BookingError, ErrorResponse};
use crate::service::account_service::RegistrationInput;

/// `POST /accounts` — Register a new client account.
///
/// # Errors
///
/// Returns [`BookingError`] on validation failure or username/email
/// collision.
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    tag = "Accounts",
    summary = "Register a new account",
    description = "Creates a client account. Username and email must be globally unique; the new account is always role=client, active=true.",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let account = state
        .accounts
        .register(RegistrationInput {
            username: req.username,
            email: req.email,
            password: req.password,
            full_name: req.full_name,
            phone: req.phone,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(&account))))
}

/// `POST /accounts/check-username` — Live username availability.
///
/// # Errors
///
/// Returns [`BookingError`] on internal failures.
#[utoipa::path(
    post,
    path = "/api/v1/accounts/check-username",
    tag = "Accounts",
    summary = "Check username availability",
    description = "Intended for live client-side validation during registration.",
    request_body = CheckUsernameRequest,
    responses(
        (status = 200, description = "Availability verdict", body = AvailabilityResponse),
    )
)]
pub async fn check_username(
    State(state): State<AppState>,
    Json(req): Json<CheckUsernameRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let availability = state.accounts.username_available(&req.username).await?;
    Ok(Json(AvailabilityResponse {
        available: availability.available,
        message: availability.message,
    }))
}

/// `POST /accounts/check-email` — Live email availability.
///
/// # Errors
///
/// Returns [`BookingError`] on internal failures.
#[utoipa::path(
    post,
    path = "/api/v1/accounts/check-email",
    tag = "Accounts",
    summary = "Check email availability",
    description = "Intended for live client-side validation during registration.",
    request_body = CheckEmailRequest,
    responses(
        (status = 200, description = "Availability verdict", body = AvailabilityResponse),
    )
)]
pub async fn check_email(
    State(state): State<AppState>,
    Json(req): Json<CheckEmailRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let availability = state.accounts.email_available(&req.email).await?;
    Ok(Json(AvailabilityResponse {
        available: availability.available,
        message: availability.message,
    }))
}

/// `GET /admin/accounts` — List every account.
///
/// # Errors
///
/// Returns [`BookingError::Forbidden`] for non-administrators.
#[utoipa::path(
    get,
    path = "/api/v1/admin/accounts",
    tag = "Accounts",
    summary = "List accounts",
    description = "Administrator view of all registered accounts, newest first.",
    responses(
        (status = 200, description = "All accounts", body = Vec<AccountResponse>),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
    )
)]
pub async fn list_accounts(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BookingError> {
    let accounts = state.accounts.list_accounts().await?;
    let data: Vec<AccountResponse> = accounts.iter().map(AccountResponse::from).collect();
    Ok(Json(data))
}

/// `POST /admin/accounts/:id/toggle-active` — Flip an account's active flag.
///
/// # Errors
///
/// Returns [`BookingError`] when the target is the caller or unknown.
#[utoipa::path(
    post,
    path = "/api/v1/admin/accounts/{id}/toggle-active",
    tag = "Accounts",
    summary = "Toggle account active flag",
    description = "Deactivation is a toggle, never a deletion. An administrator may not deactivate their own account.",
    params(
        ("id" = uuid::Uuid, Path, description = "Account UUID"),
    ),
    responses(
        (status = 200, description = "Updated account", body = AccountResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 409, description = "Attempted self-deactivation", body = ErrorResponse),
    )
)]
pub async fn toggle_active(
    CurrentAdmin(admin): CurrentAdmin,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, BookingError> {
    let updated = state
        .accounts
        .toggle_active(&admin, AccountId::from_uuid(id))
        .await?;
    Ok(Json(AccountResponse::from(&updated)))
}

/// Account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(register))
        .route("/accounts/check-username", post(check_username))
        .route("/accounts/check-email", post(check_email))
        .route("/admin/accounts", get(list_accounts))
        .route("/admin/accounts/{id}/toggle-active", post(toggle_active))
}
