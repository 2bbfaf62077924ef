//! Actor extraction from the bearer session token.
//!
//! Core operations take the acting account explicitly; these extractors
//! resolve the `Authorization: Bearer <token>` header to an [`Account`]
//! once per request, at the boundary.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::policy::require_admin;
use crate::domain::Account;
use crate::error::BookingError;

/// The raw session token, parsed but not resolved.
#[derive(Debug, Clone, Copy)]
pub struct SessionToken(pub Uuid);

impl FromRequestParts<AppState> for SessionToken {
    type Rejection = BookingError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        bearer_token(parts).map(Self).ok_or(BookingError::Unauthenticated)
    }
}

/// The authenticated account behind the request's session token.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = BookingError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(BookingError::Unauthenticated)?;
        let account = state.accounts.resolve_session(token).await?;
        Ok(Self(account))
    }
}

/// An authenticated administrator. Rejects non-admin actors with
/// `Forbidden` before the handler body runs.
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub Account);

impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = BookingError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentAccount(account) = CurrentAccount::from_request_parts(parts, state).await?;
        require_admin(&account)?;
        Ok(Self(account))
    }
}

/// Parses `Authorization: Bearer <uuid>` from the request headers.
fn bearer_token(parts: &Parts) -> Option<Uuid> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(|token| token.trim().parse().ok())
}
