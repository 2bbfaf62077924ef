//! Booking error types with HTTP status code mapping.
//!
//! [`BookingError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! All failures are terminal for the request: nothing is retried, the
//! caller corrects and resubmits.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid title: must be 5-200 characters",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`BookingError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category            | HTTP Status                 |
/// |-----------|---------------------|-----------------------------|
/// | 1000–1999 | Validation          | 400 Bad Request             |
/// | 2000–2099 | Auth / Not Found    | 401 / 403 / 404             |
/// | 2100–2199 | Conflicts           | 409 Conflict                |
/// | 3000–3999 | Server              | 500 Internal Server Error   |
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// A field failed validation; the caller can correct and resubmit.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The request carries no (or an unknown) session token.
    #[error("authentication required")]
    Unauthenticated,

    /// Username/password combination did not match.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The account exists but is deactivated.
    #[error("account is disabled")]
    AccountDisabled,

    /// Authenticated but not authorized for this resource.
    #[error("not allowed to access this resource")]
    Forbidden,

    /// A referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Registration username collided with an existing account.
    #[error("username is already taken")]
    DuplicateUsername,

    /// Registration email collided with an existing account.
    #[error("email is already registered")]
    DuplicateEmail,

    /// The `(event, service)` pair already exists; attachments are not
    /// upserted.
    #[error("service is already attached to this event")]
    AlreadyAttached,

    /// Service deletion refused: still referenced by events.
    #[error("service is in use by {0} event(s)")]
    InUse(i64),

    /// An administrator tried to deactivate their own account.
    #[error("cannot deactivate your own account")]
    SelfDeactivationForbidden,

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl BookingError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::Unauthenticated => 2001,
            Self::InvalidCredentials => 2002,
            Self::AccountDisabled => 2003,
            Self::Forbidden => 2004,
            Self::NotFound(_) => 2005,
            Self::DuplicateUsername => 2101,
            Self::DuplicateEmail => 2102,
            Self::AlreadyAttached => 2103,
            Self::InUse(_) => 2104,
            Self::SelfDeactivationForbidden => 2105,
            Self::Persistence(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::AccountDisabled | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateUsername
            | Self::DuplicateEmail
            | Self::AlreadyAttached
            | Self::InUse(_)
            | Self::SelfDeactivationForbidden => StatusCode::CONFLICT,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let details = match &self {
            Self::InUse(count) => Some(format!("referencing_events: {count}")),
            _ => None,
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = BookingError::Validation("bad title".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1001);
    }

    #[test]
    fn auth_failures_are_distinguishable() {
        // Disabled accounts fail distinctly from wrong credentials so the
        // caller can show a different message.
        let wrong = BookingError::InvalidCredentials;
        let disabled = BookingError::AccountDisabled;
        assert_ne!(wrong.error_code(), disabled.error_code());
        assert_eq!(wrong.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(disabled.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn conflicts_map_to_409() {
        for err in [
            BookingError::DuplicateUsername,
            BookingError::DuplicateEmail,
            BookingError::AlreadyAttached,
            BookingError::InUse(3),
            BookingError::SelfDeactivationForbidden,
        ] {
            assert_eq!(err.status_code(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn in_use_surfaces_the_reference_count() {
        let err = BookingError::InUse(4);
        assert_eq!(err.to_string(), "service is in use by 4 event(s)");
    }

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(BookingError::NotFound("event").to_string(), "event not found");
    }
}
