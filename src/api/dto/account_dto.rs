//! Account and session DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Account;

/// Request body for `POST /accounts` (registration).
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Requested username (3–80 characters, globally unique).
    pub username: String,
    /// Email address (globally unique).
    pub email: String,
    /// Password, at least 6 characters.
    pub password: String,
    /// Display name.
    pub full_name: String,
    /// Optional contact phone (10–15 characters).
    #[serde(default)]
    pub phone: Option<String>,
}

/// Public view of an account. The password hash never leaves the server.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    /// Account identifier.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Contact phone.
    pub phone: Option<String>,
    /// Role string (`"client"` or `"administrator"`).
    pub role: String,
    /// Whether the account may authenticate.
    pub active: bool,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: *account.id.as_uuid(),
            username: account.username.clone(),
            email: account.email.clone(),
            full_name: account.full_name.clone(),
            phone: account.phone.clone(),
            role: account.role.as_str().to_string(),
            active: account.active,
            created_at: account.created_at,
        }
    }
}

/// Request body for `POST /sessions` (login).
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Response body for `POST /sessions` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: Uuid,
    /// The authenticated account.
    pub account: AccountResponse,
}

/// Request body for `POST /accounts/check-username`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckUsernameRequest {
    /// Username to check.
    pub username: String,
}

/// Request body for `POST /accounts/check-email`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckEmailRequest {
    /// Email to check.
    pub email: String,
}

/// Response body for the availability lookups.
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    /// Whether the value can be used for a new registration.
    pub available: bool,
    /// Human-readable reason, suitable for inline form feedback.
    pub message: String,
}
