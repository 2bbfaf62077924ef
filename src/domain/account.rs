//! Account entity and role model.

use chrono::{DateTime, Utc};

use super::AccountId;

/// Account role. A closed set: the only behavioral difference between the
/// two is authorization, so there is a single [`Account`] representation
/// with capability checks in [`super::policy`] rather than separate types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Regular client: owns and manages their own events.
    Client,
    /// Administrator: manages the catalog, vendors, and accounts, and may
    /// view or mutate any event.
    Administrator,
}

impl Role {
    /// Returns the storage/wire representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Administrator => "administrator",
        }
    }

    /// Parses a stored role string. Returns `None` for unknown values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "client" => Some(Self::Client),
            "administrator" => Some(Self::Administrator),
            _ => None,
        }
    }
}

/// A registered account.
///
/// The password is held only as a salted bcrypt hash; this struct is never
/// serialized directly, response DTOs select the public fields.
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique account identifier (immutable after registration).
    pub id: AccountId,
    /// Globally unique username (case-sensitive).
    pub username: String,
    /// Globally unique email address (case-sensitive).
    pub email: String,
    /// Salted one-way password hash.
    pub password_hash: String,
    /// Account role. Registration always yields [`Role::Client`];
    /// administrators are provisioned out of band.
    pub role: Role,
    /// Display name.
    pub full_name: String,
    /// Optional contact phone.
    pub phone: Option<String>,
    /// Whether the account may authenticate. Toggled by administrators,
    /// never deleted through any exposed operation.
    pub active: bool,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Returns `true` if this account holds the administrator role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Administrator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trip() {
        assert_eq!(Role::parse(Role::Client.as_str()), Some(Role::Client));
        assert_eq!(
            Role::parse(Role::Administrator.as_str()),
            Some(Role::Administrator)
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }
}
