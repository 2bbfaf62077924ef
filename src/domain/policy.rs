//! Access policy: who may read or mutate what.
//!
//! Pure functions over [`Account`] and [`Event`]. Every core operation takes
//! the acting account explicitly; there is no ambient "current user".

use crate::error::BookingError;

use super::{Account, Event};

/// Returns `true` if `actor` may view `event`: the owner, or any
/// administrator.
#[must_use]
pub fn can_view_event(actor: &Account, event: &Event) -> bool {
    actor.id == event.account_id || actor.is_admin()
}

/// Returns `true` if `actor` may mutate `event`.
///
/// The rule is identical to [`can_view_event`]: this domain has no separate
/// edit permission tier.
#[must_use]
pub fn can_mutate_event(actor: &Account, event: &Event) -> bool {
    can_view_event(actor, event)
}

/// Gate for administrator-only operations.
///
/// # Errors
///
/// Returns [`BookingError::Forbidden`] if `actor` is not an administrator.
pub fn require_admin(actor: &Account) -> Result<(), BookingError> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(BookingError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::domain::{AccountId, EventId, EventStatus, Role};

    use super::*;

    fn account(role: Role) -> Account {
        Account {
            id: AccountId::new(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            role,
            full_name: "Alice Example".to_string(),
            phone: None,
            active: true,
            created_at: Utc::now(),
        }
    }

    fn event_owned_by(owner: AccountId) -> Event {
        Event {
            id: EventId::new(),
            account_id: owner,
            title: "Beach Wedding".to_string(),
            description: None,
            scheduled_at: Utc::now(),
            location: "Playa del Carmen".to_string(),
            guest_count: Some(80),
            budget: None,
            status: EventStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn owner_can_view_and_mutate() {
        let owner = account(Role::Client);
        let event = event_owned_by(owner.id);
        assert!(can_view_event(&owner, &event));
        assert!(can_mutate_event(&owner, &event));
    }

    #[test]
    fn admin_can_view_and_mutate_any_event() {
        let admin = account(Role::Administrator);
        let event = event_owned_by(AccountId::new());
        assert!(can_view_event(&admin, &event));
        assert!(can_mutate_event(&admin, &event));
    }

    #[test]
    fn stranger_can_neither_view_nor_mutate() {
        let stranger = account(Role::Client);
        let event = event_owned_by(AccountId::new());
        assert!(!can_view_event(&stranger, &event));
        assert!(!can_mutate_event(&stranger, &event));
    }

    #[test]
    fn require_admin_rejects_clients() {
        assert!(require_admin(&account(Role::Administrator)).is_ok());
        assert!(matches!(
            require_admin(&account(Role::Client)),
            Err(BookingError::Forbidden)
        ));
    }
}
