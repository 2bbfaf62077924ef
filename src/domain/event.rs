//! Event aggregate: the booking itself plus its service attachments.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{AccountId, EventId, ServiceId};

/// Lifecycle state of an [`Event`].
///
/// `Pending` is the initial state. The exposed cancel operation sets
/// `Cancelled` unconditionally once authorized, including on a completed
/// event; no transition is defined out of `Cancelled` or `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// Newly created, awaiting confirmation.
    Pending,
    /// Confirmed by an administrator.
    Confirmed,
    /// Cancelled by the owner or an administrator.
    Cancelled,
    /// The event took place.
    Completed,
}

impl EventStatus {
    /// Returns the storage/wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Parses a stored status string. Returns `None` for unknown values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// An event booked by a client.
///
/// Owned exclusively by one account; deleting the account deletes the event,
/// and deleting the event deletes its [`EventService`] attachments.
#[derive(Debug, Clone)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Owning account.
    pub account_id: AccountId,
    /// Event title (5–200 characters).
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the event takes place.
    pub scheduled_at: DateTime<Utc>,
    /// Venue address or name (5–255 characters).
    pub location: String,
    /// Estimated number of guests.
    pub guest_count: Option<i32>,
    /// Estimated budget, two fraction digits.
    pub budget: Option<Decimal>,
    /// Lifecycle state.
    pub status: EventStatus,
    /// Creation timestamp (immutable).
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last mutation.
    pub updated_at: DateTime<Utc>,
}

/// Attachment of a catalog service to an event, at a negotiated price.
///
/// At most one attachment exists per `(event, service)` pair. The
/// `agreed_price` is independent of the service's base price.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Attachment row identifier.
    pub id: uuid::Uuid,
    /// The event this attachment belongs to.
    pub event_id: EventId,
    /// The attached catalog service.
    pub service_id: ServiceId,
    /// Price agreed for this event, always positive, two fraction digits.
    pub agreed_price: Decimal,
    /// Attachment-specific notes.
    pub notes: Option<String>,
    /// When the service was attached.
    pub added_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for status in [
            EventStatus::Pending,
            EventStatus::Confirmed,
            EventStatus::Cancelled,
            EventStatus::Completed,
        ] {
            assert_eq!(EventStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(EventStatus::parse("postponed"), None);
    }
}
