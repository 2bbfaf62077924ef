//! Database row types mapping to domain entities.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::{
    Account, AccountId, Event, EventId, EventService, EventStatus, Role, Service, ServiceId,
    Vendor, VendorId,
};
use crate::error::BookingError;

/// A row from the `accounts` table.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    /// Primary key.
    pub id: Uuid,
    /// Unique username.
    pub username: String,
    /// Unique email.
    pub email: String,
    /// Bcrypt password hash.
    pub password_hash: String,
    /// Role discriminator string.
    pub role: String,
    /// Display name.
    pub full_name: String,
    /// Optional contact phone.
    pub phone: Option<String>,
    /// Active flag.
    pub active: bool,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = BookingError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role)
            .ok_or_else(|| BookingError::Persistence(format!("unknown role: {}", row.role)))?;
        Ok(Self {
            id: AccountId::from_uuid(row.id),
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            role,
            full_name: row.full_name,
            phone: row.phone,
            active: row.active,
            created_at: row.created_at,
        })
    }
}

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceRow {
    /// Primary key.
    pub id: Uuid,
    /// Service name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Base price.
    pub base_price: Decimal,
    /// Category label.
    pub category: Option<String>,
    /// Availability flag.
    pub available: bool,
    /// Optional image reference.
    pub image_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<ServiceRow> for Service {
    fn from(row: ServiceRow) -> Self {
        Self {
            id: ServiceId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            base_price: row.base_price,
            category: row.category,
            available: row.available,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

/// A row from the `vendors` table.
#[derive(Debug, Clone, FromRow)]
pub struct VendorRow {
    /// Primary key.
    pub id: Uuid,
    /// Vendor name.
    pub name: String,
    /// Service-type label.
    pub service_type: Option<String>,
    /// Contact person.
    pub contact_name: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Rating 0.00–5.00.
    pub rating: Option<Decimal>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Active flag.
    pub active: bool,
}

impl From<VendorRow> for Vendor {
    fn from(row: VendorRow) -> Self {
        Self {
            id: VendorId::from_uuid(row.id),
            name: row.name,
            service_type: row.service_type,
            contact_name: row.contact_name,
            phone: row.phone,
            email: row.email,
            rating: row.rating,
            notes: row.notes,
            active: row.active,
        }
    }
}

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    /// Primary key.
    pub id: Uuid,
    /// Owning account.
    pub account_id: Uuid,
    /// Event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Scheduled date-time.
    pub scheduled_at: DateTime<Utc>,
    /// Venue.
    pub location: String,
    /// Guest count.
    pub guest_count: Option<i32>,
    /// Estimated budget.
    pub budget: Option<Decimal>,
    /// Status discriminator string.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = BookingError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let status = EventStatus::parse(&row.status)
            .ok_or_else(|| BookingError::Persistence(format!("unknown status: {}", row.status)))?;
        Ok(Self {
            id: EventId::from_uuid(row.id),
            account_id: AccountId::from_uuid(row.account_id),
            title: row.title,
            description: row.description,
            scheduled_at: row.scheduled_at,
            location: row.location,
            guest_count: row.guest_count,
            budget: row.budget,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// A row from the `event_services` table.
#[derive(Debug, Clone, FromRow)]
pub struct EventServiceRow {
    /// Primary key.
    pub id: Uuid,
    /// Parent event.
    pub event_id: Uuid,
    /// Attached service.
    pub service_id: Uuid,
    /// Negotiated price.
    pub agreed_price: Decimal,
    /// Attachment notes.
    pub notes: Option<String>,
    /// Attachment timestamp.
    pub added_at: DateTime<Utc>,
}

impl From<EventServiceRow> for EventService {
    fn from(row: EventServiceRow) -> Self {
        Self {
            id: row.id,
            event_id: EventId::from_uuid(row.event_id),
            service_id: ServiceId::from_uuid(row.service_id),
            agreed_price: row.agreed_price,
            notes: row.notes,
            added_at: row.added_at,
        }
    }
}
