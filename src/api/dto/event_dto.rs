//! Event DTOs: lifecycle, attachments, admin views.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Event, EventService};
use crate::service::booking_service::{DashboardStats, EventDetail};

use super::common_dto::PaginationMeta;

/// Request body for creating or editing an event.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EventRequest {
    /// Event title (5–200 characters).
    pub title: String,
    /// Optional description (≤1000 characters).
    #[serde(default)]
    pub description: Option<String>,
    /// Scheduled date-time as `YYYY-MM-DDTHH:MM`.
    pub scheduled_at: String,
    /// Venue (5–255 characters).
    pub location: String,
    /// Estimated guest count (1–10000).
    #[serde(default)]
    pub guest_count: Option<i32>,
    /// Estimated budget.
    #[serde(default)]
    pub budget: Option<Decimal>,
    /// Requested status. Honored only for administrator actors on edit;
    /// silently ignored otherwise.
    #[serde(default)]
    pub status: Option<String>,
}

/// Public view of an event.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    /// Event identifier.
    pub id: Uuid,
    /// Owning account identifier.
    pub account_id: Uuid,
    /// Event title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Scheduled date-time.
    pub scheduled_at: DateTime<Utc>,
    /// Venue.
    pub location: String,
    /// Estimated guest count.
    pub guest_count: Option<i32>,
    /// Estimated budget.
    pub budget: Option<Decimal>,
    /// Lifecycle status string.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: *event.id.as_uuid(),
            account_id: *event.account_id.as_uuid(),
            title: event.title.clone(),
            description: event.description.clone(),
            scheduled_at: event.scheduled_at,
            location: event.location.clone(),
            guest_count: event.guest_count,
            budget: event.budget,
            status: event.status.as_str().to_string(),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// Request body for attaching a service to an event.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AttachServiceRequest {
    /// The catalog service to attach.
    pub service_id: Uuid,
    /// Negotiated price for this event, must be positive.
    pub agreed_price: Decimal,
    /// Attachment-specific notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// One service attachment on an event.
#[derive(Debug, Serialize, ToSchema)]
pub struct AttachmentResponse {
    /// Attachment identifier.
    pub id: Uuid,
    /// Attached service identifier.
    pub service_id: Uuid,
    /// Negotiated price.
    pub agreed_price: Decimal,
    /// Attachment notes.
    pub notes: Option<String>,
    /// When the service was attached.
    pub added_at: DateTime<Utc>,
}

impl From<&EventService> for AttachmentResponse {
    fn from(attachment: &EventService) -> Self {
        Self {
            id: attachment.id,
            service_id: *attachment.service_id.as_uuid(),
            agreed_price: attachment.agreed_price,
            notes: attachment.notes.clone(),
            added_at: attachment.added_at,
        }
    }
}

/// Full event detail: the event, its attachments, and the derived total.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventDetailResponse {
    /// The event itself.
    pub event: EventResponse,
    /// Attached services in the order they were added.
    pub services: Vec<AttachmentResponse>,
    /// Exact decimal sum of the agreed prices.
    pub total_cost: Decimal,
}

impl From<&EventDetail> for EventDetailResponse {
    fn from(detail: &EventDetail) -> Self {
        Self {
            event: EventResponse::from(&detail.event),
            services: detail.attachments.iter().map(AttachmentResponse::from).collect(),
            total_cost: detail.total,
        }
    }
}

/// Paginated event list (administrator view).
#[derive(Debug, Serialize, ToSchema)]
pub struct EventListResponse {
    /// Events on this page.
    pub data: Vec<EventResponse>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

/// Administrator dashboard counters.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Number of registered accounts.
    pub total_accounts: i64,
    /// Number of events.
    pub total_events: i64,
    /// Number of catalog services.
    pub total_services: i64,
    /// Number of events still pending.
    pub pending_events: i64,
    /// The five most recently created events.
    pub recent_events: Vec<EventResponse>,
}

impl From<&DashboardStats> for StatsResponse {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            total_accounts: stats.total_accounts,
            total_events: stats.total_events,
            total_services: stats.total_services,
            pending_events: stats.pending_events,
            recent_events: stats.recent_events.iter().map(EventResponse::from).collect(),
        }
    }
}
