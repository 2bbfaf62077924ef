//! Booking service: event lifecycle and service attachments.

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::policy::{can_mutate_event, can_view_event};
use crate::domain::{
    Account, Event, EventId, EventService, EventStatus, Service, ServiceId, pricing,
};
use crate::error::BookingError;
use crate::persistence::PostgresStore;

use super::catalog_service::validate_price;

/// Wire format for `scheduled_at`, as submitted by `datetime-local` inputs.
const SCHEDULED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Fields submitted when creating or editing an event.
#[derive(Debug, Clone)]
pub struct EventInput {
    /// Event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Scheduled date-time as `YYYY-MM-DDTHH:MM`.
    pub scheduled_at: String,
    /// Venue.
    pub location: String,
    /// Estimated guest count.
    pub guest_count: Option<i32>,
    /// Estimated budget.
    pub budget: Option<Decimal>,
    /// Requested status. Honored only for administrator actors on edit;
    /// silently ignored otherwise.
    pub status: Option<String>,
}

/// A single event with its attachments and derived total.
#[derive(Debug, Clone)]
pub struct EventDetail {
    /// The event itself.
    pub event: Event,
    /// Service attachments in the order they were added.
    pub attachments: Vec<EventService>,
    /// Exact decimal sum of the attachments' agreed prices.
    pub total: Decimal,
}

/// Aggregate counts for the administrator dashboard.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    /// Number of registered accounts.
    pub total_accounts: i64,
    /// Number of events.
    pub total_events: i64,
    /// Number of catalog services.
    pub total_services: i64,
    /// Number of events still pending.
    pub pending_events: i64,
    /// The five most recently created events.
    pub recent_events: Vec<Event>,
}

/// Orchestration layer for event operations.
///
/// Every mutation follows the pattern: load → authorize via the access
/// policy → validate → mutate → log.
#[derive(Debug, Clone)]
pub struct BookingService {
    store: Arc<PostgresStore>,
}

impl BookingService {
    /// Creates a new `BookingService`.
    #[must_use]
    pub fn new(store: Arc<PostgresStore>) -> Self {
        Self { store }
    }

    /// Creates an event owned by `owner`, always in `pending` status.
    ///
    /// A submitted status is ignored at creation time. If `scheduled_at`
    /// does not parse, nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] on field errors.
    pub async fn create_event(
        &self,
        owner: &Account,
        input: EventInput,
    ) -> Result<Event, BookingError> {
        validate_event_input(&input)?;
        let scheduled_at = parse_scheduled_at(&input.scheduled_at)?;

        let now = Utc::now();
        let event = Event {
            id: EventId::new(),
            account_id: owner.id,
            title: input.title,
            description: input.description,
            scheduled_at,
            location: input.location,
            guest_count: input.guest_count,
            budget: input.budget,
            status: EventStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.store.insert_event(&event).await?;

        tracing::info!(event_id = %event.id, owner = %owner.id, "event created");
        Ok(event)
    }

    /// Returns an event with its attachments and total cost.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown id and
    /// [`BookingError::Forbidden`] when `actor` may not view the event.
    pub async fn get_event(
        &self,
        actor: &Account,
        id: EventId,
    ) -> Result<EventDetail, BookingError> {
        let event = self.load_viewable(actor, id).await?;
        let attachments = self.store.list_attachments(id).await?;
        let total = pricing::total_cost(&attachments);
        Ok(EventDetail {
            event,
            attachments,
            total,
        })
    }

    /// Edits an event's fields.
    ///
    /// Only an administrator actor may change the status; a client-submitted
    /// status is ignored, not rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`], [`BookingError::Forbidden`], or
    /// [`BookingError::Validation`].
    pub async fn edit_event(
        &self,
        actor: &Account,
        id: EventId,
        input: EventInput,
    ) -> Result<Event, BookingError> {
        let mut event = self.load_mutable(actor, id).await?;

        validate_event_input(&input)?;
        let scheduled_at = parse_scheduled_at(&input.scheduled_at)?;

        event.title = input.title;
        event.description = input.description;
        event.scheduled_at = scheduled_at;
        event.location = input.location;
        event.guest_count = input.guest_count;
        event.budget = input.budget;

        if let Some(status) = input.status.as_deref()
            && actor.is_admin()
        {
            event.status = EventStatus::parse(status)
                .ok_or_else(|| BookingError::Validation(format!("unknown status: {status}")))?;
        }
        event.updated_at = Utc::now();

        let updated = self.store.update_event(&event).await?;
        tracing::info!(event_id = %updated.id, "event updated");
        Ok(updated)
    }

    /// Cancels an event: sets `cancelled` unconditionally once authorized,
    /// whatever the current status.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] or [`BookingError::Forbidden`].
    pub async fn cancel_event(&self, actor: &Account, id: EventId) -> Result<Event, BookingError> {
        let mut event = self.load_mutable(actor, id).await?;

        event.status = EventStatus::Cancelled;
        event.updated_at = Utc::now();

        let updated = self.store.update_event(&event).await?;
        tracing::info!(event_id = %updated.id, "event cancelled");
        Ok(updated)
    }

    /// Attaches a catalog service to an event at a negotiated price.
    ///
    /// No upsert: a second attach of the same pair fails.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] (event or service),
    /// [`BookingError::Forbidden`], [`BookingError::Validation`] for a
    /// non-positive price, or [`BookingError::AlreadyAttached`].
    pub async fn attach_service(
        &self,
        actor: &Account,
        event_id: EventId,
        service_id: ServiceId,
        agreed_price: Decimal,
        notes: Option<String>,
    ) -> Result<EventService, BookingError> {
        let _event = self.load_mutable(actor, event_id).await?;
        let service: Service = self
            .store
            .get_service(service_id)
            .await?
            .ok_or(BookingError::NotFound("service"))?;

        validate_price(agreed_price, "agreed price")?;

        let attachment = EventService {
            id: uuid::Uuid::new_v4(),
            event_id,
            service_id,
            agreed_price,
            notes,
            added_at: Utc::now(),
        };
        self.store.insert_attachment(&attachment).await?;

        tracing::info!(
            event_id = %event_id,
            service = %service.name,
            "service attached to event"
        );
        Ok(attachment)
    }

    /// Removes a service attachment from an event.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] (event or attachment) or
    /// [`BookingError::Forbidden`].
    pub async fn detach_service(
        &self,
        actor: &Account,
        event_id: EventId,
        service_id: ServiceId,
    ) -> Result<(), BookingError> {
        let _event = self.load_mutable(actor, event_id).await?;
        self.store.delete_attachment(event_id, service_id).await?;

        tracing::info!(event_id = %event_id, service_id = %service_id, "service detached");
        Ok(())
    }

    /// Returns the events owned by `owner`, scheduled date descending.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_events_for(&self, owner: &Account) -> Result<Vec<Event>, BookingError> {
        self.store.list_events_for(owner.id).await
    }

    /// Returns all events (administrator view), same ordering.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_all_events(&self) -> Result<Vec<Event>, BookingError> {
        self.store.list_all_events().await
    }

    /// Returns the exact decimal total of an event's attached services.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown id and
    /// [`BookingError::Forbidden`] when `actor` may not view the event.
    pub async fn total_cost(&self, actor: &Account, id: EventId) -> Result<Decimal, BookingError> {
        let _event = self.load_viewable(actor, id).await?;
        let attachments = self.store.list_attachments(id).await?;
        Ok(pricing::total_cost(&attachments))
    }

    /// Collects the administrator dashboard counters.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn stats(&self) -> Result<DashboardStats, BookingError> {
        let total_accounts = self.store.count_accounts().await?;
        let total_events = self.store.count_events().await?;
        let total_services = self.store.count_services().await?;
        let pending_events = self
            .store
            .count_events_with_status(EventStatus::Pending.as_str())
            .await?;
        let recent_events = self.store.recent_events(5).await?;

        Ok(DashboardStats {
            total_accounts,
            total_events,
            total_services,
            pending_events,
            recent_events,
        })
    }

    async fn load_viewable(&self, actor: &Account, id: EventId) -> Result<Event, BookingError> {
        let event = self
            .store
            .get_event(id)
            .await?
            .ok_or(BookingError::NotFound("event"))?;
        if !can_view_event(actor, &event) {
            return Err(BookingError::Forbidden);
        }
        Ok(event)
    }

    async fn load_mutable(&self, actor: &Account, id: EventId) -> Result<Event, BookingError> {
        let event = self
            .store
            .get_event(id)
            .await?
            .ok_or(BookingError::NotFound("event"))?;
        if !can_mutate_event(actor, &event) {
            return Err(BookingError::Forbidden);
        }
        Ok(event)
    }
}

// ── Validation Helpers ──────────────────────────────────────────────────

/// Parses the `YYYY-MM-DDTHH:MM` wire format into a UTC timestamp.
fn parse_scheduled_at(raw: &str) -> Result<DateTime<Utc>, BookingError> {
    NaiveDateTime::parse_from_str(raw, SCHEDULED_AT_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| BookingError::Validation("invalid date format, expected YYYY-MM-DDTHH:MM".to_string()))
}

fn validate_event_input(input: &EventInput) -> Result<(), BookingError> {
    let title_len = input.title.chars().count();
    if !(5..=200).contains(&title_len) {
        return Err(BookingError::Validation(
            "title must be 5-200 characters".to_string(),
        ));
    }
    if let Some(description) = &input.description {
        if description.chars().count() > 1000 {
            return Err(BookingError::Validation(
                "description may not exceed 1000 characters".to_string(),
            ));
        }
    }
    let location_len = input.location.chars().count();
    if !(5..=255).contains(&location_len) {
        return Err(BookingError::Validation(
            "location must be 5-255 characters".to_string(),
        ));
    }
    if let Some(guest_count) = input.guest_count {
        if !(1..=10_000).contains(&guest_count) {
            return Err(BookingError::Validation(
                "guest count must be between 1 and 10000".to_string(),
            ));
        }
    }
    if let Some(budget) = input.budget {
        if budget < Decimal::ZERO {
            return Err(BookingError::Validation(
                "budget must not be negative".to_string(),
            ));
        }
        if budget.normalize().scale() > 2 {
            return Err(BookingError::Validation(
                "budget may have at most two decimal places".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn input() -> EventInput {
        EventInput {
            title: "Beach Wedding".to_string(),
            description: None,
            scheduled_at: "2026-09-12T16:30".to_string(),
            location: "Playa del Carmen".to_string(),
            guest_count: Some(80),
            budget: Some(dec!(15000.00)),
            status: None,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(validate_event_input(&input()).is_ok());
    }

    #[test]
    fn scheduled_at_parses_wire_format() {
        let parsed = parse_scheduled_at("2026-09-12T16:30");
        assert!(parsed.is_ok());
    }

    #[test]
    fn scheduled_at_rejects_garbage() {
        for raw in ["12/09/2026", "2026-09-12", "2026-09-12T16:30:00Z", "soon"] {
            assert!(matches!(
                parse_scheduled_at(raw),
                Err(BookingError::Validation(_))
            ));
        }
    }

    #[test]
    fn short_title_is_rejected() {
        let mut i = input();
        i.title = "Gala".to_string();
        assert!(validate_event_input(&i).is_err());
    }

    #[test]
    fn negative_budget_is_rejected() {
        let mut i = input();
        i.budget = Some(dec!(-0.01));
        assert!(validate_event_input(&i).is_err());
    }

    #[test]
    fn zero_budget_is_allowed() {
        let mut i = input();
        i.budget = Some(Decimal::ZERO);
        assert!(validate_event_input(&i).is_ok());
    }

    #[test]
    fn guest_count_bounds() {
        let mut i = input();
        i.guest_count = Some(0);
        assert!(validate_event_input(&i).is_err());
        i.guest_count = Some(10_001);
        assert!(validate_event_input(&i).is_err());
        i.guest_count = Some(10_000);
        assert!(validate_event_input(&i).is_ok());
    }
}
