//! Event handlers: lifecycle, attachments, and administrator views.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    AttachServiceRequest, AttachmentResponse, EventDetailResponse, EventListResponse,
    EventRequest, EventResponse, PaginationMeta, PaginationParams, StatsResponse,
};
use crate::api::extract::{CurrentAccount, CurrentAdmin};
use crate::app_state::AppState;
use crate::domain::{EventId, ServiceId};
use crate::error::{BookingError, ErrorResponse};
use crate::service::booking_service::EventInput;

/// `POST /events` — Create an event.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] on field errors, including an
/// unparseable `scheduled_at`.
#[utoipa::path(
    post,
    path = "/api/v1/events",
    tag = "Events",
    summary = "Create an event",
    description = "Creates an event owned by the authenticated account, always in pending status.",
    request_body = EventRequest,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
pub async fn create_event(
    CurrentAccount(actor): CurrentAccount,
    State(state): State<AppState>,
    Json(req): Json<EventRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let event = state.bookings.create_event(&actor, event_input(req)).await?;
    Ok((StatusCode::CREATED, Json(EventResponse::from(&event))))
}

/// `GET /events` — The authenticated account's events.
///
/// # Errors
///
/// Returns [`BookingError`] on internal failures.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Events",
    summary = "List own events",
    description = "Events owned by the authenticated account, scheduled date descending.",
    responses(
        (status = 200, description = "Owned events", body = Vec<EventResponse>),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
pub async fn list_events(
    CurrentAccount(actor): CurrentAccount,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BookingError> {
    let events = state.bookings.list_events_for(&actor).await?;
    let data: Vec<EventResponse> = events.iter().map(EventResponse::from).collect();
    Ok(Json(data))
}

/// `GET /events/:id` — Event detail with attachments and total cost.
///
/// # Errors
///
/// Returns [`BookingError::Forbidden`] unless the actor owns the event or
/// is an administrator.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    tag = "Events",
    summary = "Get event detail",
    description = "The event, its attached services, and the exact decimal total of the agreed prices.",
    params(
        ("id" = uuid::Uuid, Path, description = "Event UUID"),
    ),
    responses(
        (status = 200, description = "Event detail", body = EventDetailResponse),
        (status = 403, description = "Not the owner or an administrator", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    CurrentAccount(actor): CurrentAccount,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, BookingError> {
    let detail = state
        .bookings
        .get_event(&actor, EventId::from_uuid(id))
        .await?;
    Ok(Json(EventDetailResponse::from(&detail)))
}

/// `PUT /events/:id` — Edit an event.
///
/// Only an administrator actor may change the status; a client-submitted
/// status is ignored, not rejected.
///
/// # Errors
///
/// Returns [`BookingError`] on authorization or validation failure.
#[utoipa::path(
    put,
    path = "/api/v1/events/{id}",
    tag = "Events",
    summary = "Edit an event",
    params(
        ("id" = uuid::Uuid, Path, description = "Event UUID"),
    ),
    request_body = EventRequest,
    responses(
        (status = 200, description = "Updated event", body = EventResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 403, description = "Not the owner or an administrator", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn edit_event(
    CurrentAccount(actor): CurrentAccount,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<EventRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let event = state
        .bookings
        .edit_event(&actor, EventId::from_uuid(id), event_input(req))
        .await?;
    Ok(Json(EventResponse::from(&event)))
}

/// `POST /events/:id/cancel` — Cancel an event.
///
/// # Errors
///
/// Returns [`BookingError::Forbidden`] or [`BookingError::NotFound`].
#[utoipa::path(
    post,
    path = "/api/v1/events/{id}/cancel",
    tag = "Events",
    summary = "Cancel an event",
    description = "Sets status to cancelled unconditionally once authorized, whatever the current status.",
    params(
        ("id" = uuid::Uuid, Path, description = "Event UUID"),
    ),
    responses(
        (status = 200, description = "Cancelled event", body = EventResponse),
        (status = 403, description = "Not the owner or an administrator", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn cancel_event(
    CurrentAccount(actor): CurrentAccount,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, BookingError> {
    let event = state
        .bookings
        .cancel_event(&actor, EventId::from_uuid(id))
        .await?;
    Ok(Json(EventResponse::from(&event)))
}

/// `POST /events/:id/services` — Attach a catalog service.
///
/// # Errors
///
/// Returns [`BookingError::AlreadyAttached`] when the pair exists; there
/// is no upsert.
#[utoipa::path(
    post,
    path = "/api/v1/events/{id}/services",
    tag = "Events",
    summary = "Attach a service to an event",
    description = "Attaches a catalog service at a negotiated price, independent of the service's base price.",
    params(
        ("id" = uuid::Uuid, Path, description = "Event UUID"),
    ),
    request_body = AttachServiceRequest,
    responses(
        (status = 201, description = "Service attached", body = AttachmentResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 404, description = "Event or service not found", body = ErrorResponse),
        (status = 409, description = "Service already attached", body = ErrorResponse),
    )
)]
pub async fn attach_service(
    CurrentAccount(actor): CurrentAccount,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<AttachServiceRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let attachment = state
        .bookings
        .attach_service(
            &actor,
            EventId::from_uuid(id),
            ServiceId::from_uuid(req.service_id),
            req.agreed_price,
            req.notes,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(AttachmentResponse::from(&attachment))))
}

/// `DELETE /events/:id/services/:service_id` — Detach a service.
///
/// # Errors
///
/// Returns [`BookingError::NotFound`] when the pair is not attached.
#[utoipa::path(
    delete,
    path = "/api/v1/events/{id}/services/{service_id}",
    tag = "Events",
    summary = "Detach a service from an event",
    params(
        ("id" = uuid::Uuid, Path, description = "Event UUID"),
        ("service_id" = uuid::Uuid, Path, description = "Service UUID"),
    ),
    responses(
        (status = 204, description = "Service detached"),
        (status = 403, description = "Not the owner or an administrator", body = ErrorResponse),
        (status = 404, description = "Event or attachment not found", body = ErrorResponse),
    )
)]
pub async fn detach_service(
    CurrentAccount(actor): CurrentAccount,
    State(state): State<AppState>,
    Path((id, service_id)): Path<(uuid::Uuid, uuid::Uuid)>,
) -> Result<impl IntoResponse, BookingError> {
    state
        .bookings
        .detach_service(
            &actor,
            EventId::from_uuid(id),
            ServiceId::from_uuid(service_id),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /admin/events` — All events, paginated.
///
/// # Errors
///
/// Returns [`BookingError::Forbidden`] for non-administrators.
#[utoipa::path(
    get,
    path = "/api/v1/admin/events",
    tag = "Events",
    summary = "List all events",
    description = "Administrator view of every event, scheduled date descending.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated event list", body = EventListResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
    )
)]
pub async fn list_all_events(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, BookingError> {
    let params = params.clamped();
    let events = state.bookings.list_all_events().await?;

    let total = events.len() as u32;
    let per_page = params.per_page;
    let page = params.page;
    let total_pages = if total == 0 {
        0
    } else {
        total.div_ceil(per_page)
    };

    let start = ((page - 1) * per_page) as usize;
    let data: Vec<EventResponse> = events
        .iter()
        .skip(start)
        .take(per_page as usize)
        .map(EventResponse::from)
        .collect();

    Ok(Json(EventListResponse {
        data,
        pagination: PaginationMeta {
            page,
            per_page,
            total,
            total_pages,
        },
    }))
}

/// `GET /admin/stats` — Dashboard counters.
///
/// # Errors
///
/// Returns [`BookingError::Forbidden`] for non-administrators.
#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    tag = "Events",
    summary = "Dashboard statistics",
    description = "Totals of accounts, events, and services, the pending-event count, and the five most recently created events.",
    responses(
        (status = 200, description = "Dashboard counters", body = StatsResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
    )
)]
pub async fn stats(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BookingError> {
    let stats = state.bookings.stats().await?;
    Ok(Json(StatsResponse::from(&stats)))
}

fn event_input(req: EventRequest) -> EventInput {
    EventInput {
        title: req.title,
        description: req.description,
        scheduled_at: req.scheduled_at,
        location: req.location,
        guest_count: req.guest_count,
        budget: req.budget,
        status: req.status,
    }
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event).get(list_events))
        .route("/events/{id}", get(get_event).put(edit_event))
        .route("/events/{id}/cancel", post(cancel_event))
        .route("/events/{id}/services", post(attach_service))
        .route("/events/{id}/services/{service_id}", axum::routing::delete(detach_service))
        .route("/admin/events", get(list_all_events))
        .route("/admin/stats", get(stats))
}
