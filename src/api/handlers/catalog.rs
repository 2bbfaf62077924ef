//! Catalog handlers: public catalog, search, and service administration.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{SearchParams, ServiceRequest, ServiceResponse};
use crate::api::extract::CurrentAdmin;
use crate::app_state::AppState;
use crate::domain::ServiceId;
use crate::error::{BookingError, ErrorResponse};
use crate::service::catalog_service::ServiceInput;

/// `GET /services` — Public catalog of available services.
///
/// # Errors
///
/// Returns [`BookingError`] on internal failures.
#[utoipa::path(
    get,
    path = "/api/v1/services",
    tag = "Catalog",
    summary = "List available services",
    description = "The public catalog: services with the availability flag set, in name order.",
    responses(
        (status = 200, description = "Available services", body = Vec<ServiceResponse>),
    )
)]
pub async fn list_available(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BookingError> {
    let services = state.catalog.list_available_services().await?;
    let data: Vec<ServiceResponse> = services.iter().map(ServiceResponse::from).collect();
    Ok(Json(data))
}

/// `GET /services/search` — Search available services by partial name.
///
/// # Errors
///
/// Returns [`BookingError`] on internal failures.
#[utoipa::path(
    get,
    path = "/api/v1/services/search",
    tag = "Catalog",
    summary = "Search services",
    description = "Case-insensitive substring match on name over available services. Queries shorter than 2 characters return an empty result; at most 10 results.",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching services", body = Vec<ServiceResponse>),
    )
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, BookingError> {
    let services = state.catalog.search_services(&params.q).await?;
    let data: Vec<ServiceResponse> = services.iter().map(ServiceResponse::from).collect();
    Ok(Json(data))
}

/// `GET /admin/services` — All services, including unavailable ones.
///
/// # Errors
///
/// Returns [`BookingError::Forbidden`] for non-administrators.
#[utoipa::path(
    get,
    path = "/api/v1/admin/services",
    tag = "Catalog",
    summary = "List all services",
    description = "Administrator view of the full catalog.",
    responses(
        (status = 200, description = "All services", body = Vec<ServiceResponse>),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
    )
)]
pub async fn list_all(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BookingError> {
    let services = state.catalog.list_all_services().await?;
    let data: Vec<ServiceResponse> = services.iter().map(ServiceResponse::from).collect();
    Ok(Json(data))
}

/// `GET /admin/services/:id` — Single service detail.
///
/// # Errors
///
/// Returns [`BookingError::NotFound`] for an unknown id.
#[utoipa::path(
    get,
    path = "/api/v1/admin/services/{id}",
    tag = "Catalog",
    summary = "Get a service",
    params(
        ("id" = uuid::Uuid, Path, description = "Service UUID"),
    ),
    responses(
        (status = 200, description = "Service detail", body = ServiceResponse),
        (status = 404, description = "Service not found", body = ErrorResponse),
    )
)]
pub async fn get_service(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, BookingError> {
    let service = state.catalog.get_service(ServiceId::from_uuid(id)).await?;
    Ok(Json(ServiceResponse::from(&service)))
}

/// `POST /admin/services` — Add a service to the catalog.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] on field errors.
#[utoipa::path(
    post,
    path = "/api/v1/admin/services",
    tag = "Catalog",
    summary = "Create a service",
    request_body = ServiceRequest,
    responses(
        (status = 201, description = "Service created", body = ServiceResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
    )
)]
pub async fn create_service(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
    Json(req): Json<ServiceRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let service = state.catalog.create_service(service_input(req)).await?;
    Ok((StatusCode::CREATED, Json(ServiceResponse::from(&service))))
}

/// `PUT /admin/services/:id` — Update a service.
///
/// # Errors
///
/// Returns [`BookingError`] on validation failure or unknown id.
#[utoipa::path(
    put,
    path = "/api/v1/admin/services/{id}",
    tag = "Catalog",
    summary = "Update a service",
    params(
        ("id" = uuid::Uuid, Path, description = "Service UUID"),
    ),
    request_body = ServiceRequest,
    responses(
        (status = 200, description = "Updated service", body = ServiceResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 404, description = "Service not found", body = ErrorResponse),
    )
)]
pub async fn update_service(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<ServiceRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let service = state
        .catalog
        .update_service(ServiceId::from_uuid(id), service_input(req))
        .await?;
    Ok(Json(ServiceResponse::from(&service)))
}

/// `DELETE /admin/services/:id` — Delete a service.
///
/// Deletion is refused, not cascaded, while any event references the
/// service; the count of referencing events is surfaced.
///
/// # Errors
///
/// Returns [`BookingError::InUse`] or [`BookingError::NotFound`].
#[utoipa::path(
    delete,
    path = "/api/v1/admin/services/{id}",
    tag = "Catalog",
    summary = "Delete a service",
    params(
        ("id" = uuid::Uuid, Path, description = "Service UUID"),
    ),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found", body = ErrorResponse),
        (status = 409, description = "Service is in use", body = ErrorResponse),
    )
)]
pub async fn delete_service(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, BookingError> {
    state.catalog.delete_service(ServiceId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn service_input(req: ServiceRequest) -> ServiceInput {
    ServiceInput {
        name: req.name,
        description: req.description,
        base_price: req.base_price,
        category: req.category,
        available: req.available,
        image_url: req.image_url,
    }
}

/// Catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_available))
        .route("/services/search", get(search))
        .route("/admin/services", get(list_all).post(create_service))
        .route(
            "/admin/services/{id}",
            get(get_service).put(update_service).delete(delete_service),
        )
}
