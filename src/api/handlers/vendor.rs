//! Vendor administration handlers.
//!
//! Vendors mirror service CRUD but without the in-use delete guard: they
//! have no relationship to events or services and delete unconditionally.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{VendorRequest, VendorResponse};
use crate::api::extract::CurrentAdmin;
use crate::app_state::AppState;
use crate::domain::VendorId;
use crate::error::{BookingError, ErrorResponse};
use crate::service::catalog_service::VendorInput;

/// `GET /admin/vendors` — List all vendors.
///
/// # Errors
///
/// Returns [`BookingError::Forbidden`] for non-administrators.
#[utoipa::path(
    get,
    path = "/api/v1/admin/vendors",
    tag = "Vendors",
    summary = "List vendors",
    responses(
        (status = 200, description = "All vendors", body = Vec<VendorResponse>),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
    )
)]
pub async fn list_vendors(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BookingError> {
    let vendors = state.catalog.list_vendors().await?;
    let data: Vec<VendorResponse> = vendors.iter().map(VendorResponse::from).collect();
    Ok(Json(data))
}

/// `GET /admin/vendors/:id` — Single vendor detail.
///
/// # Errors
///
/// Returns [`BookingError::NotFound`] for an unknown id.
#[utoipa::path(
    get,
    path = "/api/v1/admin/vendors/{id}",
    tag = "Vendors",
    summary = "Get a vendor",
    params(
        ("id" = uuid::Uuid, Path, description = "Vendor UUID"),
    ),
    responses(
        (status = 200, description = "Vendor detail", body = VendorResponse),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
    )
)]
pub async fn get_vendor(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, BookingError> {
    let vendor = state.catalog.get_vendor(VendorId::from_uuid(id)).await?;
    Ok(Json(VendorResponse::from(&vendor)))
}

/// `POST /admin/vendors` — Add a vendor.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] on field errors.
#[utoipa::path(
    post,
    path = "/api/v1/admin/vendors",
    tag = "Vendors",
    summary = "Create a vendor",
    request_body = VendorRequest,
    responses(
        (status = 201, description = "Vendor created", body = VendorResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
    )
)]
pub async fn create_vendor(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
    Json(req): Json<VendorRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let vendor = state.catalog.create_vendor(vendor_input(req)).await?;
    Ok((StatusCode::CREATED, Json(VendorResponse::from(&vendor))))
}

/// `PUT /admin/vendors/:id` — Update a vendor.
///
/// # Errors
///
/// Returns [`BookingError`] on validation failure or unknown id.
#[utoipa::path(
    put,
    path = "/api/v1/admin/vendors/{id}",
    tag = "Vendors",
    summary = "Update a vendor",
    params(
        ("id" = uuid::Uuid, Path, description = "Vendor UUID"),
    ),
    request_body = VendorRequest,
    responses(
        (status = 200, description = "Updated vendor", body = VendorResponse),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
    )
)]
pub async fn update_vendor(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<VendorRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let vendor = state
        .catalog
        .update_vendor(VendorId::from_uuid(id), vendor_input(req))
        .await?;
    Ok(Json(VendorResponse::from(&vendor)))
}

/// `DELETE /admin/vendors/:id` — Delete a vendor unconditionally.
///
/// # Errors
///
/// Returns [`BookingError::NotFound`] for an unknown id.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/vendors/{id}",
    tag = "Vendors",
    summary = "Delete a vendor",
    params(
        ("id" = uuid::Uuid, Path, description = "Vendor UUID"),
    ),
    responses(
        (status = 204, description = "Vendor deleted"),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
    )
)]
pub async fn delete_vendor(
    CurrentAdmin(_admin): CurrentAdmin,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, BookingError> {
    state.catalog.delete_vendor(VendorId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn vendor_input(req: VendorRequest) -> VendorInput {
    VendorInput {
        name: req.name,
        service_type: req.service_type,
        contact_name: req.contact_name,
        phone: req.phone,
        email: req.email,
        rating: req.rating,
        notes: req.notes,
        active: req.active,
    }
}

/// Vendor routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/vendors", get(list_vendors).post(create_vendor))
        .route(
            "/admin/vendors/{id}",
            get(get_vendor).put(update_vendor).delete(delete_vendor),
        )
}
