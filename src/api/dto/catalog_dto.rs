//! Catalog DTOs: services and vendors.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::{Service, Vendor};

/// Request body for creating or updating a catalog service.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ServiceRequest {
    /// Service name (3–100 characters).
    pub name: String,
    /// Optional description (≤1000 characters).
    #[serde(default)]
    pub description: Option<String>,
    /// Base price, must be positive.
    pub base_price: Decimal,
    /// Category label.
    #[serde(default)]
    pub category: Option<String>,
    /// Availability flag. Defaults to `true`.
    #[serde(default = "default_available")]
    pub available: bool,
    /// Optional image reference.
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_available() -> bool {
    true
}

/// Public view of a catalog service.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceResponse {
    /// Service identifier.
    pub id: Uuid,
    /// Service name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Base price.
    pub base_price: Decimal,
    /// Category label.
    pub category: Option<String>,
    /// Availability flag.
    pub available: bool,
    /// Image reference.
    pub image_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Service> for ServiceResponse {
    fn from(service: &Service) -> Self {
        Self {
            id: *service.id.as_uuid(),
            name: service.name.clone(),
            description: service.description.clone(),
            base_price: service.base_price,
            category: service.category.clone(),
            available: service.available,
            image_url: service.image_url.clone(),
            created_at: service.created_at,
        }
    }
}

/// Query parameters for `GET /services/search`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Partial service name; queries shorter than 2 characters return an
    /// empty result.
    #[serde(default)]
    pub q: String,
}

/// Request body for creating or updating a vendor.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VendorRequest {
    /// Vendor name (3–150 characters).
    pub name: String,
    /// Service-type label.
    #[serde(default)]
    pub service_type: Option<String>,
    /// Contact person.
    #[serde(default)]
    pub contact_name: Option<String>,
    /// Contact phone (10–15 characters).
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Rating 0.00–5.00.
    #[serde(default)]
    pub rating: Option<Decimal>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Active flag. Defaults to `true`.
    #[serde(default = "default_available")]
    pub active: bool,
}

/// Public view of a vendor.
#[derive(Debug, Serialize, ToSchema)]
pub struct VendorResponse {
    /// Vendor identifier.
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

impl From<&Vendor> for VendorResponse {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: *vendor.id.as_uuid(),
            name: vendor.name.clone(),
            service_type: vendor.service_type.clone(),
            contact_name: vendor.contact_name.clone(),
            phone: vendor.phone.clone(),
            email: vendor.email.clone(),
            rating: vendor.rating,
            notes: vendor.notes.clone(),
            active: vendor.active,
        }
    }
}
