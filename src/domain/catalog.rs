//! Catalog entities: services offered to clients and external vendors.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{ServiceId, VendorId};

/// A bookable service in the catalog.
///
/// The `base_price` is a starting point; the price actually charged for an
/// event is negotiated per attachment (see [`super::EventService`]).
#[derive(Debug, Clone)]
pub struct Service {
    /// Unique service identifier.
    pub id: ServiceId,
    /// Service name (3–100 characters).
    pub name: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Base price, always positive, two fraction digits.
    pub base_price: Decimal,
    /// Category label (e.g. `"catering"`, `"decoration"`).
    pub category: Option<String>,
    /// Whether the service appears in the public catalog and search.
    pub available: bool,
    /// Optional image reference for the catalog view.
    pub image_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// An external vendor the business works with.
///
/// Legacy standalone record: no relationship to [`Service`] or
/// [`super::Event`], and deletable unconditionally.
#[derive(Debug, Clone)]
pub struct Vendor {
    /// Unique vendor identifier.
    pub id: VendorId,
    /// Vendor name (3–150 characters).
    pub name: String,
    /// What the vendor provides (e.g. `"photographer"`, `"florist"`).
    pub service_type: Option<String>,
    /// Contact person.
    pub contact_name: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Rating from 0.00 to 5.00.
    pub rating: Option<Decimal>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Active flag.
    pub active: bool,
}
