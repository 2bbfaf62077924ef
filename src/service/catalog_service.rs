//! Catalog service: service and vendor management, catalog search.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::{Service, ServiceId, Vendor, VendorId};
use crate::error::BookingError;
use crate::persistence::PostgresStore;

/// Minimum query length for catalog search; shorter queries return nothing
/// rather than scanning the whole catalog.
const MIN_SEARCH_LEN: usize = 2;

/// Default (and maximum) number of search results.
const SEARCH_LIMIT: i64 = 10;

/// Fields for creating or updating a catalog service.
#[derive(Debug, Clone)]
pub struct ServiceInput {
    /// Service name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Base price, must be positive.
    pub base_price: Decimal,
    /// Category label.
    pub category: Option<String>,
    /// Availability flag.
    pub available: bool,
    /// Optional image reference.
    pub image_url: Option<String>,
}

/// Fields for creating or updating a vendor.
#[derive(Debug, Clone)]
pub struct VendorInput {
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

/// Orchestration layer for catalog operations.
///
/// Administrator gating happens at the API boundary; these operations take
/// no actor because the policy for all of them is the same `require_admin`
/// check (reads excepted).
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<PostgresStore>,
}

impl CatalogService {
    /// Creates a new `CatalogService`.
    #[must_use]
    pub fn new(store: Arc<PostgresStore>) -> Self {
        Self { store }
    }

    /// Adds a service to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] on field errors.
    pub async fn create_service(&self, input: ServiceInput) -> Result<Service, BookingError> {
        validate_service_input(&input)?;

        let service = Service {
            id: ServiceId::new(),
            name: input.name,
            description: input.description,
            base_price: input.base_price,
            category: input.category,
            available: input.available,
            image_url: input.image_url,
            created_at: Utc::now(),
        };
        self.store.insert_service(&service).await?;

        tracing::info!(service_id = %service.id, name = %service.name, "service created");
        Ok(service)
    }

    /// Updates an existing catalog service.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown id and
    /// [`BookingError::Validation`] on field errors.
    pub async fn update_service(
        &self,
        id: ServiceId,
        input: ServiceInput,
    ) -> Result<Service, BookingError> {
        validate_service_input(&input)?;

        let mut service = self
            .store
            .get_service(id)
            .await?
            .ok_or(BookingError::NotFound("service"))?;
        service.name = input.name;
        service.description = input.description;
        service.base_price = input.base_price;
        service.category = input.category;
        service.available = input.available;
        service.image_url = input.image_url;

        let updated = self.store.update_service(&service).await?;
        tracing::info!(service_id = %updated.id, "service updated");
        Ok(updated)
    }

    /// Deletes a service; refused while any event references it.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InUse`] with the count of referencing
    /// attachments, or [`BookingError::NotFound`] for an unknown id.
    pub async fn delete_service(&self, id: ServiceId) -> Result<(), BookingError> {
        self.store.delete_service(id).await?;
        tracing::info!(service_id = %id, "service deleted");
        Ok(())
    }

    /// Looks up a single service.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown id.
    pub async fn get_service(&self, id: ServiceId) -> Result<Service, BookingError> {
        self.store
            .get_service(id)
            .await?
            .ok_or(BookingError::NotFound("service"))
    }

    /// Returns the public catalog: available services only.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_available_services(&self) -> Result<Vec<Service>, BookingError> {
        self.store.list_available_services().await
    }

    /// Returns every service including unavailable ones (admin view).
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_all_services(&self) -> Result<Vec<Service>, BookingError> {
        self.store.list_all_services().await
    }

    /// Case-insensitive substring search over available services.
    ///
    /// Queries shorter than two characters return an empty result.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn search_services(&self, query: &str) -> Result<Vec<Service>, BookingError> {
        let Some(query) = searchable_query(query) else {
            return Ok(Vec::new());
        };
        self.store.search_services(query, SEARCH_LIMIT).await
    }

    /// Adds a vendor.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] on field errors.
    pub async fn create_vendor(&self, input: VendorInput) -> Result<Vendor, BookingError> {
        validate_vendor_input(&input)?;

        let vendor = Vendor {
            id: VendorId::new(),
            name: input.name,
            service_type: input.service_type,
            contact_name: input.contact_name,
            phone: input.phone,
            email: input.email,
            rating: input.rating,
            notes: input.notes,
            active: input.active,
        };
        self.store.insert_vendor(&vendor).await?;

        tracing::info!(vendor_id = %vendor.id, name = %vendor.name, "vendor created");
        Ok(vendor)
    }

    /// Updates an existing vendor.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown id and
    /// [`BookingError::Validation`] on field errors.
    pub async fn update_vendor(
        &self,
        id: VendorId,
        input: VendorInput,
    ) -> Result<Vendor, BookingError> {
        validate_vendor_input(&input)?;

        let mut vendor = self
            .store
            .get_vendor(id)
            .await?
            .ok_or(BookingError::NotFound("vendor"))?;
        vendor.name = input.name;
        vendor.service_type = input.service_type;
        vendor.contact_name = input.contact_name;
        vendor.phone = input.phone;
        vendor.email = input.email;
        vendor.rating = input.rating;
        vendor.notes = input.notes;
        vendor.active = input.active;

        let updated = self.store.update_vendor(&vendor).await?;
        tracing::info!(vendor_id = %updated.id, "vendor updated");
        Ok(updated)
    }

    /// Deletes a vendor unconditionally: vendors have no relationships.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown id.
    pub async fn delete_vendor(&self, id: VendorId) -> Result<(), BookingError> {
        self.store.delete_vendor(id).await?;
        tracing::info!(vendor_id = %id, "vendor deleted");
        Ok(())
    }

    /// Looks up a single vendor.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown id.
    pub async fn get_vendor(&self, id: VendorId) -> Result<Vendor, BookingError> {
        self.store
            .get_vendor(id)
            .await?
            .ok_or(BookingError::NotFound("vendor"))
    }

    /// Returns all vendors.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_vendors(&self) -> Result<Vec<Vendor>, BookingError> {
        self.store.list_vendors().await
    }
}

// ── Validation Helpers ──────────────────────────────────────────────────

/// Trims a search query; `None` for anything shorter than two characters.
fn searchable_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    (query.chars().count() >= MIN_SEARCH_LEN).then_some(query)
}

/// Checks that a price is positive, has at most two fraction digits, and
/// fits NUMERIC(10,2).
pub(crate) fn validate_price(price: Decimal, field: &str) -> Result<(), BookingError> {
    if price <= Decimal::ZERO {
        return Err(BookingError::Validation(format!(
            "{field} must be greater than zero"
        )));
    }
    if price.normalize().scale() > 2 {
        return Err(BookingError::Validation(format!(
            "{field} may have at most two decimal places"
        )));
    }
    if price >= Decimal::from(100_000_000_u32) {
        return Err(BookingError::Validation(format!("{field} is too large")));
    }
    Ok(())
}

fn validate_service_input(input: &ServiceInput) -> Result<(), BookingError> {
    let name_len = input.name.chars().count();
    if !(3..=100).contains(&name_len) {
        return Err(BookingError::Validation(
            "service name must be 3-100 characters".to_string(),
        ));
    }
    if let Some(description) = &input.description {
        if description.chars().count() > 1000 {
            return Err(BookingError::Validation(
                "description may not exceed 1000 characters".to_string(),
            ));
        }
    }
    validate_price(input.base_price, "base price")?;
    if let Some(category) = &input.category {
        if category.chars().count() > 50 {
            return Err(BookingError::Validation(
                "category may not exceed 50 characters".to_string(),
            ));
        }
    }
    if let Some(url) = &input.image_url {
        if url.chars().count() > 255 {
            return Err(BookingError::Validation(
                "image url may not exceed 255 characters".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_vendor_input(input: &VendorInput) -> Result<(), BookingError> {
    let name_len = input.name.chars().count();
    if !(3..=150).contains(&name_len) {
        return Err(BookingError::Validation(
            "vendor name must be 3-150 characters".to_string(),
        ));
    }
    if let Some(service_type) = &input.service_type {
        if service_type.chars().count() > 100 {
            return Err(BookingError::Validation(
                "service type may not exceed 100 characters".to_string(),
            ));
        }
    }
    if let Some(contact) = &input.contact_name {
        if contact.chars().count() > 100 {
            return Err(BookingError::Validation(
                "contact name may not exceed 100 characters".to_string(),
            ));
        }
    }
    if let Some(phone) = &input.phone {
        let phone_len = phone.chars().count();
        if !(10..=15).contains(&phone_len) {
            return Err(BookingError::Validation(
                "phone must be 10-15 characters".to_string(),
            ));
        }
    }
    if let Some(rating) = input.rating {
        if rating < Decimal::ZERO || rating > Decimal::from(5) {
            return Err(BookingError::Validation(
                "rating must be between 0 and 5".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn service_input() -> ServiceInput {
        ServiceInput {
            name: "Catering".to_string(),
            description: None,
            base_price: dec!(500.00),
            category: Some("catering".to_string()),
            available: true,
            image_url: None,
        }
    }

    #[test]
    fn valid_service_input_passes() {
        assert!(validate_service_input(&service_input()).is_ok());
    }

    #[test]
    fn short_search_queries_are_rejected() {
        assert_eq!(searchable_query(""), None);
        assert_eq!(searchable_query(" a "), None);
        assert_eq!(searchable_query("ca"), Some("ca"));
        assert_eq!(searchable_query("  flores  "), Some("flores"));
    }

    #[test]
    fn zero_price_is_rejected() {
        let mut input = service_input();
        input.base_price = Decimal::ZERO;
        assert!(validate_service_input(&input).is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        assert!(validate_price(dec!(-1.00), "base price").is_err());
    }

    #[test]
    fn sub_cent_precision_is_rejected() {
        assert!(validate_price(dec!(10.001), "base price").is_err());
        assert!(validate_price(dec!(10.010), "base price").is_ok());
    }

    #[test]
    fn short_name_is_rejected() {
        let mut input = service_input();
        input.name = "ab".to_string();
        assert!(validate_service_input(&input).is_err());
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let input = VendorInput {
            name: "Flores del Sur".to_string(),
            service_type: Some("florist".to_string()),
            contact_name: None,
            phone: None,
            email: None,
            rating: Some(dec!(5.01)),
            notes: None,
            active: true,
        };
        assert!(validate_vendor_input(&input).is_err());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for rating in [dec!(0.00), dec!(5.00)] {
            let input = VendorInput {
                name: "Flores del Sur".to_string(),
                service_type: None,
                contact_name: None,
                phone: None,
                email: None,
                rating: Some(rating),
                notes: None,
                active: true,
            };
            assert!(validate_vendor_input(&input).is_ok());
        }
    }
}
