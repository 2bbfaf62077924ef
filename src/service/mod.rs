//! Service layer: orchestrates domain operations over the store.
//!
//! Each service is a stateless coordinator following the same pattern:
//! validate → authorize → mutate → log → return. Authorization always takes
//! the acting account explicitly; nothing is ambient.

pub mod account_service;
pub mod booking_service;
pub mod catalog_service;

pub use account_service::AccountService;
pub use booking_service::BookingService;
pub use catalog_service::CatalogService;
