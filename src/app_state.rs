//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{AccountService, BookingService, CatalogService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Identity operations: registration, sessions, account management.
    pub accounts: Arc<AccountService>,
    /// Catalog operations: services and vendors.
    pub catalog: Arc<CatalogService>,
    /// Event operations: lifecycle, attachments, totals.
    pub bookings: Arc<BookingService>,
}
