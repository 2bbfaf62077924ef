//! Domain layer: entities, identifiers, access policy, and pricing.
//!
//! This module contains the booking domain model (accounts with roles,
//! the service/vendor catalog, the event aggregate with its service
//! attachments) plus the pure policy functions gating access and the
//! pricing fold over attachments.

pub mod account;
pub mod catalog;
pub mod event;
pub mod ids;
pub mod policy;
pub mod pricing;

pub use account::{Account, Role};
pub use catalog::{Service, Vendor};
pub use event::{Event, EventService, EventStatus};
pub use ids::{AccountId, EventId, ServiceId, VendorId};
