//! Data Transfer Objects for REST request/response serialization.
//!
//! Prices are `rust_decimal` values that serialize as JSON strings, so no
//! precision is lost on the wire.

pub mod account_dto;
pub mod catalog_dto;
pub mod common_dto;
pub mod event_dto;

pub use account_dto::*;
pub use catalog_dto::*;
pub use common_dto::*;
pub use event_dto::*;
