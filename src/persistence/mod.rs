//! Persistence layer: PostgreSQL storage for the booking domain.
//!
//! The database is the single source of truth. Cross-request invariants
//! (username, email, and `(event, service)` uniqueness) are enforced by
//! unique indexes, never by read-then-write checks; the store maps
//! constraint violations to the matching typed errors.

pub mod models;
pub mod postgres;

pub use postgres::PostgresStore;
