//! REST endpoint handlers organized by resource.

pub mod account;
pub mod catalog;
pub mod event;
pub mod session;
pub mod system;
pub mod vendor;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(account::routes())
        .merge(session::routes())
        .merge(catalog::routes())
        .merge(vendor::routes())
        .merge(event::routes())
}
