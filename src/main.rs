//! celebra-booking server entry point.
//!
//! Starts the Axum HTTP server over the PostgreSQL-backed booking store.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use celebra_booking::api;
use celebra_booking::app_state::AppState;
use celebra_booking::config::AppConfig;
use celebra_booking::persistence::PostgresStore;
use celebra_booking::service::{AccountService, BookingService, CatalogService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting celebra-booking");

    // Connect to PostgreSQL
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await?;

    // Build the store and apply migrations
    let store = Arc::new(PostgresStore::new(pool));
    if config.migrate_on_startup {
        store.migrate().await?;
        tracing::info!("database migrations applied");
    }

    // Build the service layer
    let app_state = AppState {
        accounts: Arc::new(AccountService::new(Arc::clone(&store))),
        catalog: Arc::new(CatalogService::new(Arc::clone(&store))),
        bookings: Arc::new(BookingService::new(Arc::clone(&store))),
    };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
