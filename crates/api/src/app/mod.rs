//! HTTP API application wiring (Axum router + store wiring).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use sqlx::SqlitePool;
use tower::ServiceBuilder;

use stockroom_infra::ItemStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The persistence gateway is constructed here and handed to every handler
/// through an `Extension`; there is no other shared state between requests.
pub async fn build_app(pool: SqlitePool) -> Router {
    let store = Arc::new(ItemStore::new(pool));
    store
        .ensure_schema()
        .await
        .expect("failed to initialize inventory schema");

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(Extension(store))
                .layer(axum::middleware::from_fn(middleware::trace_requests)),
        )
}
