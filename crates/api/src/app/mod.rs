//! HTTP API application wiring (Axum router + store wiring).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use shopcart_items::ItemStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Item store shared by all request handlers.
pub type SharedItemStore = Arc<dyn ItemStore>;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The store is injected so callers (tests, the binary) each own their data.
pub fn build_app(store: SharedItemStore) -> Router {
    let router = Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::system::not_found)
        .layer(Extension(store));
    middleware::stack(router)
}
