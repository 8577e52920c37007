//! Features API Service Library
//!
//! This crate provides the HTTP server implementation for the
//! OGC API - Features specification, serving tropical cyclone
//! locations and tracks from PostGIS.

pub mod collection;
pub mod config;
pub mod context;
pub mod features;
pub mod handlers;
pub mod provider;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Landing page
        .route("/", get(handlers::landing::landing_handler))
        // Conformance
        .route(
            "/conformance",
            get(handlers::conformance::conformance_handler),
        )
        // Collections
        .route(
            "/collections",
            get(handlers::collections::list_collections_handler),
        )
        .route(
            "/collections/:collection_id",
            get(handlers::collections::get_collection_handler),
        )
        // Items
        .route(
            "/collections/:collection_id/items",
            get(handlers::items::items_handler),
        )
        .route(
            "/collections/:collection_id/items/:feature_id",
            get(handlers::items::item_handler),
        )
        // Health
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
