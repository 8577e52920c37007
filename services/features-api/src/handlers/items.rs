//! Feature item handlers.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
};
use features_protocol::{Feature, FeatureCollection, FeatureResult, MediaType};
use std::sync::Arc;
use tracing::instrument;

use super::{error_response, json_response};
use crate::state::AppState;

#[instrument(skip(state))]
async fn list_items(state: &AppState, collection_id: &str) -> FeatureResult<FeatureCollection> {
    let provider = state.registry.instance(collection_id)?;
    provider.items().await
}

#[instrument(skip(state))]
async fn find_item(state: &AppState, collection_id: &str, feature_id: &str) -> FeatureResult<Feature> {
    let provider = state.registry.instance(collection_id)?;
    provider.item(feature_id).await
}

/// GET /collections/:collection_id/items - Feature listing
pub async fn items_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(collection_id): Path<String>,
) -> Response {
    match list_items(&state, &collection_id).await {
        Ok(collection) => json_response(
            StatusCode::OK,
            MediaType::GeoJson.as_str(),
            None,
            &collection,
        ),
        Err(e) => error_response(&e),
    }
}

/// GET /collections/:collection_id/items/:feature_id - One feature
pub async fn item_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((collection_id, feature_id)): Path<(String, String)>,
) -> Response {
    match find_item(&state, &collection_id, &feature_id).await {
        Ok(feature) => json_response(StatusCode::OK, MediaType::GeoJson.as_str(), None, &feature),
        Err(e) => error_response(&e),
    }
}
