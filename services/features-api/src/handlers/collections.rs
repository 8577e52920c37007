//! Collections endpoint handlers.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
};
use std::sync::Arc;

use super::{error_response, json_response};
use crate::state::AppState;

/// GET /collections - List all collections
pub async fn list_collections_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let list = state.registry.as_document(&state.context);

    json_response(StatusCode::OK, "application/json", Some("max-age=60"), &list)
}

/// GET /collections/:collection_id - Get a specific collection
pub async fn get_collection_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(collection_id): Path<String>,
) -> Response {
    match state.registry.find(&collection_id) {
        Ok(feature_class) => json_response(
            StatusCode::OK,
            "application/json",
            Some("max-age=60"),
            &feature_class.as_document(&state.context),
        ),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::features::{TC_LOCATION_ID, TC_TRACK_ID};
    use crate::handlers::test_support::get_json;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_list_collections() {
        let (status, body) = get_json("/collections").await;
        assert_eq!(status, StatusCode::OK);

        let collections = body["collections"].as_array().unwrap();
        assert_eq!(collections.len(), 2);
        assert_eq!(collections[0]["id"], TC_LOCATION_ID);
        assert_eq!(collections[1]["id"], TC_TRACK_ID);

        let links = body["links"].as_array().unwrap();
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l["rel"] == "collection"));
    }

    #[tokio::test]
    async fn test_get_collection_id_matches() {
        for id in [TC_LOCATION_ID, TC_TRACK_ID] {
            let (status, body) = get_json(&format!("/collections/{}", id)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["id"], id);
            assert_eq!(body["itemType"], "feature");
            assert_eq!(
                body["extent"]["spatial"],
                serde_json::json!([[-180.0, -68.5, 180.0, 83.01]])
            );
            assert_eq!(
                body["extent"]["temporal"],
                serde_json::json!([["1842-10-25T03:00:00", "2023-06-16T12:00:00"]])
            );

            let links = body["links"].as_array().unwrap();
            assert_eq!(links.len(), 2);
            assert_eq!(links[0]["rel"], "self");
            assert_eq!(links[1]["rel"], "items");
        }
    }

    #[tokio::test]
    async fn test_get_collection_is_idempotent() {
        let app = crate::router(AppState::for_tests());

        let mut bodies = Vec::new();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/collections/tc-track")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            bodies.push(to_bytes(response.into_body(), usize::MAX).await.unwrap());
        }

        assert_eq!(bodies[0], bodies[1]);
    }

    #[tokio::test]
    async fn test_unknown_collection_is_not_found() {
        let (status, body) = get_json("/collections/tc-missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
    }
}
