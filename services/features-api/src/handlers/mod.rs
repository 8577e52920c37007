//! HTTP request handlers for the Features API.

pub mod collections;
pub mod conformance;
pub mod health;
pub mod items;
pub mod landing;

use axum::{
    http::{header, StatusCode},
    response::Response,
};
use features_protocol::FeatureError;
use serde::Serialize;

/// Serialize `body` as pretty JSON with the given content type.
pub(crate) fn json_response<T: Serialize>(
    status: StatusCode,
    content_type: &str,
    cache_control: Option<&str>,
    body: &T,
) -> Response {
    let json = serde_json::to_string_pretty(body).unwrap_or_default();

    let mut builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type);
    if let Some(cache_control) = cache_control {
        builder = builder.header(header::CACHE_CONTROL, cache_control);
    }

    builder.body(json.into()).unwrap_or_else(|_| {
        let mut response = Response::new(axum::body::Body::empty());
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response
    })
}

/// Translate an error into an exception response.
///
/// Server faults are logged here; their messages never reach the client.
pub(crate) fn error_response(err: &FeatureError) -> Response {
    if err.is_internal() {
        tracing::error!(error = %err, "Request failed");
    } else {
        tracing::debug!(error = %err, "Resource not found");
    }

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json_response(status, "application/json", None, &err.to_exception())
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::state::AppState;

    /// Issue a GET against a fresh router; returns status, content type and body.
    pub async fn get(path: &str) -> (StatusCode, String, Vec<u8>) {
        let app = crate::router(AppState::for_tests());
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body.to_vec())
    }

    pub async fn get_json(path: &str) -> (StatusCode, serde_json::Value) {
        let (status, _, body) = get(path).await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}
