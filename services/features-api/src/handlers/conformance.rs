//! Conformance endpoint handler.

use axum::{http::StatusCode, response::Response};
use features_protocol::ConformanceClasses;

use super::json_response;

/// GET /conformance - Conformance classes
pub async fn conformance_handler() -> Response {
    json_response(
        StatusCode::OK,
        "application/json",
        Some("max-age=3600"),
        &ConformanceClasses::current(),
    )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use features_protocol::conformance;

    use crate::handlers::test_support::get_json;

    #[tokio::test]
    async fn test_conformance_endpoint() {
        let (status, body) = get_json("/conformance").await;
        assert_eq!(status, StatusCode::OK);

        let conforms_to = body["conformsTo"].as_array().unwrap();
        assert!(conforms_to.iter().any(|c| c == conformance::CORE));
        assert!(conforms_to.iter().any(|c| c == conformance::GEOJSON));
    }
}
