//! Landing page handler.

use axum::{extract::Extension, http::StatusCode, response::Response};
use features_protocol::LandingPage;
use std::sync::Arc;

use super::json_response;
use crate::state::AppState;

/// GET / - Landing page
pub async fn landing_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let landing = LandingPage::new(&state.title, &state.description, state.context.base_url());

    json_response(
        StatusCode::OK,
        "application/json",
        Some("max-age=300"),
        &landing,
    )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::handlers::test_support::get_json;

    fn path_of(href: &str) -> &str {
        let without_scheme = href.split_once("://").map(|(_, rest)| rest).unwrap_or(href);
        without_scheme
            .find('/')
            .map(|i| &without_scheme[i..])
            .unwrap_or("/")
    }

    #[tokio::test]
    async fn test_landing_page_links() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "OGC Feature API");

        let links = body["links"].as_array().unwrap();
        let with_rel = |rel: &str| -> Vec<&serde_json::Value> {
            links.iter().filter(|l| l["rel"] == rel).collect()
        };

        let conformance = with_rel("conformance");
        assert_eq!(conformance.len(), 1);
        assert_eq!(path_of(conformance[0]["href"].as_str().unwrap()), "/conformance");

        let data = with_rel("data");
        assert_eq!(data.len(), 1);
        assert_eq!(path_of(data[0]["href"].as_str().unwrap()), "/collections");

        for self_link in with_rel("self") {
            assert_eq!(path_of(self_link["href"].as_str().unwrap()), "/");
        }

        for alternate in with_rel("alternate") {
            assert_ne!(alternate["type"], "application/json");
        }
    }
}
