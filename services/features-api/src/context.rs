//! URL building for response links.

/// Builds absolute hrefs for the API's endpoints.
///
/// Created once from configuration so that memoized links are stable
/// across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    base_url: String,
}

impl RequestContext {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/collections/{collection_id}`
    pub fn collection_url(&self, collection_id: &str) -> String {
        format!("{}/collections/{}", self.base_url, collection_id)
    }

    /// `/collections/{collection_id}/items`
    pub fn items_url(&self, collection_id: &str) -> String {
        format!("{}/items", self.collection_url(collection_id))
    }
}
