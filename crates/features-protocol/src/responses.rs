//! Feature API response documents.
//!
//! This module contains types for the landing page, conformance,
//! collection metadata and exception responses.

use serde::{Deserialize, Serialize};

use crate::conformance;
use crate::types::{Link, LinkRelation, MediaType, SpatialExtent, TemporalExtent};

/// Landing page response for the API root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LandingPage {
    /// Title of the API.
    pub title: String,

    /// Description of the API.
    pub description: String,

    /// Links to related resources.
    pub links: Vec<Link>,
}

impl LandingPage {
    /// Create a new landing page with the conformance, data and self links.
    pub fn new(title: impl Into<String>, description: impl Into<String>, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let links = vec![
            Link::new(format!("{}/conformance", base_url), LinkRelation::Conformance)
                .with_type(MediaType::ApplicationJson),
            Link::new(format!("{}/collections", base_url), LinkRelation::Data),
            Link::new(format!("{}/", base_url), LinkRelation::SelfLink)
                .with_type(MediaType::ApplicationJson),
        ];

        Self {
            title: title.into(),
            description: description.into(),
            links,
        }
    }
}

/// Conformance declaration response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConformanceClasses {
    /// List of conformance class URIs.
    #[serde(rename = "conformsTo")]
    pub conforms_to: Vec<String>,
}

impl ConformanceClasses {
    /// Conformance classes declared by this server: Core, GeoJSON, HTML, OAS30.
    pub fn current() -> Self {
        Self {
            conforms_to: vec![
                conformance::CORE.to_string(),
                conformance::GEOJSON.to_string(),
                conformance::HTML.to_string(),
                conformance::OAS30.to_string(),
            ],
        }
    }

    /// Check if a conformance class is declared.
    pub fn contains(&self, class: &str) -> bool {
        self.conforms_to.iter().any(|c| c == class)
    }
}

/// Spatial and temporal extent of a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CollectionExtent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spatial: Option<Vec<SpatialExtent>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal: Option<Vec<TemporalExtent>>,
}

impl CollectionExtent {
    /// Build an extent from optional spatial and temporal parts.
    ///
    /// Returns `None` when neither part is configured.
    pub fn from_parts(
        spatial: Option<Vec<SpatialExtent>>,
        temporal: Option<Vec<TemporalExtent>>,
    ) -> Option<Self> {
        if spatial.is_none() && temporal.is_none() {
            return None;
        }
        Some(Self { spatial, temporal })
    }
}

/// OGC Collection document.
///
/// Empty members are omitted, including an empty description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionDocument {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<CollectionExtent>,

    /// Always "feature" for this server.
    #[serde(rename = "itemType")]
    pub item_type: String,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub links: Vec<Link>,
}

impl CollectionDocument {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            extent: None,
            item_type: "feature".to_string(),
            links: Vec::new(),
        }
    }

    /// Set the title; an empty title is left out.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string()).filter(|t| !t.is_empty());
        self
    }

    /// Set the description; an empty description is left out.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string()).filter(|d| !d.is_empty());
        self
    }

    pub fn with_extent(mut self, extent: Option<CollectionExtent>) -> Self {
        self.extent = extent;
        self
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }
}

/// Response for the collections endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionList {
    pub links: Vec<Link>,
    pub collections: Vec<CollectionDocument>,
}

/// Exception response for errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExceptionResponse {
    /// Exception type identifier.
    #[serde(rename = "type")]
    pub type_: String,

    /// Human-readable title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Detailed error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ExceptionResponse {
    /// Create a new exception response.
    pub fn new(type_: impl Into<String>, status: u16, detail: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            title: None,
            status: Some(status),
            detail: Some(detail.into()),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Create a 404 Not Found exception.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(
            "http://www.opengis.net/def/exceptions/ogcapi-features-1/1.0/not-found",
            404,
            detail,
        )
        .with_title("Not Found")
    }

    /// Create a 500 Internal Server Error exception.
    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::new(
            "http://www.opengis.net/def/exceptions/ogcapi-features-1/1.0/server-error",
            500,
            detail,
        )
        .with_title("Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_landing_page_links() {
        let landing = LandingPage::new("OGC Feature API", "Cyclones", "http://localhost:8000/");

        let conformance: Vec<_> = landing
            .links
            .iter()
            .filter(|l| l.rel == LinkRelation::Conformance)
            .collect();
        assert_eq!(conformance.len(), 1);
        assert_eq!(conformance[0].href, "http://localhost:8000/conformance");

        let data: Vec<_> = landing
            .links
            .iter()
            .filter(|l| l.rel == LinkRelation::Data)
            .collect();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].href, "http://localhost:8000/collections");

        let self_link = landing
            .links
            .iter()
            .find(|l| l.rel == LinkRelation::SelfLink)
            .unwrap();
        assert_eq!(self_link.href, "http://localhost:8000/");
    }

    #[test]
    fn test_conformance_current() {
        let conf = ConformanceClasses::current();

        assert!(conf.contains(conformance::CORE));
        assert!(conf.contains(conformance::GEOJSON));
        assert!(conf.contains(conformance::HTML));
        assert!(conf.contains(conformance::OAS30));
        assert!(!conf.contains(conformance::GMLSF0));
        assert_eq!(conf.conforms_to.len(), 4);
    }

    #[test]
    fn test_conformance_serialization() {
        let json = serde_json::to_string(&ConformanceClasses::current()).unwrap();
        assert!(json.contains("\"conformsTo\""));
        assert!(json.contains("http://www.opengis.net/spec/ogcapi-features-1/1.0/req/core"));
    }

    #[test]
    fn test_extent_from_parts() {
        assert!(CollectionExtent::from_parts(None, None).is_none());

        let spatial_only =
            CollectionExtent::from_parts(Some(vec![[-180.0, -68.5, 180.0, 83.01]]), None).unwrap();
        let json = serde_json::to_value(&spatial_only).unwrap();
        assert!(json.get("spatial").is_some());
        assert!(json.get("temporal").is_none());
    }

    #[test]
    fn test_temporal_extent_serialization() {
        let start = NaiveDate::from_ymd_opt(1842, 10, 25)
            .unwrap()
            .and_hms_opt(3, 0, 0)
            .unwrap();
        let extent = CollectionExtent::from_parts(None, Some(vec![[Some(start), None]])).unwrap();

        let json = serde_json::to_value(&extent).unwrap();
        assert_eq!(
            json["temporal"],
            serde_json::json!([["1842-10-25T03:00:00", null]])
        );
    }

    #[test]
    fn test_collection_document_omits_empty_members() {
        let doc = CollectionDocument::new("tc-track")
            .with_title("Tropical Cyclone Tracks")
            .with_description("");

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["id"], "tc-track");
        assert_eq!(json["itemType"], "feature");
        assert!(json.get("description").is_none());
        assert!(json.get("extent").is_none());
        assert!(json.get("links").is_none());
    }

    #[test]
    fn test_exception_not_found() {
        let exc = ExceptionResponse::not_found("Collection not found: tc-missing");

        assert_eq!(exc.status, Some(404));
        assert_eq!(exc.title, Some("Not Found".to_string()));

        let json = serde_json::to_string(&exc).unwrap();
        assert!(json.contains("\"type\""));
        assert!(json.contains("\"status\":404"));
    }

    #[test]
    fn test_exception_internal_error() {
        let exc = ExceptionResponse::internal_error("failure");
        assert_eq!(exc.status, Some(500));
        assert!(exc.type_.contains("server-error"));
    }
}
