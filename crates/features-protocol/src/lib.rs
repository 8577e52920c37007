//! OGC API - Features Protocol
//!
//! This crate provides types and utilities for implementing an OGC API - Features
//! server. It follows OGC API - Features - Part 1: Core v1.0.0.
//!
//! # Conformance Classes
//!
//! This implementation declares the following conformance classes:
//! - Core
//! - GeoJSON
//! - HTML
//! - OpenAPI 3.0
//!
//! # Example
//!
//! ```rust
//! use features_protocol::{LandingPage, LinkRelation};
//!
//! // Build a landing page response
//! let landing = LandingPage::new(
//!     "OGC Feature API",
//!     "Tropical cyclone locations and tracks",
//!     "http://localhost:8000",
//! );
//! assert!(landing.links.iter().any(|l| l.rel == LinkRelation::Data));
//! ```

pub mod types;
pub mod geojson;
pub mod responses;
pub mod errors;

// Re-export commonly used types
pub use types::{Link, LinkRelation, MediaType, SpatialExtent, TemporalExtent};
pub use geojson::{Feature, FeatureCollection, Geometry};
pub use responses::{
    CollectionDocument, CollectionExtent, CollectionList, ConformanceClasses, ExceptionResponse,
    LandingPage,
};
pub use errors::{FeatureError, FeatureResult};

/// OGC API - Features conformance class URIs
pub mod conformance {
    /// Core conformance class
    pub const CORE: &str = "http://www.opengis.net/spec/ogcapi-features-1/1.0/req/core";
    /// OpenAPI 3.0 conformance class
    pub const OAS30: &str = "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/oas30";
    /// HTML conformance class
    pub const HTML: &str = "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/html";
    /// GeoJSON conformance class
    pub const GEOJSON: &str = "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/geojson";
    /// GML Simple Features Level 0 conformance class
    pub const GMLSF0: &str = "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/gmlsf0";
    /// GML Simple Features Level 2 conformance class
    pub const GMLSF2: &str = "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/gmlsf2";
}
