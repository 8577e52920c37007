//! Core link and extent types used across the API.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Bounding box as `[min_x, min_y, max_x, max_y]`.
pub type SpatialExtent = [f64; 4];

/// Time interval as `[start, end]`; `None` marks an open end.
pub type TemporalExtent = [Option<NaiveDateTime>; 2];

/// Link relation types used by OGC API - Features.
///
/// See RFC 8288 (Web Linking), the IANA link relation registry and
/// OGC 17-069r4 section 5.2.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LinkRelation {
    #[serde(rename = "alternate")]
    Alternate,
    #[serde(rename = "collection")]
    Collection,
    #[serde(rename = "describe_by")]
    DescribedBy,
    #[serde(rename = "item")]
    Item,
    #[serde(rename = "next")]
    Next,
    #[serde(rename = "license")]
    License,
    #[serde(rename = "prev")]
    Prev,
    #[serde(rename = "self")]
    SelfLink,
    #[serde(rename = "service-desc")]
    ServiceDesc,
    #[serde(rename = "service-doc")]
    ServiceDoc,
    #[serde(rename = "items")]
    Items,
    #[serde(rename = "conformance")]
    Conformance,
    #[serde(rename = "data")]
    Data,
}

impl LinkRelation {
    /// The registered relation name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkRelation::Alternate => "alternate",
            LinkRelation::Collection => "collection",
            LinkRelation::DescribedBy => "describe_by",
            LinkRelation::Item => "item",
            LinkRelation::Next => "next",
            LinkRelation::License => "license",
            LinkRelation::Prev => "prev",
            LinkRelation::SelfLink => "self",
            LinkRelation::ServiceDesc => "service-desc",
            LinkRelation::ServiceDoc => "service-doc",
            LinkRelation::Items => "items",
            LinkRelation::Conformance => "conformance",
            LinkRelation::Data => "data",
        }
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media types referenced by links and responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MediaType {
    #[serde(rename = "text/html")]
    TextHtml,
    #[serde(rename = "text/plain")]
    PlainText,
    #[serde(rename = "application/json")]
    ApplicationJson,
    #[serde(rename = "application/geo+json")]
    GeoJson,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::TextHtml => "text/html",
            MediaType::PlainText => "text/plain",
            MediaType::ApplicationJson => "application/json",
            MediaType::GeoJson => "application/geo+json",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hyperlink to a related resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    /// The URI of the linked resource.
    pub href: String,

    /// The relationship type.
    pub rel: LinkRelation,

    /// The media type of the linked resource.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<MediaType>,

    /// The language of the linked resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,

    /// A human-readable title for the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Length of the linked content in octets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
}

impl Link {
    /// Create a new link with required fields.
    pub fn new(href: impl Into<String>, rel: LinkRelation) -> Self {
        Self {
            href: href.into(),
            rel,
            type_: None,
            hreflang: None,
            title: None,
            length: None,
        }
    }

    /// Set the media type.
    pub fn with_type(mut self, type_: MediaType) -> Self {
        self.type_ = Some(type_);
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the language.
    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    /// Set the content length.
    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }
}
