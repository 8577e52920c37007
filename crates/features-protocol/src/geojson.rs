//! GeoJSON types for feature responses.
//!
//! Items endpoints answer with either a GeoJSON `FeatureCollection` (listing)
//! or a single GeoJSON `Feature`. Geometries arrive from the database as
//! well-known text and are converted here.
//!
//! See: <https://datatracker.ietf.org/doc/html/rfc7946>

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{FeatureError, FeatureResult};

/// A `[x, y]` coordinate pair (longitude, latitude for CRS84 data).
pub type Position = [f64; 2];

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of features.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create a new FeatureCollection from features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// A GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// The geometry of this feature; `null` when the row has none.
    pub geometry: Option<Geometry>,

    /// Non-geometry attributes, copied as-is from the source row.
    pub properties: Map<String, Value>,
}

impl Feature {
    /// Create a feature with the given geometry and no properties.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry: Some(geometry),
            properties: Map::new(),
        }
    }

    /// Create a feature whose properties are the serialized fields of `properties`.
    ///
    /// `properties` must serialize to a JSON object; `None` fields become `null`.
    pub fn with_properties<P: Serialize>(
        geometry: Option<Geometry>,
        properties: &P,
    ) -> FeatureResult<Self> {
        match serde_json::to_value(properties) {
            Ok(Value::Object(properties)) => Ok(Self {
                type_: "Feature".to_string(),
                geometry,
                properties,
            }),
            Ok(other) => Err(FeatureError::QueryFailure(format!(
                "feature properties must be an object, got {}",
                other
            ))),
            Err(e) => Err(FeatureError::QueryFailure(format!(
                "failed to serialize feature properties: {}",
                e
            ))),
        }
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// GeoJSON geometry objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    /// First ring is the exterior, the rest are holes.
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

impl Geometry {
    /// Create a point geometry.
    pub fn point(x: f64, y: f64) -> Self {
        Geometry::Point {
            coordinates: [x, y],
        }
    }

    /// Parse well-known text into a GeoJSON geometry.
    ///
    /// A missing value and empty geometries (`POINT EMPTY`,
    /// `MULTILINESTRING EMPTY`) both yield `None`.
    pub fn from_wkt(text: Option<&str>) -> FeatureResult<Option<Self>> {
        let Some(text) = text else {
            return Ok(None);
        };

        let geometry: geo_types::Geometry<f64> = wkt::Wkt::from_str(text)
            .map_err(|e| FeatureError::InvalidGeometry(format!("{:?}", e)))
            .and_then(|w| {
                geo_types::Geometry::<f64>::try_from(w).map_err(|e: wkt::conversion::Error| {
                    FeatureError::InvalidGeometry(format!("{:?}", e))
                })
            })?;

        let geometry = Self::from(geometry);
        Ok((!geometry.is_empty()).then_some(geometry))
    }

    /// True when the geometry holds no positions.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point { .. } => false,
            Geometry::MultiPoint { coordinates } | Geometry::LineString { coordinates } => {
                coordinates.is_empty()
            }
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                coordinates.iter().all(Vec::is_empty)
            }
            Geometry::MultiPolygon { coordinates } => {
                coordinates.iter().flatten().all(Vec::is_empty)
            }
            Geometry::GeometryCollection { geometries } => {
                geometries.iter().all(Geometry::is_empty)
            }
        }
    }

    /// The GeoJSON type name of this geometry.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }
}

fn position(c: geo_types::Coord<f64>) -> Position {
    [c.x, c.y]
}

fn line_positions(line: &geo_types::LineString<f64>) -> Vec<Position> {
    line.0.iter().copied().map(position).collect()
}

fn polygon_rings(polygon: &geo_types::Polygon<f64>) -> Vec<Vec<Position>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(line_positions)
        .collect()
}

impl From<geo_types::Geometry<f64>> for Geometry {
    fn from(geometry: geo_types::Geometry<f64>) -> Self {
        use geo_types::Geometry as G;

        match geometry {
            G::Point(p) => Geometry::Point {
                coordinates: position(p.0),
            },
            G::MultiPoint(mp) => Geometry::MultiPoint {
                coordinates: mp.0.into_iter().map(|p| position(p.0)).collect(),
            },
            G::Line(l) => Geometry::LineString {
                coordinates: vec![position(l.start), position(l.end)],
            },
            G::LineString(ls) => Geometry::LineString {
                coordinates: line_positions(&ls),
            },
            G::MultiLineString(mls) => Geometry::MultiLineString {
                coordinates: mls.0.iter().map(line_positions).collect(),
            },
            G::Polygon(p) => Geometry::Polygon {
                coordinates: polygon_rings(&p),
            },
            G::MultiPolygon(mp) => Geometry::MultiPolygon {
                coordinates: mp.0.iter().map(polygon_rings).collect(),
            },
            G::Rect(r) => Geometry::Polygon {
                coordinates: polygon_rings(&r.to_polygon()),
            },
            G::Triangle(t) => Geometry::Polygon {
                coordinates: polygon_rings(&t.to_polygon()),
            },
            G::GeometryCollection(gc) => Geometry::GeometryCollection {
                geometries: gc.0.into_iter().map(Geometry::from).collect(),
            },
        }
    }
}
