//! Tropical cyclone feature collections.
//!
//! Both collections read IBTrACS-derived tables: `storm_location` holds one
//! point per observation, `storm_track` one multi-line track per storm.

use chrono::{NaiveDate, NaiveDateTime};
use features_protocol::{Feature, FeatureResult, Geometry, SpatialExtent, TemporalExtent};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use crate::collection::{FeatureClass, FeatureClassRegistry};
use crate::provider::{query_failure, FeatureDataProvider, Statement, FEATURE_ID_PARAM};

pub const TC_LOCATION_ID: &str = "tc-location";
pub const TC_TRACK_ID: &str = "tc-track";

/// Maximum rows returned by a listing.
pub const ITEMS_LIMIT: usize = 25;

const CYCLONE_BBOX: SpatialExtent = [-180.0, -68.5, 180.0, 83.01];

fn timestamp(year: i32, month: u32, day: u32, hour: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(hour, 0, 0))
}

fn cyclone_interval() -> TemporalExtent {
    [timestamp(1842, 10, 25, 3), timestamp(2023, 6, 16, 12)]
}

/// Register every collection served by this API.
pub fn register_collections(registry: &mut FeatureClassRegistry) {
    registry.register(
        FeatureClass::new(
            TC_LOCATION_ID,
            "Tropical Cyclone Locations",
            "The location points for tropical cyclones",
            TcLocation::new,
        )
        .with_spatial_extent(CYCLONE_BBOX)
        .with_temporal_extent(cyclone_interval()),
    );

    registry.register(
        FeatureClass::new(
            TC_TRACK_ID,
            "Tropical Cyclone Tracks",
            "The storm track (connecting the dots)",
            TcTrack::new,
        )
        .with_spatial_extent(CYCLONE_BBOX)
        .with_temporal_extent(cyclone_interval()),
    );
}

// ============================================================================
// Locations
// ============================================================================

const LOCATION_ITEMS_SQL: &str = r#"
    select id::bigint as id,
           sid,
           name,
           iso_time::timestamp as iso_time,
           st_astext(geom) as geom
    from storm_location
"#;

const LOCATION_ITEM_SQL: &str = r#"
    select id::bigint as id,
           sid,
           name,
           iso_time::timestamp as iso_time,
           st_astext(geom) as geom
    from storm_location
    where sid = $1
    order by iso_time, id
"#;

/// One observation point of a storm.
#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: i64,
    pub sid: String,
    pub name: Option<String>,
    pub iso_time: Option<NaiveDateTime>,
    /// WKT point; NULL when the observation has no position.
    pub geom: Option<String>,
}

#[derive(Serialize)]
struct LocationProperties<'a> {
    id: i64,
    sid: &'a str,
    name: Option<&'a str>,
    iso_time: Option<NaiveDateTime>,
}

impl TryFrom<LocationRow> for Feature {
    type Error = features_protocol::FeatureError;

    fn try_from(row: LocationRow) -> FeatureResult<Self> {
        let geometry = Geometry::from_wkt(row.geom.as_deref())?;
        let properties = LocationProperties {
            id: row.id,
            sid: &row.sid,
            name: row.name.as_deref(),
            iso_time: row.iso_time,
        };
        Feature::with_properties(geometry, &properties)
    }
}

/// Provider for `tc-location`.
pub struct TcLocation {
    pool: PgPool,
}

impl TcLocation {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FeatureDataProvider for TcLocation {
    fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn sql_for_items_query(&self) -> Statement {
        Statement::new(LOCATION_ITEMS_SQL).limit(ITEMS_LIMIT)
    }

    fn sql_for_item_query(&self) -> Statement {
        Statement::with_params(LOCATION_ITEM_SQL, &[FEATURE_ID_PARAM])
    }

    fn map_feature_to_geojson(&self, row: &PgRow) -> FeatureResult<Feature> {
        LocationRow::from_row(row)
            .map_err(query_failure)
            .and_then(Feature::try_from)
    }
}

// ============================================================================
// Tracks
// ============================================================================

const TRACK_ITEMS_SQL: &str = r#"
    select id::bigint as id,
           sid,
           sshs::integer as sshs,
           name,
           start_iso_time::timestamp as start_iso_time,
           end_iso_time::timestamp as end_iso_time,
           st_astext(geom) as geom
    from storm_track
"#;

const TRACK_ITEM_SQL: &str = r#"
    select id::bigint as id,
           sid,
           sshs::integer as sshs,
           name,
           start_iso_time::timestamp as start_iso_time,
           end_iso_time::timestamp as end_iso_time,
           st_astext(geom) as geom
    from storm_track
    where sid = $1
    order by id
"#;

/// One storm's full track.
#[derive(Debug, Clone, FromRow)]
pub struct TrackRow {
    pub id: i64,
    pub sid: String,
    /// Saffir-Simpson category.
    pub sshs: Option<i32>,
    pub name: Option<String>,
    pub start_iso_time: Option<NaiveDateTime>,
    pub end_iso_time: Option<NaiveDateTime>,
    /// WKT multi-line string.
    pub geom: Option<String>,
}

#[derive(Serialize)]
struct TrackProperties<'a> {
    id: i64,
    sid: &'a str,
    sshs: Option<i32>,
    name: Option<&'a str>,
    start_iso_time: Option<NaiveDateTime>,
    end_iso_time: Option<NaiveDateTime>,
}

impl TryFrom<TrackRow> for Feature {
    type Error = features_protocol::FeatureError;

    fn try_from(row: TrackRow) -> FeatureResult<Self> {
        let geometry = Geometry::from_wkt(row.geom.as_deref())?;
        let properties = TrackProperties {
            id: row.id,
            sid: &row.sid,
            sshs: row.sshs,
            name: row.name.as_deref(),
            start_iso_time: row.start_iso_time,
            end_iso_time: row.end_iso_time,
        };
        Feature::with_properties(geometry, &properties)
    }
}

/// Provider for `tc-track`.
pub struct TcTrack {
    pool: PgPool,
}

impl TcTrack {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FeatureDataProvider for TcTrack {
    fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn sql_for_items_query(&self) -> Statement {
        Statement::new(TRACK_ITEMS_SQL).limit(ITEMS_LIMIT)
    }

    fn sql_for_item_query(&self) -> Statement {
        Statement::with_params(TRACK_ITEM_SQL, &[FEATURE_ID_PARAM])
    }

    fn map_feature_to_geojson(&self, row: &PgRow) -> FeatureResult<Feature> {
        TrackRow::from_row(row)
            .map_err(query_failure)
            .and_then(Feature::try_from)
    }
}
