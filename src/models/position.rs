use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Latest known location of an entity. One record per username, overwritten
/// in place on every report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub username: String,
    pub location: GeoPoint,
    pub updated_at: DateTime<Utc>,
}

/// One page of a radius search. Totals refer to the exact-circle match set,
/// not the bounding-box candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionPage {
    pub positions: Vec<Position>,
    pub total_items: u64,
    pub total_pages: u64,
}
