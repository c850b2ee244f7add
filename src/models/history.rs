use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::position::GeoPoint;

/// One immutable position report. `distance_km` is the great-circle distance
/// from the previous entry for the same username, zero for the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub username: String,
    pub location: GeoPoint,
    pub distance_km: f64,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceTraveled {
    pub username: String,
    pub total_distance_km: f64,
}
