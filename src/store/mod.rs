//! Storage contracts consumed by the tracking service.
//!
//! The service depends only on these traits; `memory` is the default
//! adapter. A relational adapter slots in behind the same contracts
//! without touching the core.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::geo::BoundingBox;
use crate::models::history::HistoryEntry;
use crate::models::position::{GeoPoint, Position};

/// Adapter failure. The memory adapter never fails; a relational adapter
/// maps connection loss to `Unavailable` and statement or row-mapping
/// errors to `Query`.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage query failed: {0}")]
    Query(String),
}

/// Current position per username. At most one record per key; `upsert`
/// creates or overwrites.
#[async_trait]
pub trait PositionStore: Send + Sync {
    async fn exists(&self, username: &str) -> Result<bool, StoreError>;

    async fn upsert(
        &self,
        username: &str,
        location: GeoPoint,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Inclusive coordinate range scan. Returns the candidate superset for a
    /// radius search; exact membership is the caller's concern.
    async fn query_bounding_box(&self, bounds: &BoundingBox) -> Result<Vec<Position>, StoreError>;
}

/// Append-only report log per username.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append(&self, entry: HistoryEntry) -> Result<(), StoreError>;

    /// Latest entry by `recorded_at`, `None` when the username has no
    /// history.
    async fn most_recent(&self, username: &str) -> Result<Option<HistoryEntry>, StoreError>;

    /// Sum of `distance_km` over entries with `recorded_at` in
    /// `[start, end]` inclusive. `None` when no entries match; `Some(0.0)`
    /// when matching entries sum to zero.
    async fn sum_distance(
        &self,
        username: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<f64>, StoreError>;
}
