use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::geo::BoundingBox;
use crate::models::history::HistoryEntry;
use crate::models::position::{GeoPoint, Position};
use crate::store::{HistoryStore, PositionStore, StoreError};

#[derive(Default)]
pub struct MemoryPositionStore {
    positions: DashMap<String, Position>,
}

impl MemoryPositionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PositionStore for MemoryPositionStore {
    async fn exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.positions.contains_key(username))
    }

    async fn upsert(
        &self,
        username: &str,
        location: GeoPoint,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.positions.insert(
            username.to_string(),
            Position {
                username: username.to_string(),
                location,
                updated_at,
            },
        );
        Ok(())
    }

    async fn query_bounding_box(&self, bounds: &BoundingBox) -> Result<Vec<Position>, StoreError> {
        let matches = self
            .positions
            .iter()
            .filter(|entry| bounds.contains(&entry.value().location))
            .map(|entry| entry.value().clone())
            .collect();
        Ok(matches)
    }
}

#[derive(Default)]
pub struct MemoryHistoryStore {
    entries: DashMap<String, Vec<HistoryEntry>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        self.entries
            .entry(entry.username.clone())
            .or_default()
            .push(entry);
        Ok(())
    }

    async fn most_recent(&self, username: &str) -> Result<Option<HistoryEntry>, StoreError> {
        let latest = self.entries.get(username).and_then(|entries| {
            entries
                .iter()
                .max_by_key(|entry| entry.recorded_at)
                .cloned()
        });
        Ok(latest)
    }

    async fn sum_distance(
        &self,
        username: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<f64>, StoreError> {
        let Some(entries) = self.entries.get(username) else {
            return Ok(None);
        };

        let mut matched = false;
        let mut total = 0.0;
        for entry in entries.iter() {
            if entry.recorded_at >= start && entry.recorded_at <= end {
                matched = true;
                total += entry.distance_km;
            }
        }

        Ok(matched.then_some(total))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{MemoryHistoryStore, MemoryPositionStore};
    use crate::geo::BoundingBox;
    use crate::models::history::HistoryEntry;
    use crate::models::position::GeoPoint;
    use crate::store::{HistoryStore, PositionStore};

    fn entry(username: &str, distance_km: f64, age_hours: i64) -> HistoryEntry {
        HistoryEntry {
            username: username.to_string(),
            location: GeoPoint {
                lat: 10.0,
                lng: 10.0,
            },
            distance_km,
            recorded_at: Utc::now() - Duration::hours(age_hours),
        }
    }

    #[tokio::test]
    async fn upsert_overwrites_existing_position() {
        let store = MemoryPositionStore::new();
        let now = Utc::now();

        store
            .upsert(
                "wanderer1",
                GeoPoint {
                    lat: 10.0,
                    lng: 10.0,
                },
                now,
            )
            .await
            .unwrap();
        store
            .upsert(
                "wanderer1",
                GeoPoint {
                    lat: 20.0,
                    lng: 20.0,
                },
                now,
            )
            .await
            .unwrap();

        assert!(store.exists("wanderer1").await.unwrap());

        let all = store
            .query_bounding_box(&BoundingBox {
                lat_min: -90.0,
                lat_max: 90.0,
                lng_min: -180.0,
                lng_max: 180.0,
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].location.lat, 20.0);
    }

    #[tokio::test]
    async fn bounding_box_bounds_are_inclusive() {
        let store = MemoryPositionStore::new();
        store
            .upsert(
                "edge",
                GeoPoint {
                    lat: 10.0,
                    lng: 20.0,
                },
                Utc::now(),
            )
            .await
            .unwrap();

        let on_edge = BoundingBox {
            lat_min: 10.0,
            lat_max: 15.0,
            lng_min: 15.0,
            lng_max: 20.0,
        };
        assert_eq!(store.query_bounding_box(&on_edge).await.unwrap().len(), 1);

        let outside = BoundingBox {
            lat_min: 10.1,
            lat_max: 15.0,
            lng_min: 15.0,
            lng_max: 20.0,
        };
        assert!(store.query_bounding_box(&outside).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn most_recent_picks_latest_timestamp() {
        let store = MemoryHistoryStore::new();
        store.append(entry("roamer99", 5.0, 3)).await.unwrap();
        store.append(entry("roamer99", 7.0, 1)).await.unwrap();
        store.append(entry("roamer99", 6.0, 2)).await.unwrap();

        let latest = store.most_recent("roamer99").await.unwrap().unwrap();
        assert_eq!(latest.distance_km, 7.0);

        assert!(store.most_recent("nobody99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sum_distance_distinguishes_empty_from_zero() {
        let store = MemoryHistoryStore::new();
        let now = Utc::now();
        let window = (now - Duration::hours(24), now);

        assert!(
            store
                .sum_distance("ghost123", window.0, window.1)
                .await
                .unwrap()
                .is_none()
        );

        store.append(entry("ghost123", 0.0, 1)).await.unwrap();
        assert_eq!(
            store
                .sum_distance("ghost123", window.0, window.1)
                .await
                .unwrap(),
            Some(0.0)
        );
    }

    #[tokio::test]
    async fn sum_distance_window_is_inclusive_and_filters_outside() {
        let store = MemoryHistoryStore::new();
        let base = Utc::now();

        let mut e = entry("hiker001", 3.0, 0);
        e.recorded_at = base;
        store.append(e).await.unwrap();

        let mut e = entry("hiker001", 4.0, 0);
        e.recorded_at = base - Duration::hours(10);
        store.append(e).await.unwrap();

        let mut e = entry("hiker001", 100.0, 0);
        e.recorded_at = base - Duration::hours(30);
        store.append(e).await.unwrap();

        let total = store
            .sum_distance("hiker001", base - Duration::hours(24), base)
            .await
            .unwrap();
        assert_eq!(total, Some(7.0));

        let exact = store.sum_distance("hiker001", base, base).await.unwrap();
        assert_eq!(exact, Some(3.0));
    }
}
