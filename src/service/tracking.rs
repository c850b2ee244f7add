use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info};

use crate::error::AppError;
use crate::geo::{bounding_box, haversine_km};
use crate::models::history::{DistanceTraveled, HistoryEntry};
use crate::models::position::{GeoPoint, Position, PositionPage};
use crate::observability::metrics::Metrics;
use crate::store::{HistoryStore, PositionStore};

/// Orchestrates position reports and queries over the store contracts.
/// Owns no storage itself; everything goes through the injected traits.
pub struct TrackingService {
    positions: Arc<dyn PositionStore>,
    history: Arc<dyn HistoryStore>,
    report_locks: DashMap<String, Arc<Mutex<()>>>,
    events_tx: broadcast::Sender<HistoryEntry>,
    metrics: Metrics,
}

impl TrackingService {
    pub fn new(
        positions: Arc<dyn PositionStore>,
        history: Arc<dyn HistoryStore>,
        events_tx: broadcast::Sender<HistoryEntry>,
        metrics: Metrics,
    ) -> Self {
        Self {
            positions,
            history,
            report_locks: DashMap::new(),
            events_tx,
            metrics,
        }
    }

    /// Records a position report. First report for a username creates its
    /// current position with distance zero; every later report overwrites
    /// the position and appends a history entry carrying the great-circle
    /// distance from the previous report. The appended entry is broadcast
    /// to live subscribers and returned.
    pub async fn report_position(
        &self,
        username: &str,
        location: GeoPoint,
    ) -> Result<HistoryEntry, AppError> {
        let start = Instant::now();
        let result = self.save_report(username, location).await;
        let outcome = if result.is_ok() { "success" } else { "error" };

        self.metrics
            .report_latency_seconds
            .with_label_values(&[outcome])
            .observe(start.elapsed().as_secs_f64());
        self.metrics
            .position_reports_total
            .with_label_values(&[outcome])
            .inc();

        result
    }

    async fn save_report(
        &self,
        username: &str,
        location: GeoPoint,
    ) -> Result<HistoryEntry, AppError> {
        // Exists-then-update races against concurrent reports for the same
        // username, so the whole sequence runs under a per-username lock.
        let lock = self
            .report_locks
            .entry(username.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        let known = self
            .positions
            .exists(username)
            .await
            .map_err(|err| AppError::storage(format!("position lookup for {username}"), err))?;

        let distance_km = if known {
            let previous = self
                .history
                .most_recent(username)
                .await
                .map_err(|err| AppError::storage(format!("history lookup for {username}"), err))?
                .ok_or_else(|| {
                    // A position without history means the two records have
                    // diverged; failing loudly beats recording distance zero.
                    AppError::Internal(format!(
                        "position exists for {username} but history is empty"
                    ))
                })?;
            haversine_km(&previous.location, &location)
        } else {
            0.0
        };

        let now = Utc::now();
        self.positions
            .upsert(username, location.clone(), now)
            .await
            .map_err(|err| AppError::storage(format!("position upsert for {username}"), err))?;

        let entry = HistoryEntry {
            username: username.to_string(),
            location,
            distance_km,
            recorded_at: now,
        };
        self.history
            .append(entry.clone())
            .await
            .map_err(|err| AppError::storage(format!("history append for {username}"), err))?;

        if !known {
            self.metrics.tracked_entities.inc();
        }

        let _ = self.events_tx.send(entry.clone());

        info!(
            username = %entry.username,
            distance_km = entry.distance_km,
            "position recorded"
        );

        Ok(entry)
    }

    /// Pages through every tracked position within `radius_km` of `center`,
    /// nearest first. Totals and the page slice both refer to the
    /// exact-circle match set.
    pub async fn find_by_radius(
        &self,
        center: GeoPoint,
        radius_km: f64,
        page: u64,
        page_size: u64,
    ) -> Result<PositionPage, AppError> {
        let result = self.search_radius(center, radius_km, page, page_size).await;
        let outcome = if result.is_ok() { "success" } else { "error" };
        self.metrics
            .radius_queries_total
            .with_label_values(&[outcome])
            .inc();
        result
    }

    async fn search_radius(
        &self,
        center: GeoPoint,
        radius_km: f64,
        page: u64,
        page_size: u64,
    ) -> Result<PositionPage, AppError> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(AppError::Validation(format!(
                "radius_km must be a positive number, got {radius_km}"
            )));
        }
        if page == 0 {
            return Err(AppError::Validation("page numbers are 1-based".to_string()));
        }
        if page_size == 0 {
            return Err(AppError::Validation("page_size must be >= 1".to_string()));
        }

        let bounds = bounding_box(&center, radius_km);
        let candidates = self
            .positions
            .query_bounding_box(&bounds)
            .await
            .map_err(|err| AppError::storage("bounding box query", err))?;
        let candidate_count = candidates.len();

        // The box circumscribes the circle; the haversine check is the
        // actual membership test.
        let mut matches: Vec<(f64, Position)> = candidates
            .into_iter()
            .filter_map(|position| {
                let distance = haversine_km(&center, &position.location);
                (distance <= radius_km).then_some((distance, position))
            })
            .collect();
        matches.sort_by(|a, b| {
            a.0.total_cmp(&b.0)
                .then_with(|| a.1.username.cmp(&b.1.username))
        });

        let total_items = matches.len() as u64;
        let total_pages = total_items.div_ceil(page_size);
        let offset = (page - 1).saturating_mul(page_size);
        let positions: Vec<Position> = matches
            .into_iter()
            .skip(offset as usize)
            .take(page_size as usize)
            .map(|(_, position)| position)
            .collect();

        debug!(
            candidates = candidate_count,
            matched = total_items,
            page,
            "radius search"
        );

        Ok(PositionPage {
            positions,
            total_items,
            total_pages,
        })
    }

    /// Sums the distance traveled by `username` over `[start, end]`
    /// inclusive. A missing bound defaults the window to the last 24 hours;
    /// a reversed range is swapped rather than rejected.
    pub async fn distance_traveled(
        &self,
        username: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<DistanceTraveled, AppError> {
        let result = self.sum_window(username, start, end).await;
        let outcome = if result.is_ok() { "success" } else { "error" };
        self.metrics
            .distance_queries_total
            .with_label_values(&[outcome])
            .inc();
        result
    }

    async fn sum_window(
        &self,
        username: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<DistanceTraveled, AppError> {
        let (mut start, mut end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                let end = Utc::now();
                (end - Duration::hours(24), end)
            }
        };
        if end < start {
            std::mem::swap(&mut start, &mut end);
        }

        let total = self
            .history
            .sum_distance(username, start, end)
            .await
            .map_err(|err| AppError::storage(format!("distance aggregation for {username}"), err))?
            .ok_or_else(|| {
                AppError::NotFound(format!("no history for {username} between {start} and {end}"))
            })?;

        debug!(username = %username, total_distance_km = total, "distance traveled");

        Ok(DistanceTraveled {
            username: username.to_string(),
            total_distance_km: total,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};
    use tokio::sync::broadcast;

    use super::TrackingService;
    use crate::error::AppError;
    use crate::geo::{destination, haversine_km, BoundingBox};
    use crate::models::history::HistoryEntry;
    use crate::models::position::GeoPoint;
    use crate::observability::metrics::Metrics;
    use crate::store::memory::{MemoryHistoryStore, MemoryPositionStore};
    use crate::store::{HistoryStore, PositionStore, StoreError};

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint { lat, lng }
    }

    fn service() -> (
        TrackingService,
        Arc<MemoryPositionStore>,
        Arc<MemoryHistoryStore>,
        broadcast::Receiver<HistoryEntry>,
    ) {
        let positions = Arc::new(MemoryPositionStore::new());
        let history = Arc::new(MemoryHistoryStore::new());
        let (events_tx, events_rx) = broadcast::channel(64);
        let tracking = TrackingService::new(
            positions.clone(),
            history.clone(),
            events_tx,
            Metrics::new(),
        );
        (tracking, positions, history, events_rx)
    }

    fn backdated(username: &str, distance_km: f64, age_hours: i64) -> HistoryEntry {
        HistoryEntry {
            username: username.to_string(),
            location: point(10.0, 10.0),
            distance_km,
            recorded_at: Utc::now() - Duration::hours(age_hours),
        }
    }

    #[tokio::test]
    async fn first_report_has_zero_distance() {
        let (tracking, _, _, _rx) = service();

        let entry = tracking
            .report_position("wanderer1", point(10.0, 10.0))
            .await
            .unwrap();

        assert_eq!(entry.distance_km, 0.0);
        assert_eq!(tracking.metrics.tracked_entities.get(), 1);
    }

    #[tokio::test]
    async fn second_report_measures_great_circle_distance() {
        let (tracking, _, history, _rx) = service();

        tracking
            .report_position("wanderer1", point(10.0, 10.0))
            .await
            .unwrap();
        let entry = tracking
            .report_position("wanderer1", point(40.0, 40.0))
            .await
            .unwrap();

        let expected = haversine_km(&point(10.0, 10.0), &point(40.0, 40.0));
        assert!((entry.distance_km - expected).abs() < 1e-9);

        let latest = history.most_recent("wanderer1").await.unwrap().unwrap();
        assert_eq!(latest.location, point(40.0, 40.0));
    }

    #[tokio::test]
    async fn distances_are_tracked_per_username() {
        let (tracking, _, _, _rx) = service();

        tracking
            .report_position("walker01", point(0.0, 0.0))
            .await
            .unwrap();
        tracking
            .report_position("sailor02", point(50.0, 50.0))
            .await
            .unwrap();
        let entry = tracking
            .report_position("walker01", point(0.0, 1.0))
            .await
            .unwrap();

        let expected = haversine_km(&point(0.0, 0.0), &point(0.0, 1.0));
        assert!((entry.distance_km - expected).abs() < 1e-9);
        assert_eq!(tracking.metrics.tracked_entities.get(), 2);
    }

    #[tokio::test]
    async fn report_fails_when_position_exists_without_history() {
        let (tracking, positions, _, _rx) = service();

        positions
            .upsert("orphan01", point(10.0, 10.0), Utc::now())
            .await
            .unwrap();

        let err = tracking
            .report_position("orphan01", point(11.0, 11.0))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn concurrent_reports_for_one_username_chain_distances() {
        let (tracking, _, _, mut events_rx) = service();
        let tracking = Arc::new(tracking);

        let mut tasks = Vec::new();
        for i in 0..8 {
            let tracking = tracking.clone();
            tasks.push(tokio::spawn(async move {
                tracking
                    .report_position("racer001", point(f64::from(i), f64::from(i)))
                    .await
                    .unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let mut entries = Vec::new();
        for _ in 0..8 {
            entries.push(events_rx.recv().await.unwrap());
        }

        assert_eq!(entries[0].distance_km, 0.0);
        for pair in entries.windows(2) {
            let expected = haversine_km(&pair[0].location, &pair[1].location);
            assert!(
                (pair[1].distance_km - expected).abs() < 1e-9,
                "distance must chain from the immediately preceding entry"
            );
        }
        assert_eq!(tracking.metrics.tracked_entities.get(), 1);
    }

    #[tokio::test]
    async fn radius_search_finds_single_report_at_center() {
        let (tracking, _, _, _rx) = service();
        tracking
            .report_position("wanderer1", point(10.0, 10.0))
            .await
            .unwrap();

        let page = tracking
            .find_by_radius(point(10.0, 10.0), 10.0, 1, 10)
            .await
            .unwrap();

        assert_eq!(page.total_items, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.positions.len(), 1);
        assert_eq!(page.positions[0].username, "wanderer1");
    }

    #[tokio::test]
    async fn radius_search_excludes_box_corner_outside_circle() {
        let (tracking, _, _, _rx) = service();

        // ~89 km north of the center: inside the circle.
        tracking
            .report_position("nearby01", point(0.8, 0.0))
            .await
            .unwrap();
        // Inside the 100 km bounding box but ~134 km from the center.
        tracking
            .report_position("corner01", point(0.85, 0.85))
            .await
            .unwrap();

        let page = tracking
            .find_by_radius(point(0.0, 0.0), 100.0, 1, 10)
            .await
            .unwrap();

        assert_eq!(page.total_items, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.positions[0].username, "nearby01");
    }

    #[tokio::test]
    async fn radius_search_reaches_across_the_pole() {
        let (tracking, _, _, _rx) = service();

        // 90 km due north of the center, on the far side of the pole.
        let beyond = destination(&point(89.5, 0.0), 90.0, 0.0);
        tracking.report_position("polarbear", beyond).await.unwrap();

        let page = tracking
            .find_by_radius(point(89.5, 0.0), 100.0, 1, 10)
            .await
            .unwrap();

        assert_eq!(page.total_items, 1);
        assert_eq!(page.positions[0].username, "polarbear");
    }

    #[tokio::test]
    async fn radius_search_paginates_the_filtered_set() {
        let (tracking, _, _, _rx) = service();

        for i in 1..=5 {
            tracking
                .report_position(&format!("pacer{i:02}"), point(0.0, 0.1 * f64::from(i)))
                .await
                .unwrap();
        }

        let first = tracking
            .find_by_radius(point(0.0, 0.0), 100.0, 1, 2)
            .await
            .unwrap();
        assert_eq!(first.total_items, 5);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.positions.len(), 2);
        // nearest first
        assert_eq!(first.positions[0].username, "pacer01");
        assert_eq!(first.positions[1].username, "pacer02");

        let last = tracking
            .find_by_radius(point(0.0, 0.0), 100.0, 3, 2)
            .await
            .unwrap();
        assert_eq!(last.positions.len(), 1);
        assert_eq!(last.positions[0].username, "pacer05");

        let past_end = tracking
            .find_by_radius(point(0.0, 0.0), 100.0, 4, 2)
            .await
            .unwrap();
        assert!(past_end.positions.is_empty());
        assert_eq!(past_end.total_items, 5);
        assert_eq!(past_end.total_pages, 3);
    }

    #[tokio::test]
    async fn radius_search_rejects_degenerate_paging_and_radius() {
        let (tracking, _, _, _rx) = service();

        let err = tracking
            .find_by_radius(point(0.0, 0.0), 10.0, 1, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = tracking
            .find_by_radius(point(0.0, 0.0), 10.0, 0, 10)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = tracking
            .find_by_radius(point(0.0, 0.0), -1.0, 1, 10)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn distance_traveled_defaults_to_last_24_hours() {
        let (tracking, _, history, _rx) = service();

        history.append(backdated("hiker001", 100.0, 30)).await.unwrap();
        history.append(backdated("hiker001", 5.0, 2)).await.unwrap();

        let total = tracking
            .distance_traveled("hiker001", None, None)
            .await
            .unwrap();
        assert_eq!(total.total_distance_km, 5.0);
    }

    #[tokio::test]
    async fn distance_traveled_tolerates_reversed_range() {
        let (tracking, _, _, _rx) = service();

        tracking
            .report_position("wanderer1", point(10.0, 10.0))
            .await
            .unwrap();
        tracking
            .report_position("wanderer1", point(40.0, 40.0))
            .await
            .unwrap();

        let start = Utc::now() - Duration::hours(48);
        let end = Utc::now() + Duration::hours(1);

        let forward = tracking
            .distance_traveled("wanderer1", Some(start), Some(end))
            .await
            .unwrap();
        let reversed = tracking
            .distance_traveled("wanderer1", Some(end), Some(start))
            .await
            .unwrap();

        let expected = haversine_km(&point(10.0, 10.0), &point(40.0, 40.0));
        assert!((forward.total_distance_km - expected).abs() < 1e-9);
        assert_eq!(forward.total_distance_km, reversed.total_distance_km);
    }

    #[tokio::test]
    async fn distance_traveled_zero_total_is_not_an_error() {
        let (tracking, _, _, _rx) = service();

        tracking
            .report_position("wanderer1", point(10.0, 10.0))
            .await
            .unwrap();

        let total = tracking
            .distance_traveled("wanderer1", None, None)
            .await
            .unwrap();
        assert_eq!(total.total_distance_km, 0.0);
    }

    #[tokio::test]
    async fn distance_traveled_without_history_is_not_found() {
        let (tracking, _, _, _rx) = service();

        let err = tracking
            .distance_traveled("nobody99", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn distance_traveled_ignores_entries_outside_the_window() {
        let (tracking, _, history, _rx) = service();

        history.append(backdated("hiker001", 3.0, 10)).await.unwrap();
        history.append(backdated("hiker001", 4.0, 5)).await.unwrap();

        let start = Utc::now() - Duration::hours(6);
        let end = Utc::now();
        let total = tracking
            .distance_traveled("hiker001", Some(start), Some(end))
            .await
            .unwrap();
        assert_eq!(total.total_distance_km, 4.0);
    }

    struct FailingPositionStore;

    #[async_trait]
    impl PositionStore for FailingPositionStore {
        async fn exists(&self, _username: &str) -> Result<bool, StoreError> {
            Err(StoreError::Unavailable("positions offline".to_string()))
        }

        async fn upsert(
            &self,
            _username: &str,
            _location: GeoPoint,
            _updated_at: DateTime<Utc>,
        ) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("positions offline".to_string()))
        }

        async fn query_bounding_box(
            &self,
            _bounds: &BoundingBox,
        ) -> Result<Vec<crate::models::position::Position>, StoreError> {
            Err(StoreError::Query("bad bounding box scan".to_string()))
        }
    }

    #[tokio::test]
    async fn storage_failures_carry_operation_context() {
        let (events_tx, _rx) = broadcast::channel(8);
        let tracking = TrackingService::new(
            Arc::new(FailingPositionStore),
            Arc::new(MemoryHistoryStore::new()),
            events_tx,
            Metrics::new(),
        );

        let err = tracking
            .report_position("wanderer1", point(10.0, 10.0))
            .await
            .unwrap_err();
        match err {
            AppError::Storage { context, .. } => {
                assert!(context.contains("position lookup for wanderer1"));
            }
            other => panic!("expected storage error, got {other:?}"),
        }

        let err = tracking
            .find_by_radius(point(0.0, 0.0), 10.0, 1, 10)
            .await
            .unwrap_err();
        match err {
            AppError::Storage { context, source } => {
                assert_eq!(context, "bounding box query");
                assert!(source.to_string().contains("bad bounding box scan"));
            }
            other => panic!("expected storage error, got {other:?}"),
        }
    }
}
