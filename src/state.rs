use std::sync::Arc;

use tokio::sync::broadcast;

use crate::models::history::HistoryEntry;
use crate::observability::metrics::Metrics;
use crate::service::tracking::TrackingService;
use crate::store::memory::{MemoryHistoryStore, MemoryPositionStore};
use crate::store::{HistoryStore, PositionStore};

pub struct AppState {
    pub tracking: TrackingService,
    pub position_events_tx: broadcast::Sender<HistoryEntry>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(event_buffer_size: usize) -> Self {
        Self::with_stores(
            Arc::new(MemoryPositionStore::new()),
            Arc::new(MemoryHistoryStore::new()),
            event_buffer_size,
        )
    }

    pub fn with_stores(
        positions: Arc<dyn PositionStore>,
        history: Arc<dyn HistoryStore>,
        event_buffer_size: usize,
    ) -> Self {
        let (position_events_tx, _unused_rx) = broadcast::channel(event_buffer_size);
        let metrics = Metrics::new();

        Self {
            tracking: TrackingService::new(
                positions,
                history,
                position_events_tx.clone(),
                metrics.clone(),
            ),
            position_events_tx,
            metrics,
        }
    }
}
