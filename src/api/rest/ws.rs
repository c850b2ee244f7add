use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{Sink, SinkExt, StreamExt};
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::models::history::HistoryEntry;
use crate::state::AppState;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let rx = state.position_events_tx.subscribe();

    info!("websocket client connected");

    let send_task = tokio::spawn(async move {
        relay_events(rx, &mut sender).await;
    });

    let recv_task = tokio::spawn(async move {
        while let Some(Ok(_msg)) = receiver.next().await {}
    });

    tokio::select! {
        _ = send_task => {},
        _ = recv_task => {},
    }

    info!("websocket client disconnected");
}

/// Forwards every broadcast entry to the socket as a JSON text frame. A
/// subscriber that falls behind the channel misses the evicted entries but
/// keeps receiving; only a closed channel or a dead socket ends the relay.
async fn relay_events<S>(mut rx: broadcast::Receiver<HistoryEntry>, sender: &mut S)
where
    S: Sink<Message> + Unpin,
{
    loop {
        let entry = match rx.recv().await {
            Ok(entry) => entry,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "websocket subscriber lagged behind the feed");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        };

        let json = match serde_json::to_string(&entry) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to serialize history entry for ws");
                continue;
            }
        };

        if sender.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::ws::Message;
    use chrono::Utc;
    use futures::channel::mpsc;
    use futures::StreamExt;
    use serde_json::Value;
    use tokio::sync::broadcast;

    use super::relay_events;
    use crate::models::history::HistoryEntry;
    use crate::models::position::GeoPoint;

    fn entry(username: &str, distance_km: f64) -> HistoryEntry {
        HistoryEntry {
            username: username.to_string(),
            location: GeoPoint {
                lat: 10.0,
                lng: 10.0,
            },
            distance_km,
            recorded_at: Utc::now(),
        }
    }

    fn text_frame(message: Message) -> Value {
        match message {
            Message::Text(text) => serde_json::from_str(&text).unwrap(),
            other => panic!("expected a text frame, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn relay_forwards_entries_as_json_text() {
        let (tx, rx) = broadcast::channel(8);
        let (mut sink, mut frames) = mpsc::unbounded();

        tx.send(entry("walker01", 0.0)).unwrap();
        tx.send(entry("walker01", 2.5)).unwrap();
        drop(tx);

        relay_events(rx, &mut sink).await;
        drop(sink);

        let first = text_frame(frames.next().await.unwrap());
        assert_eq!(first["username"], "walker01");
        assert_eq!(first["distance_km"], 0.0);

        let second = text_frame(frames.next().await.unwrap());
        assert_eq!(second["distance_km"], 2.5);
        assert!(frames.next().await.is_none());
    }

    #[tokio::test]
    async fn relay_survives_lag_and_keeps_streaming() {
        // Two sends into a single-slot channel before the relay polls: the
        // subscriber observes a lag in place of the evicted first entry.
        let (tx, rx) = broadcast::channel(1);
        let (mut sink, mut frames) = mpsc::unbounded();

        tx.send(entry("walker01", 1.0)).unwrap();
        tx.send(entry("walker02", 2.0)).unwrap();
        drop(tx);

        relay_events(rx, &mut sink).await;
        drop(sink);

        let survivor = text_frame(frames.next().await.unwrap());
        assert_eq!(survivor["username"], "walker02");
        assert!(frames.next().await.is_none());
    }
}
