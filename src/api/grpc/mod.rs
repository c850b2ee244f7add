use std::pin::Pin;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::Stream;
use tokio_stream::StreamExt;
use tonic::{Request, Response, Status};

use crate::models::history::HistoryEntry;
use crate::state::AppState;
use crate::validation::{validate_point, validate_username};

pub mod pb;

use pb::position_tracking_server::PositionTracking;
use pb::{
    FindByRadiusRequest, FindByRadiusResponse, GeoPoint, GetDistanceTraveledRequest,
    GetDistanceTraveledResponse, PositionEvent, PositionRecord, ReportPositionRequest,
    ReportPositionResponse, WatchPositionsRequest,
};

pub struct GrpcTrackingService {
    state: Arc<AppState>,
}

impl GrpcTrackingService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

fn entry_to_event(entry: &HistoryEntry) -> PositionEvent {
    PositionEvent {
        username: entry.username.clone(),
        location: Some(GeoPoint {
            lat: entry.location.lat,
            lng: entry.location.lng,
        }),
        distance_km: entry.distance_km,
        recorded_at: entry.recorded_at.to_rfc3339(),
    }
}

// Proto3 strings have no absent state, so empty means "not provided".
fn parse_rfc3339(raw: &str, field: &str) -> Result<Option<DateTime<Utc>>, Status> {
    if raw.is_empty() {
        return Ok(None);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| Some(parsed.with_timezone(&Utc)))
        .map_err(|err| Status::invalid_argument(format!("invalid {field}: {err}")))
}

#[tonic::async_trait]
impl PositionTracking for GrpcTrackingService {
    async fn report_position(
        &self,
        request: Request<ReportPositionRequest>,
    ) -> Result<Response<ReportPositionResponse>, Status> {
        let req = request.into_inner();

        validate_username(&req.username)?;

        let location = req
            .location
            .ok_or_else(|| Status::invalid_argument("location is required"))?;
        let location = crate::models::position::GeoPoint {
            lat: location.lat,
            lng: location.lng,
        };
        validate_point(&location)?;

        let entry = self
            .state
            .tracking
            .report_position(&req.username, location)
            .await?;

        Ok(Response::new(ReportPositionResponse {
            username: entry.username,
            distance_km: entry.distance_km,
            recorded_at: entry.recorded_at.to_rfc3339(),
        }))
    }

    async fn find_by_radius(
        &self,
        request: Request<FindByRadiusRequest>,
    ) -> Result<Response<FindByRadiusResponse>, Status> {
        let req = request.into_inner();

        let center = req
            .center
            .ok_or_else(|| Status::invalid_argument("center is required"))?;
        let center = crate::models::position::GeoPoint {
            lat: center.lat,
            lng: center.lng,
        };
        validate_point(&center)?;

        // Unset paging fields arrive as zero; fall back to the REST defaults.
        let page = if req.page == 0 { 1 } else { req.page };
        let page_size = if req.page_size == 0 { 20 } else { req.page_size };

        let result = self
            .state
            .tracking
            .find_by_radius(center, req.radius_km, page, page_size)
            .await?;

        let positions = result
            .positions
            .iter()
            .map(|position| PositionRecord {
                username: position.username.clone(),
                location: Some(GeoPoint {
                    lat: position.location.lat,
                    lng: position.location.lng,
                }),
                updated_at: position.updated_at.to_rfc3339(),
            })
            .collect();

        Ok(Response::new(FindByRadiusResponse {
            positions,
            total_items: result.total_items,
            total_pages: result.total_pages,
        }))
    }

    async fn get_distance_traveled(
        &self,
        request: Request<GetDistanceTraveledRequest>,
    ) -> Result<Response<GetDistanceTraveledResponse>, Status> {
        let req = request.into_inner();

        validate_username(&req.username)?;
        let start = parse_rfc3339(&req.start, "start")?;
        let end = parse_rfc3339(&req.end, "end")?;

        let traveled = self
            .state
            .tracking
            .distance_traveled(&req.username, start, end)
            .await?;

        Ok(Response::new(GetDistanceTraveledResponse {
            username: traveled.username,
            total_distance_km: traveled.total_distance_km,
        }))
    }

    type WatchPositionsStream = Pin<Box<dyn Stream<Item = Result<PositionEvent, Status>> + Send>>;

    async fn watch_positions(
        &self,
        _request: Request<WatchPositionsRequest>,
    ) -> Result<Response<Self::WatchPositionsStream>, Status> {
        let rx = self.state.position_events_tx.subscribe();
        let stream = BroadcastStream::new(rx).filter_map(|result| match result {
            Ok(entry) => Some(Ok(entry_to_event(&entry))),
            Err(_) => None,
        });

        Ok(Response::new(Box::pin(stream)))
    }
}
