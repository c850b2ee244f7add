use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::history::{DistanceTraveled, HistoryEntry};
use crate::models::position::{GeoPoint, PositionPage};
use crate::state::AppState;
use crate::validation::{validate_point, validate_username};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/positions", post(report_position))
        .route("/positions/radius", get(find_by_radius))
        .route("/positions/:username/distance", get(distance_traveled))
}

#[derive(Deserialize)]
pub struct ReportPositionRequest {
    pub username: String,
    pub location: GeoPoint,
}

#[derive(Deserialize)]
pub struct RadiusQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    20
}

#[derive(Deserialize)]
pub struct DistanceQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

async fn report_position(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ReportPositionRequest>,
) -> Result<Json<HistoryEntry>, AppError> {
    validate_username(&payload.username)?;
    validate_point(&payload.location)?;

    let entry = state
        .tracking
        .report_position(&payload.username, payload.location)
        .await?;

    Ok(Json(entry))
}

async fn find_by_radius(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RadiusQuery>,
) -> Result<Json<PositionPage>, AppError> {
    let center = GeoPoint {
        lat: query.latitude,
        lng: query.longitude,
    };
    validate_point(&center)?;

    let page = state
        .tracking
        .find_by_radius(center, query.radius_km, query.page, query.page_size)
        .await?;

    Ok(Json(page))
}

async fn distance_traveled(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Query(query): Query<DistanceQuery>,
) -> Result<Json<DistanceTraveled>, AppError> {
    validate_username(&username)?;

    let traveled = state
        .tracking
        .distance_traveled(&username, query.start, query.end)
        .await?;

    Ok(Json(traveled))
}
