//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::{Language, StationCode};
use crate::feed::{FeedOptions, train_to_record};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/station/:station", get(station_departures))
        .route("/train/:date/:number/:station", get(train_details))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Departure feed of one station.
async fn station_departures(
    State(state): State<AppState>,
    Path(station): Path<String>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<StationResponse>, AppError> {
    let code = parse_station(&station)?;
    let (language, options) = parse_query(&query)?;

    let trains = state
        .store
        .departures(&code)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown station: {station}"),
        })?;

    let now = state.now();
    let mut departures = Vec::with_capacity(trains.len());
    for train in trains {
        if let Some(record) =
            train_to_record(train, language, now, options, &state.serviceinfo).await
        {
            departures.push(record);
        }
    }

    debug!(
        station = %code,
        departures = departures.len(),
        "served station feed"
    );

    Ok(Json(StationResponse::new(departures)))
}

/// A single train departing from a station.
async fn train_details(
    State(state): State<AppState>,
    Path((date, number, station)): Path<(String, String, String)>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<TrainResponse>, AppError> {
    let service_date =
        NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| AppError::BadRequest {
            message: format!("Invalid date: {date}"),
        })?;
    let code = parse_station(&station)?;
    let (language, options) = parse_query(&query)?;

    let not_found = || AppError::NotFound {
        message: format!("Train {number} on {service_date} not found at {station}"),
    };

    let train = state
        .store
        .find_train(&code, service_date, &number)
        .ok_or_else(not_found)?;

    let record = train_to_record(train, language, state.now(), options, &state.serviceinfo)
        .await
        .ok_or_else(not_found)?;

    Ok(Json(TrainResponse::new(record)))
}

fn parse_station(station: &str) -> Result<StationCode, AppError> {
    StationCode::parse(station).map_err(|e| AppError::BadRequest {
        message: format!("{e}: {station}"),
    })
}

fn parse_query(query: &FeedQuery) -> Result<(Language, FeedOptions), AppError> {
    let options = query.options().map_err(|param| AppError::BadRequest {
        message: format!("Invalid boolean for {param}"),
    })?;
    Ok((query.language(), options))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
