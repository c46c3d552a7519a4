//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::planner::{PlanError, TripRequest, TripSimulator, daily_logs};

use super::dto::*;
use super::state::AppState;

/// Default number of cities returned by the search endpoint.
const DEFAULT_CITY_LIMIT: usize = 10;

/// Upper bound on cities returned by the search endpoint.
const MAX_CITY_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities", get(search_cities))
        .route("/api/plan-trip", post(plan_trip))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search known cities by name.
async fn search_cities(
    State(state): State<AppState>,
    Query(req): Query<CitySearchRequest>,
) -> Json<CitySearchResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_CITY_LIMIT).min(MAX_CITY_LIMIT);
    let cities = state
        .locations
        .search(&req.q, limit)
        .into_iter()
        .map(CityResult::from)
        .collect();

    Json(CitySearchResponse { cities })
}

/// Simulate a trip and return its timeline, route, stops and log sheets.
async fn plan_trip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanTripResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanTripRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid plan request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;
    let request = TripRequest::from(req);

    let simulator = TripSimulator::new(&state.locations, &state.duty);
    let plan = simulator.plan(&request)?;
    let logs = daily_logs(&plan.events, request.cycle_used, &state.log_header);

    info!(
        from = %request.current_location,
        pickup = %request.pickup_location,
        dropoff = %request.dropoff_location,
        events = plan.events.len(),
        days = logs.len(),
        "Planned trip"
    );

    Ok(Json(PlanTripResponse::from_plan(&plan, &logs)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidConfig(_) => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
