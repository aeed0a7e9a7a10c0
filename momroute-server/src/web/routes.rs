//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::directions::{DirectionsError, DirectionsRequest, parse_routes};
use crate::domain::{InaccessibleStations, InvalidInput, Itinerary, StationKey};
use crate::scoring::{ScoringConfig, rank};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/mta-elevators", get(list_inaccessible))
        .route("/routes/plan", post(plan_routes))
        .route("/api/score", post(score_routes))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the route form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let template = IndexTemplate {
        default_max_walk: state.scoring.max_walk_minutes.round() as u32,
        outage_count: state.outages.current().await.len(),
        outages_as_of: state
            .outages
            .refreshed_at()
            .await
            .map(|t| t.format("%H:%M UTC").to_string()),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Stations currently without elevator service, alphabetically.
async fn list_inaccessible(State(state): State<AppState>) -> Json<Vec<StationKey>> {
    Json(state.outages.current().await.sorted())
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse a JSON body, logging it on failure.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "rejecting malformed JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Plan routes between two places and rank them for accessibility.
async fn plan_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let req: PlanRoutesRequest = parse_body(&body)?;

    let config = state
        .scoring
        .with_overrides(req.max_walk_mins, req.prioritize_accessibility)?;
    let trip = DirectionsRequest::new(&req.origin, &req.destination)?;

    let itineraries = state.directions.plan(&trip).await?;
    let inaccessible = state.outages.current().await;

    info!(
        origin = %trip.origin,
        destination = %trip.destination,
        candidates = itineraries.len(),
        outages = inaccessible.len(),
        "ranking routes"
    );

    respond(&headers, &itineraries, &inaccessible, &config)
}

/// Score caller-supplied routes without contacting any provider.
async fn score_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let req: ScoreRoutesRequest = parse_body(&body)?;

    let config = state
        .scoring
        .with_overrides(req.max_walk_mins, req.prioritize_accessibility)?;
    let itineraries = parse_routes(&req.routes)?;
    let inaccessible = req.inaccessible_stations()?;

    respond(&headers, &itineraries, &inaccessible, &config)
}

/// Rank itineraries and render them as HTML or JSON per the Accept header.
fn respond(
    headers: &HeaderMap,
    itineraries: &[Itinerary],
    inaccessible: &InaccessibleStations,
    config: &ScoringConfig,
) -> Result<Response, AppError> {
    let ranked = rank(itineraries, inaccessible, config);

    if accepts_html(headers) {
        let template = RouteResultsTemplate::from_ranked(&ranked, inaccessible);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(RankedRoutesResponse::from_ranked(&ranked, inaccessible)).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<InvalidInput> for AppError {
    fn from(e: InvalidInput) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<DirectionsError> for AppError {
    fn from(e: DirectionsError) -> Self {
        match e {
            DirectionsError::MissingEndpoint(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
