use axum::{
    extract::{Query, State},
    response::{Json, Redirect},
    routing::get,
    Form, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::forecast::openweather::OpenWeatherClient;
use crate::forecast::types::ForecastSummary;
use crate::history::HistoryItem;
use crate::query::QueryCoordinator;

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<QueryCoordinator<OpenWeatherClient>>,
    pub last_result: Arc<Mutex<Option<ForecastSummary>>>,
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub show: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherForm {
    pub city: String,
    pub day: String,
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub weather: Option<ForecastSummary>,
    pub error: Option<String>,
    pub history: Vec<HistoryItem>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// Display boundary. The held summary is read-once: revealing it with show=1
// takes it out of the slot, so a reload without a new submission shows no
// weather data.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexQuery>,
) -> Json<IndexResponse> {
    let show = params.show.as_deref() == Some("1");
    let weather = if show {
        state.last_result.lock().await.take()
    } else {
        None
    };

    Json(IndexResponse {
        weather,
        error: params.error,
        history: state.coordinator.history_snapshot().await,
    })
}

// Submission boundary, POST-redirect-GET: the result lands in the last-result
// slot and the client is redirected to reveal it.
pub async fn submit(State(state): State<AppState>, Form(form): Form<WeatherForm>) -> Redirect {
    match state.coordinator.query(&form.city, &form.day).await {
        Ok(summary) => {
            *state.last_result.lock().await = Some(summary);
            Redirect::to("/?show=1")
        }
        Err(e) => {
            tracing::error!("weather fetch for {} failed: {}", form.city, e);
            *state.last_result.lock().await = None;
            Redirect::to(&format!(
                "/?error={}",
                urlencoding::encode("Weather fetch failed")
            ))
        }
    }
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/health", get(health))
        .with_state(state)
}
