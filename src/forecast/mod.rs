pub mod mock;
pub mod openweather;
pub mod reduce;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;
use types::CityForecast;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("provider error: {0}")]
    Provider(String),
}

/// Seam between the query pipeline and the upstream forecast source. One
/// read operation, keyed by city name; failure is generic at this boundary.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch_forecast(&self, city: &str) -> Result<CityForecast, FetchError>;
}
