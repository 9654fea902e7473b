use super::types::{CityForecast, ForecastFeed};
use super::{FetchError, ForecastProvider};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub struct OpenWeatherClient {
    client: Client,
    config: Config,
}

impl OpenWeatherClient {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .user_agent("WeatherOutlook/1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    // One attempt per request; a failed fetch is terminal for that query.
    async fn make_request(&self, url: &str, params: &[(&str, &str)]) -> Result<Value, FetchError> {
        let response = self.client.get(url).query(params).send().await?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let json: Value = response.json().await?;
                Ok(json)
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                tracing::warn!("OpenWeather replied {}: {}", status, error_text);
                Err(FetchError::Provider(format!(
                    "HTTP {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherClient {
    async fn fetch_forecast(&self, city: &str) -> Result<CityForecast, FetchError> {
        let url = format!(
            "{}{}",
            self.config.openweather_base_url, self.config.openweather_forecast_path
        );

        let response = self
            .make_request(
                &url,
                &[
                    ("q", city),
                    ("units", &self.config.openweather_units),
                    ("appid", &self.config.openweather_api_key),
                ],
            )
            .await?;

        let feed: ForecastFeed = serde_json::from_value(response)?;
        Ok(feed.into())
    }
}
