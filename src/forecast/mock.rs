use super::types::{CityForecast, WeatherSample};
use super::{FetchError, ForecastProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned forecast source for tests and offline development. Counts how many
/// times it is asked to fetch, so callers can assert that cache hits never
/// reach the provider.
pub struct MockWeatherClient {
    city_name: String,
    samples: Vec<WeatherSample>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockWeatherClient {
    pub fn new(city_name: impl Into<String>, samples: Vec<WeatherSample>) -> Self {
        Self {
            city_name: city_name.into(),
            samples,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A client whose every fetch fails with a generic provider error.
    pub fn failing() -> Self {
        Self {
            city_name: String::new(),
            samples: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ForecastProvider for MockWeatherClient {
    async fn fetch_forecast(&self, _city: &str) -> Result<CityForecast, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(FetchError::Provider("mock fetch failure".to_string()));
        }

        Ok(CityForecast {
            city_name: self.city_name.clone(),
            samples: self.samples.clone(),
        })
    }
}
