use crate::cache::{cache_key, CacheStore};
use crate::forecast::reduce::{summarize, target_date};
use crate::forecast::types::ForecastSummary;
use crate::forecast::{FetchError, ForecastProvider};
use crate::history::{HistoryItem, SearchHistory};
use std::time::Duration;
use tokio::sync::Mutex;

/// Per-request pipeline: cache lookup, then on miss fetch → reduce → cache
/// insert → history record. Owns the cache and history it mutates, so tests
/// can run against isolated instances.
pub struct QueryCoordinator<P> {
    provider: P,
    cache: Mutex<CacheStore>,
    history: Mutex<SearchHistory>,
}

impl<P: ForecastProvider> QueryCoordinator<P> {
    pub fn new(provider: P, ttl: Duration) -> Self {
        Self {
            provider,
            cache: Mutex::new(CacheStore::new(ttl)),
            history: Mutex::new(SearchHistory::new()),
        }
    }

    /// A cache hit replays the stored summary without fetching and without
    /// touching history. On a miss the fetch runs outside both locks, so two
    /// concurrent misses for one key may each fetch and insert; the last
    /// writer wins.
    pub async fn query(&self, city: &str, day: &str) -> Result<ForecastSummary, FetchError> {
        let key = cache_key(city, day);

        if let Some(hit) = self.cache.lock().await.lookup(&key) {
            return Ok(hit.clone());
        }
        tracing::debug!("cache miss for {}, fetching", key);

        let forecast = self.provider.fetch_forecast(city).await?;

        // Wall-clock UTC calendar date at reduction time
        let target = target_date(day, chrono::Utc::now().date_naive());
        let summary = summarize(&forecast.samples, target, &forecast.city_name, day);

        self.cache.lock().await.insert(key, summary.clone());
        self.history.lock().await.record(HistoryItem {
            city: city.to_lowercase(),
            day: day.to_string(),
        });

        Ok(summary)
    }

    pub async fn history_snapshot(&self) -> Vec<HistoryItem> {
        self.history.lock().await.snapshot()
    }
}
