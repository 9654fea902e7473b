use crate::forecast::types::ForecastSummary;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Key for one (city, day) query: case-insensitive on the city, sensitive to
/// the raw day selector.
pub fn cache_key(city: &str, day: &str) -> String {
    format!("{}-{}", city.to_lowercase(), day)
}

struct CacheEntry {
    inserted_at: Instant,
    summary: ForecastSummary,
}

/// TTL-masking store for computed summaries. Stale entries are treated as
/// absent but never removed; the next successful fetch for the key overwrites
/// them in place. Growth across distinct keys is unbounded for the process
/// lifetime.
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl CacheStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&ForecastSummary> {
        self.lookup_at(key, Instant::now())
    }

    pub fn insert(&mut self, key: String, summary: ForecastSummary) {
        self.insert_at(key, summary, Instant::now());
    }

    fn lookup_at(&self, key: &str, now: Instant) -> Option<&ForecastSummary> {
        let entry = self.entries.get(key)?;
        if now.duration_since(entry.inserted_at) < self.ttl {
            tracing::debug!("cache hit for {}", key);
            Some(&entry.summary)
        } else {
            tracing::debug!("cache entry for {} expired", key);
            None
        }
    }

    fn insert_at(&mut self, key: String, summary: ForecastSummary, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                inserted_at: now,
                summary,
            },
        );
    }
}
