use crate::models::{JobAttributes, PredictionResult};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// In-memory cache of prediction results
///
/// Identical attribute selections within the TTL are answered without
/// calling the prediction endpoint again.
pub struct PredictionCache {
    entries: moka::future::Cache<String, PredictionResult>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PredictionCache {
    /// Create a new prediction cache
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a cached prediction
    pub async fn get(&self, key: &str) -> Option<PredictionResult> {
        match self.entries.get(key).await {
            Some(result) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!("Prediction cache hit: {}", key);
                Some(result)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::trace!("Prediction cache miss: {}", key);
                None
            }
        }
    }

    /// Store a prediction
    pub async fn insert(&self, key: String, result: PredictionResult) {
        self.entries.insert(key, result).await;
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        CacheStats {
            size: self.entries.entry_count(),
            hit_count: hits,
            miss_count: misses,
            hit_rate: if total == 0 { 0.0 } else { hits as f64 / total as f64 },
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub size: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    pub hit_rate: f64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a prediction from the attributes sent upstream
    pub fn prediction(attributes: &JobAttributes) -> String {
        format!(
            "prediction:{}|{}|{}|{}",
            attributes.job_title,
            attributes.experience_level,
            attributes.employee_country,
            attributes.company_country
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(job: &str) -> JobAttributes {
        JobAttributes {
            job_title: job.to_string(),
            experience_level: "Senior".to_string(),
            employee_country: "Spain".to_string(),
            company_country: "Spain".to_string(),
        }
    }

    #[tokio::test]
    async fn test_cache_insert_get() {
        let cache = PredictionCache::new(100, 60);
        let key = CacheKey::prediction(&attributes("Data Scientist"));

        assert!(cache.get(&key).await.is_none());

        let result = PredictionResult {
            predicted_salary: 72_000.0,
            predicted_range: None,
        };
        cache.insert(key.clone(), result.clone()).await;

        assert_eq!(cache.get(&key).await, Some(result));

        let stats = cache.stats();
        assert_eq!(stats.hit_count, 1);
        assert_eq!(stats.miss_count, 1);
        assert_eq!(stats.hit_rate, 0.5);
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(
            CacheKey::prediction(&attributes("Data Scientist")),
            "prediction:Data Scientist|Senior|Spain|Spain"
        );
        assert_ne!(
            CacheKey::prediction(&attributes("DATA SCIENTIST")),
            CacheKey::prediction(&attributes("data scientist"))
        );
    }
}
