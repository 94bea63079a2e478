use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::skills::SkillSet;
use crate::models::{RankResponse, RankingQuery};

/// Cache key for a ranking query
///
/// Coordinates and weights are compared by their exact bit patterns and
/// skills by their normalized, sorted form, so only equivalent queries
/// share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    latitude: u64,
    longitude: u64,
    skills: Vec<String>,
    proximity: u64,
    skill_weight: u64,
    limit: usize,
}

impl CacheKey {
    pub fn ranking(query: &RankingQuery) -> Self {
        Self {
            latitude: query.origin.latitude.to_bits(),
            longitude: query.origin.longitude.to_bits(),
            skills: SkillSet::new(&query.skills).sorted(),
            proximity: query.weights.proximity.to_bits(),
            skill_weight: query.weights.skills.to_bits(),
            limit: query.limit,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

/// In-process memo of ranking responses
///
/// Ranking is a pure function of the query and the catalog, and the catalog
/// is fixed for the life of the process, so entries never go stale before
/// their TTL.
#[derive(Clone)]
pub struct RankingCache {
    inner: Option<moka::future::Cache<CacheKey, Arc<RankResponse>>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl RankingCache {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            inner: Some(cache),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A cache that stores nothing
    pub fn disabled() -> Self {
        Self {
            inner: None,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    pub async fn get(&self, key: &CacheKey) -> Option<Arc<RankResponse>> {
        let cache = self.inner.as_ref()?;

        match cache.get(key).await {
            Some(value) => {
                tracing::trace!("Cache hit: {:?}", key);
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(value)
            }
            None => {
                tracing::trace!("Cache miss: {:?}", key);
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub async fn insert(&self, key: CacheKey, value: Arc<RankResponse>) {
        if let Some(cache) = &self.inner {
            cache.insert(key, value).await;
        }
    }

    pub async fn stats(&self) -> CacheStats {
        let entries = match &self.inner {
            Some(cache) => {
                cache.run_pending_tasks().await;
                cache.entry_count()
            }
            None => 0,
        };

        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
        }
    }
}
