use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Когда запись кэша считается устаревшей
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    TimeToLive(Duration),
    Forever,
}

impl CachePolicy {
    /// `None` means the value is cached for the lifetime of the process.
    pub fn from_ttl_secs(ttl_secs: Option<u64>) -> Self {
        match ttl_secs {
            Some(secs) => CachePolicy::TimeToLive(Duration::from_secs(secs)),
            None => CachePolicy::Forever,
        }
    }

    pub fn is_fresh(&self, stored_at: Instant, now: Instant) -> bool {
        match self {
            CachePolicy::Forever => true,
            CachePolicy::TimeToLive(ttl) => now.saturating_duration_since(stored_at) < *ttl,
        }
    }
}

struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Process-wide cache keyed by the inputs of an expensive computation.
///
/// Values are cloned out on every hit, so `V` is usually an `Arc`.
pub struct TtlCache<K, V> {
    policy: CachePolicy,
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    V: Clone,
{
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fresh value for `key`, if any
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|e| self.policy.is_fresh(e.stored_at, Instant::now()))
            .map(|e| e.value.clone())
    }

    /// Return the cached value or compute, store and return a new one.
    ///
    /// A failed computation leaves the cache untouched.
    pub async fn get_or_try_insert_with<E, F>(&self, key: &K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(key).await {
            tracing::debug!("Cache hit for {:?}", key);
            return Ok(value);
        }

        let mut entries = self.entries.write().await;
        // Another request may have filled the entry while we waited for the lock
        if let Some(entry) = entries.get(key) {
            if self.policy.is_fresh(entry.stored_at, Instant::now()) {
                return Ok(entry.value.clone());
            }
        }

        tracing::info!("Cache miss for {:?}, recomputing", key);
        let value = compute()?;
        entries.insert(
            key.clone(),
            CacheEntry {
                value: value.clone(),
                stored_at: Instant::now(),
            },
        );
        Ok(value)
    }

    /// Drop one entry; 1 if it was present, otherwise 0
    pub async fn invalidate(&self, key: &K) -> usize {
        usize::from(self.entries.write().await.remove(key).is_some())
    }

    /// Drop every entry, returning how many were dropped
    pub async fn invalidate_all(&self) -> usize {
        let mut entries = self.entries.write().await;
        let dropped = entries.len();
        entries.clear();
        dropped
    }
}
