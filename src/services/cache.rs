use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// In-process TTL cache of published candidate lists
///
/// Keyed by table name. A TTL of zero disables caching entirely,
/// so every lookup goes to the content store.
pub struct CatalogCache<T> {
    inner: Option<Cache<String, Arc<Vec<T>>>>,
}

impl<T> CatalogCache<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let inner = (ttl_secs > 0).then(|| {
            Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(Duration::from_secs(ttl_secs))
                .build()
        });

        Self { inner }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    pub async fn get(&self, key: &str) -> Option<Arc<Vec<T>>> {
        let cache = self.inner.as_ref()?;
        let hit = cache.get(key).await;
        if hit.is_some() {
            tracing::trace!("Catalog cache hit: {}", key);
        } else {
            tracing::trace!("Catalog cache miss: {}", key);
        }
        hit
    }

    pub async fn insert(&self, key: &str, rows: Arc<Vec<T>>) {
        if let Some(cache) = &self.inner {
            cache.insert(key.to_string(), rows).await;
            tracing::trace!("Catalog cache set: {}", key);
        }
    }
}
