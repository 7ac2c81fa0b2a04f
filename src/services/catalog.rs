use crate::models::{Journey, Story};
use crate::services::cache::CatalogCache;
use crate::services::supabase::{SupabaseClient, SupabaseError};
use std::future::Future;
use std::sync::Arc;

/// Published candidate lists, served from cache when fresh
pub struct ContentCatalog {
    store: SupabaseClient,
    journeys: CatalogCache<Journey>,
    stories: CatalogCache<Story>,
}

impl ContentCatalog {
    pub fn new(store: SupabaseClient, max_entries: u64, ttl_secs: u64) -> Self {
        Self {
            store,
            journeys: CatalogCache::new(max_entries, ttl_secs),
            stories: CatalogCache::new(max_entries, ttl_secs),
        }
    }

    pub async fn published_journeys(&self) -> Result<Arc<Vec<Journey>>, SupabaseError> {
        let table = self.store.tables().journeys.as_str();
        load(&self.journeys, table, || self.store.published_journeys()).await
    }

    pub async fn published_stories(&self) -> Result<Arc<Vec<Story>>, SupabaseError> {
        let table = self.store.tables().stories.as_str();
        load(&self.stories, table, || self.store.published_stories()).await
    }
}

async fn load<T, F, Fut>(
    cache: &CatalogCache<T>,
    table: &str,
    fetch: F,
) -> Result<Arc<Vec<T>>, SupabaseError>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>, SupabaseError>>,
{
    if let Some(rows) = cache.get(table).await {
        return Ok(rows);
    }

    let rows = Arc::new(fetch().await?);
    tracing::debug!("Loaded {} published rows from {}", rows.len(), table);
    cache.insert(table, rows.clone()).await;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::supabase::SupabaseTables;
    use mockito::Matcher;
    use std::time::Duration;

    fn catalog(url: String, ttl_secs: u64) -> ContentCatalog {
        let store = SupabaseClient::new(
            url,
            "test_key".to_string(),
            SupabaseTables {
                journeys: "journeys".to_string(),
                stories: "stories".to_string(),
            },
            Duration::from_secs(5),
        )
        .unwrap();
        ContentCatalog::new(store, 16, ttl_secs)
    }

    #[tokio::test]
    async fn test_cached_catalog_hits_store_once() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/stories")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"slug": "tea-ritual", "title": "The Tea Ritual", "tags": "tea,culture"}]"#)
            .expect(1)
            .create_async()
            .await;

        let catalog = catalog(server.url(), 300);
        let first = catalog.published_stories().await.unwrap();
        let second = catalog.published_stories().await.unwrap();

        mock.assert_async().await;
        assert_eq!(first.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_uncached_catalog_hits_store_every_time() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/journeys")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .expect(2)
            .create_async()
            .await;

        let catalog = catalog(server.url(), 0);
        catalog.published_journeys().await.unwrap();
        catalog.published_journeys().await.unwrap();

        mock.assert_async().await;
    }
}
