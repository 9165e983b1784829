//! In-memory response cache keyed by `Filter`.

use crate::api::{Error, Filter, RepositoryRecord, SearchClient};
use crate::fetcher::Fetcher;
use log::debug;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Fetched results stay fresh for an hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_CAPACITY: u64 = 64;

pub type Repositories = Arc<Vec<RepositoryRecord>>;

/// `Fetcher` with results cached per filter.
///
/// Concurrent loads of the same filter share a single fetch. Failures are not cached.
pub struct CachedFetcher<CLIENT>
where
    CLIENT: SearchClient,
{
    fetcher: Fetcher<CLIENT>,
    cache: Cache<Filter, Repositories>,
}

impl<CLIENT> CachedFetcher<CLIENT>
where
    CLIENT: 'static + SearchClient,
{
    pub fn new(fetcher: Fetcher<CLIENT>) -> Self {
        Self::with_ttl(fetcher, DEFAULT_TTL, DEFAULT_CAPACITY)
    }

    pub fn with_ttl(fetcher: Fetcher<CLIENT>, ttl: Duration, capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(capacity).time_to_live(ttl).build();
        CachedFetcher { fetcher, cache }
    }

    /// Filters differing only in blank or untrimmed criteria share one entry.
    pub async fn fetch(&self, filter: &Filter) -> Result<Repositories, Arc<Error>> {
        let fetcher = &self.fetcher;
        let key = filter.normalized();
        self.cache
            .try_get_with(key.clone(), async {
                debug!("Cache miss for {:?}", key);
                fetcher.fetch(&key).await.map(Arc::new)
            })
            .await
    }

    pub async fn invalidate(&self, filter: &Filter) {
        self.cache.invalidate(&filter.normalized()).await;
    }

    pub async fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}
