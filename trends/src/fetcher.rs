use crate::api::{Filter, RepositoryRecord, Result, SearchClient};
use crate::query;
use chrono::{NaiveDate, Utc};
use derive_more::Constructor;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

pub const FIRST_PAGE_NUMBER: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_MAX_PAGES: u32 = 3;
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct FetchConfig {
    /// Upper bound of requested pages per fetch.
    pub max_pages: u32,
    /// Page size, capped at `MAX_PAGE_SIZE`. A shorter page ends pagination.
    pub per_page: u32,
    /// Pause between consecutive page requests.
    pub page_delay: Duration,
    /// Repositories created within this many days are searched.
    pub window_days: i64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            max_pages: DEFAULT_MAX_PAGES,
            per_page: MAX_PAGE_SIZE,
            page_delay: DEFAULT_PAGE_DELAY,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

/// Retrieves every page of recently created repositories matching a `Filter`.
///
/// Pages are requested one after another. Any failed page fails the whole fetch,
/// pages collected before it are dropped.
pub struct Fetcher<CLIENT>
where
    CLIENT: SearchClient,
{
    client: Arc<CLIENT>,
    config: FetchConfig,
}

impl<CLIENT> Clone for Fetcher<CLIENT>
where
    CLIENT: SearchClient,
{
    fn clone(&self) -> Self {
        Fetcher {
            client: self.client.clone(),
            config: self.config.clone(),
        }
    }
}

impl<CLIENT> Fetcher<CLIENT>
where
    CLIENT: 'static + SearchClient,
{
    pub fn new(client: CLIENT, mut config: FetchConfig) -> Self {
        config.per_page = config.per_page.clamp(1, MAX_PAGE_SIZE);
        Fetcher {
            client: Arc::new(client),
            config,
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub async fn fetch(&self, filter: &Filter) -> Result<Vec<RepositoryRecord>> {
        let created_after = query::created_after(Utc::now().date_naive(), self.config.window_days);
        self.fetch_since(filter, created_after).await
    }

    pub async fn fetch_since(&self, filter: &Filter, created_after: NaiveDate) -> Result<Vec<RepositoryRecord>> {
        let query = query::search_query(filter, created_after);
        let per_page = self.config.per_page;
        let mut paginator = Paginator::new(FIRST_PAGE_NUMBER, FIRST_PAGE_NUMBER.saturating_add(self.config.max_pages));
        let mut repos = Vec::new();

        while let Some(page_no) = paginator.next_page() {
            let page = self.client.search_page(&query, page_no, per_page).await?;
            debug!("Page {} of '{}' returned {} repositories", page_no, query, page.items.len());
            let last_page = page.items.len() < per_page as usize;
            repos.extend(page.items);
            if last_page || paginator.is_exhausted() {
                info!("Finished fetching. Total pages: {}. Total repos: {}", page_no, repos.len());
                break;
            }
            tokio::time::sleep(self.config.page_delay).await;
        }
        Ok(repos)
    }
}

#[derive(Constructor)]
struct Paginator {
    page_no: u32,
    end: u32,
}

impl Paginator {
    fn next_page(&mut self) -> Option<u32> {
        if self.is_exhausted() {
            return None;
        }
        let page_no = self.page_no;
        self.page_no += 1;
        Some(page_no)
    }

    fn is_exhausted(&self) -> bool {
        self.page_no >= self.end
    }
}
