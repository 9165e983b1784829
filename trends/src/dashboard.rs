use crate::aggregator::{aggregate, TOP_LANGUAGES};
use crate::api::{Error, Filter, SearchClient, SeriesPoint};
use crate::cache::{CachedFetcher, Repositories};
use log::{info, warn};
use std::sync::Arc;

pub const TITLE: &str = "Top 10 Trending Languages (Repository Count)";
pub const FILTERED_SUFFIX: &str = " — FILTERED";

/// Chart-ready view of the trending repositories for one filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Trends {
    pub title: String,
    pub filter: Filter,
    pub series: Vec<SeriesPoint>,
    pub repositories: Repositories,
}

impl Trends {
    pub fn is_filtered(&self) -> bool {
        self.filter.is_filtered()
    }
}

pub struct Dashboard<CLIENT>
where
    CLIENT: SearchClient,
{
    fetcher: CachedFetcher<CLIENT>,
}

impl<CLIENT> Dashboard<CLIENT>
where
    CLIENT: 'static + SearchClient,
{
    pub fn new(fetcher: CachedFetcher<CLIENT>) -> Self {
        Dashboard { fetcher }
    }

    pub async fn load(&self, filter: &Filter) -> Result<Trends, Arc<Error>> {
        let repositories = self.fetcher.fetch(filter).await.map_err(|err| {
            warn!("Failed to load trends for {:?}: {}", filter, err);
            err
        })?;
        let series = aggregate(&repositories);
        info!(
            "{} repositories in {} languages (top {} shown)",
            repositories.len(),
            series.len(),
            TOP_LANGUAGES
        );
        Ok(Trends {
            title: title(filter),
            filter: filter.clone(),
            series,
            repositories,
        })
    }

    /// Drops the cached result so the next `load` hits the API again.
    pub async fn refresh(&self, filter: &Filter) -> Result<Trends, Arc<Error>> {
        self.fetcher.invalidate(filter).await;
        self.load(filter).await
    }
}

pub fn title(filter: &Filter) -> String {
    if filter.is_filtered() {
        format!("{}{}", TITLE, FILTERED_SUFFIX)
    } else {
        TITLE.to_string()
    }
}

/// Message shown to the user when loading fails.
pub fn user_message(err: &Error) -> String {
    match err {
        Error::RateLimited { .. } => format!(
            "Error loading trends: {}. Ensure a valid GitHub personal access token is configured.",
            err
        ),
        err => format!("Error loading trends: {}.", err),
    }
}
