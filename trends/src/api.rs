use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_more::Constructor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// GitHub answers 403 when the search quota is exhausted.
    #[error("Rate limit exceeded{}", reset_suffix(.reset_at))]
    RateLimited { reset_at: Option<DateTime<Utc>> },
    #[error("Request failed with status: {0}")]
    HttpFailure(u16),
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn reset_suffix(reset_at: &Option<DateTime<Utc>>) -> String {
    match reset_at {
        Some(reset_at) => format!(". Resets at {}", reset_at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => String::new(),
    }
}

impl Error {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }

    /// HTTP status behind the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RateLimited { .. } => Some(403),
            Error::HttpFailure(status) => Some(*status),
            Error::Transport(err) => err.status().map(|status| status.as_u16()),
            Error::Other(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Repository as returned by the search endpoint. Never modified locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub description: Option<String>,
}

/// Search criteria narrowing the repository query. Also used as the cache key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Filter {
    pub location: Option<String>,
    pub topic: Option<String>,
}

impl Filter {
    /// Blank criteria are treated as absent.
    pub fn new(location: Option<String>, topic: Option<String>) -> Self {
        Filter {
            location: non_blank(location),
            topic: non_blank(topic),
        }
    }

    pub fn with_location(mut self, location: impl AsRef<str>) -> Self {
        self.location = non_blank(Some(location));
        self
    }

    pub fn with_topic(mut self, topic: impl AsRef<str>) -> Self {
        self.topic = non_blank(Some(topic));
        self
    }

    pub fn location(&self) -> Option<&str> {
        present(&self.location)
    }

    pub fn topic(&self) -> Option<&str> {
        present(&self.topic)
    }

    pub fn is_filtered(&self) -> bool {
        self.location().is_some() || self.topic().is_some()
    }

    /// Same criteria with blank values dropped and the rest trimmed.
    pub fn normalized(&self) -> Filter {
        Filter::new(self.location.clone(), self.topic.clone())
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

fn non_blank<S: AsRef<str>>(value: Option<S>) -> Option<String> {
    value
        .map(|value| value.as_ref().trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Single page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct SearchPage {
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<RepositoryRecord>,
}

/// One bar of the language chart.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct SeriesPoint {
    pub label: String,
    pub count: u32,
}

#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Fetches a single page of repositories matching `query`, sorted by stars descending.
    async fn search_page(&self, query: &str, page: u32, per_page: u32) -> Result<SearchPage>;
}
