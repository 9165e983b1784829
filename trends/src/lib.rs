//! Trending languages on GitHub
//!
//! # Overview
//!
//! Library finds the repositories created on GitHub during the last 30 days and tells which programming languages are the most popular among them.
//! Given an optional location and an optional topic (`Filter`), the `Fetcher` searches for matching repositories sorted by the number of GitHub stars, requesting up to 3 pages of 100 results.
//! Pages are requested one by one with a short pause in between, so the search API rate limiter is not triggered.
//! Then the `aggregate` function counts repositories per primary language and keeps the top 10 languages, most frequent first.
//!
//! User input is meant to pass through a `Debouncer` before it reaches the fetcher, and fetched results are cached per filter for an hour (`CachedFetcher`).
//! `Dashboard` ties it all together into a chart-ready `Trends` value.

pub mod aggregator;
pub mod api;
#[cfg(feature = "dashboard")]
pub mod cache;
#[cfg(feature = "dashboard")]
pub mod dashboard;
#[cfg(feature = "dashboard")]
pub mod debounce;
#[cfg(feature = "dashboard")]
pub mod fetcher;
pub mod query;

pub use aggregator::aggregate;
pub use api::{Error, Filter, RepositoryRecord, Result, SearchClient, SearchPage, SeriesPoint};
#[cfg(feature = "dashboard")]
pub use cache::CachedFetcher;
#[cfg(feature = "dashboard")]
pub use dashboard::{Dashboard, Trends};
#[cfg(feature = "dashboard")]
pub use debounce::Debouncer;
#[cfg(feature = "dashboard")]
pub use fetcher::{FetchConfig, Fetcher};
