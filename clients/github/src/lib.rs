use async_trait::async_trait;
use log::debug;
use log::warn;
use rate_limit::RateLimit;
use reqwest::Client;
use reqwest::StatusCode;
use trends::{Error, Result, SearchPage};

pub mod builder;
mod payload;
pub mod rate_limit;

pub use builder::{GithubClientBuilder, GITHUB_URL, PLACEHOLDER_TOKEN};

pub struct GithubClient {
    client: Client,
    github_url: String,
}

#[async_trait]
impl trends::SearchClient for GithubClient {
    async fn search_page(&self, query: &str, page: u32, per_page: u32) -> Result<SearchPage> {
        let request_url = format!("{}/search/repositories", self.github_url);
        let response = self
            .client
            .get(request_url)
            .query(&[
                ("q", query.to_string()),
                ("sort", "stars".to_string()),
                ("order", "desc".to_string()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        if let Some(limit) = RateLimit::from_headers(response.headers()) {
            debug!("Search rate limit: {:?}", limit);
        }
        match response.status() {
            status if status.is_success() => {
                let body = response.json::<payload::SearchRepos>().await?;
                Ok(SearchPage::from(body))
            }
            StatusCode::FORBIDDEN => {
                let reset_at = rate_limit::reset_at(response.headers());
                warn!("Search API rate limit exceeded on page {}", page);
                Err(Error::RateLimited { reset_at })
            }
            status => {
                warn!("Search API request failed on page {} with status: {}", page, status);
                Err(Error::HttpFailure(status.as_u16()))
            }
        }
    }
}
