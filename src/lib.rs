use github_client::{GithubClient, GithubClientBuilder};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use trends::{CachedFetcher, Dashboard, Error, Fetcher, Trends};

pub mod args;
pub mod render;
pub mod watch;

pub use args::Args;

pub type TrendsDashboard = Dashboard<GithubClient>;

pub fn dashboard(args: &Args) -> trends::Result<TrendsDashboard> {
    let token = SecretString::new(args.api_token.expose_secret().to_string());
    let client = GithubClientBuilder::default()
        .try_with_github_url(&args.api_url)?
        .try_with_token(token)?
        .build()?;

    let fetcher = Fetcher::new(client, args.fetch_config());
    Ok(Dashboard::new(CachedFetcher::new(fetcher)))
}

/// Loads trending languages once for the filter given in `args`.
pub async fn load_trends(args: &Args) -> Result<Trends, Arc<Error>> {
    let dashboard = dashboard(args).map_err(Arc::new)?;
    dashboard.load(&args.filter()).await
}
