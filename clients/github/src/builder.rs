use crate::GithubClient;
use anyhow::Context;
use log::debug;
use reqwest::header;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::ClientBuilder;
use secrecy::ExposeSecret;
use trends::Result;
use url::Url;

pub const GITHUB_URL: &str = "https://api.github.com";
/// Stand-in used when no token is configured. Never sent to the API.
pub const PLACEHOLDER_TOKEN: &str = "YOUR_FALLBACK_TOKEN";

pub struct GithubClientBuilder {
    client_builder: ClientBuilder,
    github_url: String,
    headers: HeaderMap,
}

impl Default for GithubClientBuilder {
    fn default() -> Self {
        let mut headers = HeaderMap::default();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("trends"));
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        Self {
            client_builder: ClientBuilder::default(),
            github_url: GITHUB_URL.to_string(),
            headers,
        }
    }
}

impl GithubClientBuilder {
    /// Authorizes requests with `token`, unless it is blank or the placeholder.
    pub fn try_with_token(self, token: secrecy::SecretString) -> Result<GithubClientBuilder> {
        let token = token.expose_secret().trim();
        if !is_configured(token) {
            debug!("No API token configured, requests are anonymous");
            return Ok(self);
        }
        let mut value = HeaderValue::from_str(&format!("token {}", token)).context("Invalid API token")?;
        value.set_sensitive(true);
        Ok(self.with_header(header::AUTHORIZATION, value))
    }

    pub fn try_with_github_url<STR: AsRef<str>>(mut self, url: STR) -> Result<GithubClientBuilder> {
        let url = Url::parse(url.as_ref()).with_context(|| format!("Invalid API URL: {}", url.as_ref()))?;
        self.github_url = url.as_str().trim_end_matches('/').to_string();
        Ok(self)
    }

    fn with_header(mut self, key: HeaderName, val: HeaderValue) -> GithubClientBuilder {
        self.headers.insert(key, val);
        self
    }

    pub fn build(self) -> Result<GithubClient> {
        let client = self
            .client_builder
            .default_headers(self.headers)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(GithubClient {
            client,
            github_url: self.github_url,
        })
    }
}

pub fn is_configured(token: &str) -> bool {
    !token.trim().is_empty() && token != PLACEHOLDER_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use trends::Error;

    #[test]
    fn placeholder_token_is_ignored() -> anyhow::Result<()> {
        let builder = GithubClientBuilder::default().try_with_token(SecretString::new(PLACEHOLDER_TOKEN.to_string()))?;
        assert!(builder.headers.get(header::AUTHORIZATION).is_none());

        let builder = builder.try_with_token(SecretString::new(String::new()))?;
        assert!(builder.headers.get(header::AUTHORIZATION).is_none());
        Ok(())
    }

    #[test]
    fn token_is_attached() -> anyhow::Result<()> {
        let builder = GithubClientBuilder::default().try_with_token(SecretString::new("ghp_secret".to_string()))?;
        let value = builder.headers.get(header::AUTHORIZATION).map(|value| value.to_str());
        assert_eq!(value.transpose()?, Some("token ghp_secret"));
        Ok(())
    }

    #[test]
    fn url_is_normalized() -> anyhow::Result<()> {
        let builder = GithubClientBuilder::default().try_with_github_url("http://localhost:8080/")?;
        assert_eq!(builder.github_url, "http://localhost:8080");
        assert!(GithubClientBuilder::default().try_with_github_url("not a url").is_err());
        Ok(())
    }

    #[test]
    fn default_headers() {
        let builder = GithubClientBuilder::default();
        assert_eq!(builder.github_url, GITHUB_URL);
        assert_eq!(
            builder.headers.get(header::ACCEPT),
            Some(&HeaderValue::from_static("application/vnd.github.v3+json"))
        );
    }

    #[test]
    fn http_client_failure_is_not_transport() {
        let builder = GithubClientBuilder {
            client_builder: ClientBuilder::default().use_preconfigured_tls(()),
            ..GithubClientBuilder::default()
        };
        match builder.build() {
            Err(Error::Other(err)) => assert_eq!(err.to_string(), "Failed to build HTTP client"),
            Err(err) => panic!("Unexpected error: {}", err),
            Ok(_) => panic!("Unknown TLS backend accepted"),
        }
    }
}
