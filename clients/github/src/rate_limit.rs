use chrono::{DateTime, TimeZone, Utc};
use derive_more::Constructor;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use std::str::FromStr;

/// Quota snapshot reported with every API response.
#[derive(Constructor, Debug, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    pub reset: i64,
}

impl RateLimit {
    /// Reads `x-ratelimit-*` headers. `None` if any of them is missing or malformed.
    pub fn from_headers(headers: &HeaderMap<HeaderValue>) -> Option<RateLimit> {
        Some(RateLimit {
            limit: read_header(headers, "x-ratelimit-limit")?,
            remaining: read_header(headers, "x-ratelimit-remaining")?,
            reset: read_header(headers, "x-ratelimit-reset")?,
        })
    }
}

/// Reset time of the exhausted quota, if the response says so.
pub fn reset_at(headers: &HeaderMap<HeaderValue>) -> Option<DateTime<Utc>> {
    read_header::<i64>(headers, "x-ratelimit-reset").and_then(|reset| Utc.timestamp_opt(reset, 0).single())
}

fn read_header<T: FromStr>(headers: &HeaderMap<HeaderValue>, header: &str) -> Option<T> {
    headers.get(header)?.to_str().ok()?.parse::<T>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(values: &[(&'static str, &str)]) -> anyhow::Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in values {
            headers.insert(*name, HeaderValue::from_str(value)?);
        }
        Ok(headers)
    }

    #[test]
    fn reads_all_headers() -> anyhow::Result<()> {
        let headers = headers(&[
            ("x-ratelimit-limit", "30"),
            ("x-ratelimit-remaining", "0"),
            ("x-ratelimit-reset", "1714557600"),
        ])?;
        let limit = RateLimit::from_headers(&headers);
        assert_eq!(limit, Some(RateLimit::new(30, 0, 1714557600)));
        assert_eq!(
            reset_at(&headers).map(|at| at.to_rfc3339()),
            Some("2024-05-01T10:00:00+00:00".to_string())
        );
        Ok(())
    }

    #[test]
    fn missing_or_malformed_headers() -> anyhow::Result<()> {
        let headers = headers(&[("x-ratelimit-limit", "30"), ("x-ratelimit-reset", "soon")])?;
        assert_eq!(RateLimit::from_headers(&headers), None);
        assert_eq!(reset_at(&headers), None);
        assert_eq!(reset_at(&HeaderMap::new()), None);
        Ok(())
    }
}
