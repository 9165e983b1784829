use clap::Parser;
use github_client::{GITHUB_URL, PLACEHOLDER_TOKEN};
use secrecy::SecretString;
use std::{
    fmt::{Debug, Display},
    str::FromStr,
    time::Duration,
};
use trends::fetcher::{DEFAULT_WINDOW_DAYS, MAX_PAGE_SIZE};
use trends::{FetchConfig, Filter};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Only repositories of users from this location
    #[clap(short, long, env = "TRENDS_LOCATION")]
    pub location: Option<String>,

    /// Only repositories with this topic
    #[clap(short, long, env = "TRENDS_TOPIC")]
    pub topic: Option<String>,

    /// API personal access token
    #[clap(long, env = "GITHUB_TOKEN", default_value = PLACEHOLDER_TOKEN, hide_env_values = true, hide_default_value = true)]
    pub api_token: SecretString,

    /// Repository API URL
    #[clap(long, env, default_value = GITHUB_URL)]
    pub api_url: String,

    /// Maximal number of search result pages
    #[clap(long, env, default_value_t = 3, parse(try_from_str=max_pages_in_range))]
    pub max_pages: u32,

    /// Pause between search result pages in milliseconds
    #[clap(long, env, default_value_t = 500)]
    pub page_delay_ms: u64,

    /// Quiet time after the last filter change before searching, in milliseconds
    #[clap(long, env, default_value_t = 500)]
    pub debounce_ms: u64,

    /// Read filter changes (`location=..`, `topic=..`) from stdin and redraw the chart
    #[clap(short, long)]
    pub watch: bool,
}

impl Args {
    pub fn filter(&self) -> Filter {
        Filter::new(self.location.clone(), self.topic.clone())
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::new(
            self.max_pages,
            MAX_PAGE_SIZE,
            Duration::from_millis(self.page_delay_ms),
            DEFAULT_WINDOW_DAYS,
        )
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn max_pages_in_range(value: &str) -> clap::Result<u32, String> {
    // Search API never returns more than 1000 results
    number_in_range(value, 1, 10, "max_pages".to_string())
}

fn number_in_range<T>(value: &str, min: T, max: T, name: String) -> clap::Result<T, String>
where
    T: FromStr + PartialOrd + Display,
    <T as FromStr>::Err: Display,
{
    value.parse::<T>().map_err(|err| format!("{}", err)).and_then(|value| {
        if value < min || value > max {
            return Err(format!("{} is not in range {} .. {}.", name, min, max));
        }
        Ok(value)
    })
}
