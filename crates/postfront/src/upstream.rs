use crate::prelude::*;
use log::{info, warn};
use postfront_core::posts::Post;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, clap::Args)]
pub struct UpstreamOptions {
    /// Base URL of the upstream posts service
    #[arg(long, env = "POSTS_SERVICE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Upstream request timeout, in seconds
    #[arg(
        long = "upstream-timeout",
        env = "POSTS_SERVICE_TIMEOUT",
        default_value = "10"
    )]
    pub timeout_secs: u64,
}

/// Connection settings for the upstream posts service
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl From<UpstreamOptions> for UpstreamConfig {
    fn from(options: UpstreamOptions) -> Self {
        Self {
            base_url: options.base_url,
            timeout: Duration::from_secs(options.timeout_secs),
        }
    }
}

/// Reads the post collection from `{base_url}/posts`
///
/// Every call goes over the network; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct UpstreamPostsClient {
    http: reqwest::Client,
    posts_url: String,
}

impl UpstreamPostsClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        info!("Preparing upstream client with base URL: {}", config.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(Self {
            http,
            posts_url: posts_url(&config.base_url),
        })
    }

    /// Fetch the full post collection in upstream order
    pub async fn fetch_all(&self) -> Result<Vec<Post>, Error> {
        info!("Fetching all posts from {}", self.posts_url);

        let response = self
            .http
            .get(&self.posts_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                warn!("Upstream request to {} failed: {}", self.posts_url, e);
                Error::UpstreamUnavailable(e.to_string())
            })?;

        let posts = response.json::<Vec<Post>>().await.map_err(|e| {
            if e.is_decode() {
                Error::UpstreamPayload(e.to_string())
            } else {
                warn!("Reading upstream response from {} failed: {}", self.posts_url, e);
                Error::UpstreamUnavailable(e.to_string())
            }
        })?;

        info!("Fetched {} posts", posts.len());

        Ok(posts)
    }
}

fn posts_url(base_url: &str) -> String {
    format!("{}/posts", base_url.trim_end_matches('/'))
}
