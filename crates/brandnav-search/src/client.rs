//! HTTP client for the Brave-style web-search REST API.
//!
//! Wraps `reqwest` with API-key management and typed response
//! deserialization. Results missing a URL are dropped rather than surfaced
//! as empty hits.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::SearchError;
use crate::types::{SearchHit, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.search.brave.com/res/v1";
const SUBSCRIPTION_HEADER: &str = "x-subscription-token";

/// Client for the web-search API.
///
/// Use [`SearchClient::new`] for production or
/// [`SearchClient::with_base_url`] to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl SearchClient {
    /// Creates a new client pointed at the production search API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::ApiError`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("brandnav/0.1 (brand-name-research)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| SearchError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs one web search and returns up to `count` hits.
    ///
    /// Calls the `web/search` endpoint. Queries that match nothing return an
    /// empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure or non-2xx HTTP status.
    /// - [`SearchError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchHit>, SearchError> {
        let url = self.build_url(query, count)?;

        let response = self
            .client
            .get(url.clone())
            .header(SUBSCRIPTION_HEADER, &self.api_key)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let envelope: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("web/search(query={query})"),
                source: e,
            })?;

        let items = envelope.web.map(|w| w.results).unwrap_or_default();
        let hits = items
            .into_iter()
            .filter_map(|item| {
                let url = item.url?;
                Some(SearchHit {
                    url,
                    title: item.title.unwrap_or_default(),
                    snippet: item.description.unwrap_or_default(),
                })
            })
            .take(count)
            .collect();

        Ok(hits)
    }

    /// Builds the full request URL with percent-encoded query parameters.
    fn build_url(&self, query: &str, count: usize) -> Result<Url, SearchError> {
        let mut url = self
            .base_url
            .join("web/search")
            .map_err(|e| SearchError::ApiError(format!("invalid endpoint path: {e}")))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("count", &count.to_string());
        Ok(url)
    }
}
