//! HTTP client for RDAP registration-status lookups.
//!
//! RDAP aggregators answer `GET /domain/{name}` with 200 for registered
//! domains and 404 for unregistered ones. Anything else (throttling,
//! registry maintenance pages, TLDs without RDAP coverage) is reported as
//! inconclusive rather than guessed at.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::DomainError;

const DEFAULT_BASE_URL: &str = "https://rdap.org";

/// Coarse registration status of one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    /// The registry answered with a registration record.
    Registered,
    /// The registry answered 404: no record for this domain.
    Unregistered,
    /// The registry answered, but not in a way that settles the question.
    Inconclusive,
}

/// Client for RDAP registration-status queries.
///
/// Use [`DomainClient::new`] for production or
/// [`DomainClient::with_base_url`] to point at a mock server in tests.
pub struct DomainClient {
    client: Client,
    base_url: Url,
}

impl DomainClient {
    /// Creates a new client pointed at the public RDAP aggregator.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, DomainError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DomainError::Invalid`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("brandnav/0.1 (domain-availability)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| DomainError::Invalid(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Queries the registration status of one fully-qualified domain name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Http`] on network failure, or
    /// [`DomainError::Invalid`] if `domain` cannot form a lookup URL.
    pub async fn check(&self, domain: &str) -> Result<RegistrationStatus, DomainError> {
        let url = self
            .base_url
            .join(&format!("domain/{domain}"))
            .map_err(|e| DomainError::Invalid(format!("invalid domain '{domain}': {e}")))?;

        let response = self
            .client
            .get(url)
            .header("accept", "application/rdap+json")
            .send()
            .await?;

        match response.status() {
            s if s.is_success() => Ok(RegistrationStatus::Registered),
            StatusCode::NOT_FOUND => Ok(RegistrationStatus::Unregistered),
            StatusCode::TOO_MANY_REQUESTS | StatusCode::FORBIDDEN => {
                tracing::debug!(domain, "inconclusive RDAP answer (throttled or refused)");
                Ok(RegistrationStatus::Inconclusive)
            }
            other => Err(DomainError::Status(other)),
        }
    }
}
