use thiserror::Error;

/// Errors returned by the RDAP client.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The client could not be constructed or the domain produced an
    /// invalid lookup URL.
    #[error("RDAP error: {0}")]
    Invalid(String),

    /// The registry answered with a status the client does not understand.
    #[error("RDAP returned unexpected status {0}")]
    Status(reqwest::StatusCode),
}
