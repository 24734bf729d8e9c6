use thiserror::Error;

/// Errors returned by the LLM client.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a structured error body, or the client could not be
    /// constructed.
    #[error("LLM API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered without any completion choices.
    #[error("LLM returned no completion choices")]
    EmptyResponse,
}
