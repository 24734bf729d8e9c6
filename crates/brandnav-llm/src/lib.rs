//! Chat-completion client for an OpenAI-compatible LLM endpoint.

mod client;
mod error;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
