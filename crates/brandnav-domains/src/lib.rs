//! RDAP-based domain registration-status client.

mod client;
mod error;

pub use client::{DomainClient, RegistrationStatus};
pub use error::DomainError;
