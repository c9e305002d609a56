//! REST collaborators
//!
//! Thin async wrappers over the SRM backend. Errors are modelled with
//! `ApiError` internally and never escape the public wrappers.

use thiserror::Error;

mod jobs;
mod types;

pub use jobs::JobsClient;
pub use types::{Job, JobDraft, MutationResult};

/// Errors that can occur talking to the backend
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Transport failure (connection refused, timeout, TLS)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
