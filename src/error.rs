//! Error type shared by every stage of a run.
//!
//! The variants follow the failure classes of the workflow: configuration
//! problems abort before any network activity, generation and publish
//! failures are retried by [`crate::retry::Retry`], and validation failures
//! end the run immediately.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutopostError {
    /// One or more required settings were absent or blank at startup.
    #[error("missing required configuration: {}", missing.join(", "))]
    Config { missing: Vec<&'static str> },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The AI provider answered with a non-success status.
    #[error("AI provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("AI provider returned no completion text")]
    EmptyCompletion,

    #[error("completion is not a valid article JSON object: {0}")]
    Parse(#[from] serde_json::Error),

    /// Generated content is unusable (empty title or content).
    #[error("article validation failed: {0}")]
    Validation(String),

    /// The CMS answered with a non-success status.
    #[error("CMS rejected the draft with {status}: {body}")]
    Publish { status: u16, body: String },

    /// Network, TLS or timeout failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
