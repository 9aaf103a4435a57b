//! Error types for talking to the agents API
//!
//! Every failure the HTTP layer can produce is represented here. The UI never
//! surfaces these as dialogs: fetch failures become `AgentsState::Error`, stop
//! failures go to the diagnostic channel.

use thiserror::Error;

/// Errors returned by [`crate::api::AgentsClient`]
#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured base URL could not be used to build request URLs
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("API returned error status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, for diagnostics
        body: String,
    },

    /// The body was not JSON, or not the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}
