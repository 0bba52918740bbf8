//! Inspector error definitions.

use thiserror::Error;

/// Errors that can occur during an inspector operation.
///
/// All of these are fatal to the invocation: the binary runs one operation
/// per process, so there is nothing to retry against.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The target URL did not parse; caught before any network call.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// Connection, DNS, or transfer failure against the target.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        source: reqwest::Error,
    },

    /// The response body is not a YAML request snapshot. Carries the raw
    /// body so the caller sees what actually came back.
    #[error("failed to parse response from {url}: {source}\nbody:\n{body}")]
    Parse {
        url: String,
        source: serde_yaml::Error,
        body: String,
    },

    /// Re-serializing the header map as JSON failed.
    #[error("failed to encode headers as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}
