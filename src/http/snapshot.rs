//! Request snapshot capture and serialization.
//!
//! # Responsibilities
//! - Capture one request's metadata into an immutable record
//! - Select the output serialization from the `format` query parameter
//! - Encode the record as YAML or JSON
//!
//! # Design Decisions
//! - One snapshot per request; built, serialized, discarded
//! - Headers are carried unfiltered, repeated values in received order
//! - hyper normalizes header names to lowercase on receipt, so snapshots
//!   from this server carry lowercase names (the inspector accounts for it)

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::http::{header, request::Parts};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Header name → values, every header on the request, unfiltered.
pub type HeaderDump = BTreeMap<String, Vec<String>>;

/// Immutable record of one request's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSnapshot {
    /// Value of the inbound Host header (URI authority for HTTP/2).
    pub host: String,

    /// Request target as received: path plus query.
    pub url: String,

    /// Transport-level peer address, `IP:port`. Not necessarily the
    /// originating client when behind a proxy.
    pub ip: String,

    /// Referer header value, empty when absent.
    pub referer: String,

    /// All request headers; a repeated header keeps its value order.
    pub headers: HeaderDump,
}

impl RequestSnapshot {
    /// Capture a snapshot from request parts and the connecting peer.
    pub fn from_parts(parts: &Parts, peer: SocketAddr) -> Self {
        let host = header_str(parts, header::HOST)
            .map(str::to_owned)
            .or_else(|| parts.uri.authority().map(|a| a.as_str().to_owned()))
            .unwrap_or_default();

        let url = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_owned())
            .unwrap_or_else(|| parts.uri.path().to_owned());

        let referer = header_str(parts, header::REFERER)
            .unwrap_or_default()
            .to_owned();

        let mut headers = HeaderDump::new();
        for name in parts.headers.keys() {
            let values = parts
                .headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect();
            headers.insert(name.as_str().to_owned(), values);
        }

        Self {
            host,
            url,
            ip: peer.to_string(),
            referer,
            headers,
        }
    }
}

fn header_str(parts: &Parts, name: header::HeaderName) -> Option<&str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

/// Rejected `format` query parameter value.
///
/// The Display output is the exact 400 response body.
#[derive(Debug, Error)]
#[error("error: unsupported format '{0}'")]
pub struct UnsupportedFormat(pub String);

/// Snapshot encoding failure.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml encoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialization format selected by the `format` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Yaml,
    Json,
}

impl SnapshotFormat {
    /// Parse a `format` query parameter value. Absent or empty means YAML.
    pub fn parse(value: Option<&str>) -> Result<Self, UnsupportedFormat> {
        match value {
            None | Some("") | Some("yaml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            Some(other) => Err(UnsupportedFormat(other.to_owned())),
        }
    }

    /// Media type for the response Content-Type header.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Yaml => "application/x-yaml",
            Self::Json => "application/json",
        }
    }

    /// Encode a snapshot in this format. JSON output is indented.
    pub fn encode(self, snapshot: &RequestSnapshot) -> Result<String, EncodeError> {
        match self {
            Self::Yaml => Ok(serde_yaml::to_string(snapshot)?),
            Self::Json => Ok(serde_json::to_string_pretty(snapshot)?),
        }
    }
}
