//! HTTP Echo Server and Request Inspector
//!
//! Two components sharing one data model:
//! - An echo server that reports each inbound request's metadata (host, URL,
//!   remote address, referer, headers) back to the caller as YAML or JSON.
//! - An inspector client that queries such a server and derives views from
//!   the response: client IP, header dump, proxy-chain visualization.

pub mod cli;
pub mod config;
pub mod http;
pub mod inspect;

pub use config::ServerConfig;
pub use http::snapshot::RequestSnapshot;
pub use http::EchoServer;
pub use inspect::Inspector;
