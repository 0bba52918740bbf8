//! HTTP echo subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route, middleware)
//!     → snapshot.rs (capture request metadata into RequestSnapshot)
//!     → serialize per `format` query parameter (yaml | json)
//!     → Send to client
//! ```

pub mod server;
pub mod snapshot;

pub use server::EchoServer;
pub use snapshot::{RequestSnapshot, SnapshotFormat};
