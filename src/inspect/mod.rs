//! Inspector client subsystem.
//!
//! # Data Flow
//! ```text
//! target URL
//!     → client.rs (single GET, raw body)
//!     → parse body as a YAML RequestSnapshot
//!     → views.rs (derive client IP / header dump / proxy chain)
//!     → print to stdout
//! ```
//!
//! # Design Decisions
//! - Responses are always parsed as YAML regardless of Content-Type; this is
//!   the fixed contract with the echo server (which defaults to YAML), not a
//!   negotiated one
//! - Derivations are pure functions over a parsed snapshot, testable without
//!   a network
//! - Every failure is fatal to the invocation; the process runs one
//!   operation and exits

pub mod client;
pub mod error;
pub mod views;

pub use client::Inspector;
pub use error::InspectError;
