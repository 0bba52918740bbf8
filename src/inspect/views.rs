//! Derived views over a parsed request snapshot.
//!
//! # Responsibilities
//! - Client IP derivation with reverse-proxy header precedence
//! - Header dump as indented JSON
//! - Proxy-chain visualization of X-Forwarded-For
//!
//! # Design Decisions
//! - X-Forwarded-For lookup is case-insensitive: this server emits lowercase
//!   header names, other echo implementations emit canonical case
//! - The forwarded-for chain is unauthenticated and forgeable; these views
//!   are diagnostic only, never a security signal

use crate::http::snapshot::RequestSnapshot;

/// Conventional header listing client→proxy hop IPs, leftmost = original
/// client.
pub const X_FORWARDED_FOR: &str = "X-Forwarded-For";

/// First X-Forwarded-For value on the snapshot, if the header is present
/// with at least one value.
pub fn forwarded_for(snapshot: &RequestSnapshot) -> Option<&str> {
    snapshot
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(X_FORWARDED_FOR))
        .and_then(|(_, values)| values.first())
        .map(String::as_str)
}

/// Best-effort client IP.
///
/// X-Forwarded-For takes precedence: its first comma-separated token is the
/// original client when the request came through a proxy. Without it, the
/// transport-level peer address is all there is (port suffix included).
pub fn client_ip(snapshot: &RequestSnapshot) -> String {
    match forwarded_for(snapshot) {
        Some(value) => value
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_owned(),
        None => snapshot.ip.clone(),
    }
}

/// The snapshot's header map as indented JSON.
pub fn header_dump(snapshot: &RequestSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&snapshot.headers)
}

/// Human-readable reformatting of the declared proxy chain.
///
/// With X-Forwarded-For the hops read origin → intermediates → direct peer →
/// destination host. Without it, only the direct peer is known.
pub fn proxy_chain(snapshot: &RequestSnapshot) -> String {
    match forwarded_for(snapshot) {
        Some(value) => {
            let hops: Vec<&str> = value.split(',').map(str::trim).collect();
            let origin = hops[0];
            let mut chain: Vec<&str> = hops[1..].to_vec();
            chain.push(snapshot.ip.as_str());
            format!(
                "{} -> [ {} ] -> {}",
                origin,
                chain.join(" -> "),
                snapshot.host
            )
        }
        None => format!("{} -> [ no proxy ]-> {}", snapshot.ip, snapshot.host),
    }
}
