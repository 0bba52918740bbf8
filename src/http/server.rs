//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create Axum Router with the echo handler on every path and method
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener with graceful shutdown
//! - Capture each request into a snapshot and serialize it back

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use url::form_urlencoded;

use crate::config::ServerConfig;
use crate::http::snapshot::{RequestSnapshot, SnapshotFormat};

/// HTTP echo server.
///
/// The router is built once at startup; each request's capture-serialize-write
/// sequence is self-contained, so handlers share no mutable state.
pub struct EchoServer {
    router: Router,
    config: ServerConfig,
}

impl EchoServer {
    /// Create a new echo server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig) -> Router {
        Router::new()
            .route("/{*path}", any(echo_handler))
            .route("/", any(echo_handler))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "Echo server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Echo server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Echo handler: capture the request, serialize it back in the requested
/// format. Any method, any path.
async fn echo_handler(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request<Body>,
) -> Response {
    let (parts, _body) = request.into_parts();

    // First `format` occurrence wins when the parameter repeats.
    let format_value = parts.uri.query().and_then(|query| {
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "format")
            .map(|(_, value)| value.into_owned())
    });

    let format = match SnapshotFormat::parse(format_value.as_deref()) {
        Ok(format) => format,
        Err(unsupported) => {
            tracing::warn!(
                peer = %peer,
                error = %unsupported,
                "Rejected request with unsupported format"
            );
            return (StatusCode::BAD_REQUEST, unsupported.to_string()).into_response();
        }
    };

    let snapshot = RequestSnapshot::from_parts(&parts, peer);

    tracing::debug!(
        peer = %peer,
        method = %parts.method,
        url = %snapshot.url,
        format = ?format,
        "Echoing request snapshot"
    );

    match format.encode(&snapshot) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, format.content_type())],
            body,
        )
            .into_response(),
        Err(e) => {
            // Scoped to this request; the server keeps serving.
            tracing::error!(peer = %peer, error = %e, "Failed to encode snapshot");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error creating response").into_response()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
