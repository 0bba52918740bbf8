//! echoprobe binary entry point.
//!
//! Dispatches to the echo server or one of the inspector client operations
//! based on the parsed subcommand. All fatal errors propagate out of `main`
//! so the process exits non-zero with the error printed to stderr.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use echoprobe::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber. Diagnostics go to stderr so client
    // subcommand output on stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "echoprobe=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();
    cli::run(args).await
}
