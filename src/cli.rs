//! Command-line interface.
//!
//! # Responsibilities
//! - Define the subcommand surface (`server` plus four client operations)
//! - Enforce required arguments before any network activity
//! - Dispatch to the echo server or the inspector client
//!
//! # Design Decisions
//! - One binary for both roles, mirroring how the tool is deployed
//! - `--url` is required by clap, so a missing flag is a usage error that
//!   exits non-zero without issuing a single request
//! - Client output goes to stdout verbatim; diagnostics go through tracing

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::http::EchoServer;
use crate::inspect::Inspector;

#[derive(Debug, Parser)]
#[command(name = "echoprobe")]
#[command(about = "HTTP echo server and request inspector", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the echo server
    Server,
    /// Make a test request to a URL and print the raw response
    Test {
        /// URL to make a test request to
        #[arg(short, long)]
        url: String,
    },
    /// Call an echo server and print the client IP address
    GetIp {
        /// URL of the echo server
        #[arg(short, long)]
        url: String,
    },
    /// Call an echo server and print the request headers as JSON
    GetHeaders {
        /// URL of the echo server
        #[arg(short, long)]
        url: String,
    },
    /// Display the proxy chain of a request to an echo server
    ProxyChain {
        /// URL of the echo server
        #[arg(short, long)]
        url: String,
    },
}

/// Run the parsed command to completion.
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Server => run_server().await?,
        Commands::Test { url } => {
            let inspector = Inspector::new();
            println!("{}", inspector.test_request(&url).await?);
        }
        Commands::GetIp { url } => {
            let inspector = Inspector::new();
            println!("{}", inspector.client_ip(&url).await?);
        }
        Commands::GetHeaders { url } => {
            let inspector = Inspector::new();
            println!("{}", inspector.header_dump(&url).await?);
        }
        Commands::ProxyChain { url } => {
            let inspector = Inspector::new();
            println!("{}", inspector.proxy_chain(&url).await?);
        }
    }
    Ok(())
}

/// Load configuration, bind the listener, and serve until shutdown.
async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    tracing::info!(port = config.port, "Configuration loaded");

    // Bind failure is fatal to the process.
    let listener = TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = EchoServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
