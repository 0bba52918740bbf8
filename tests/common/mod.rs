//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use echoprobe::{EchoServer, ServerConfig};

/// Start an echo server on an ephemeral loopback port.
#[allow(dead_code)]
pub async fn start_echo_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = EchoServer::new(ServerConfig::default());

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Hit counter for a mock server; proves whether any request was made.
pub type HitCounter = Arc<AtomicU32>;

#[allow(dead_code)]
pub fn hits(counter: &HitCounter) -> u32 {
    counter.load(Ordering::SeqCst)
}

/// Start a mock server that answers every connection with a fixed status
/// line and body, counting accepted connections.
#[allow(dead_code)]
pub async fn start_fixed_body_server(
    status: &'static str,
    body: &'static str,
) -> (SocketAddr, HitCounter) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let counter: HitCounter = Arc::new(AtomicU32::new(0));
    let accepted = counter.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    accepted.fetch_add(1, Ordering::SeqCst);
                    tokio::spawn(async move {
                        // Drain the request head before replying.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, counter)
}
