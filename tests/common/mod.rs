//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

use klant_gateway::{AppConfig, HttpServer, Shutdown};

/// Start a gateway on an ephemeral port, returning its address and the
/// shutdown handle that stops it.
pub async fn spawn_gateway(config: AppConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).expect("failed to build server");
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for the accept loop to come up.
    tokio::time::sleep(Duration::from_millis(100)).await;

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
