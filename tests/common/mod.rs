//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use dice_api::config::DiceConfig;
use dice_api::http::DiceServer;
use dice_api::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A server running in the background on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the dice server with the given configuration.
pub async fn start_server(config: DiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = DiceServer::new(&config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Let the accept loop start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer { addr, shutdown }
}

/// Client without pooling so each test sees fresh connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
