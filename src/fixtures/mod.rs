//! Local HTTP server that plays the records backend.
//!
//! Serves `GET /records` and `GET /records/{id}` from [`FixtureData`] with
//! configurable latency and failure injection, so the UI and the tests
//! observe real network timing.

mod data;
mod error;
mod routes;

pub use data::FixtureData;
pub use error::{FixtureError, ServerError};
pub use routes::{build_router, FixtureState, HealthStatus, RequestLog};

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::FixtureConfig;
use crate::shutdown::{ShutdownHandle, ShutdownManager};

const PORT_FALLBACK_RANGE: u16 = 100;

pub struct FixtureServer {
    pub addr: SocketAddr,
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    bind_addr: String,
    state: FixtureState,
    shutdown: Arc<ShutdownManager>,
}

impl FixtureServer {
    pub fn new(config: &FixtureConfig) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            bind_addr: config.bind_addr.clone(),
            state: FixtureState::new(config),
            shutdown: Arc::new(ShutdownManager::new()),
        }
    }

    /// Bind the configured address, falling back to the next ports if busy.
    /// Returns the bound address and the base URL clients should use.
    pub async fn try_bind(&mut self) -> Result<(SocketAddr, String), ServerError> {
        let bind_addr: SocketAddr =
            self.bind_addr
                .parse()
                .map_err(|source| ServerError::InvalidAddr {
                    addr: self.bind_addr.clone(),
                    source,
                })?;

        let start_port = bind_addr.port();
        let host = bind_addr.ip();

        // Port 0 lets the OS choose, no fallback needed.
        let end_port = if start_port == 0 {
            0
        } else {
            start_port.saturating_add(PORT_FALLBACK_RANGE)
        };

        for port in start_port..=end_port {
            let try_addr = SocketAddr::new(host, port);
            match TcpListener::bind(try_addr).await {
                Ok(listener) => {
                    let actual_addr = listener.local_addr()?;
                    let base_url = base_url_for(actual_addr);

                    self.addr = actual_addr;
                    self.listener = Some(listener);
                    tracing::info!(
                        "Fixture server bound to {} (base_url: {})",
                        actual_addr,
                        base_url
                    );
                    return Ok((actual_addr, base_url));
                }
                Err(e) => {
                    tracing::debug!("Port {} busy: {}", port, e);
                    continue;
                }
            }
        }

        Err(ServerError::NoFreePort {
            start: start_port,
            end: end_port,
        })
    }

    pub fn request_log(&self) -> RequestLog {
        self.state.log()
    }

    pub fn handle(&self) -> FixtureHandle {
        FixtureHandle {
            shutdown: self.shutdown.handle(),
        }
    }

    /// Run the server until shutdown.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;

        tracing::info!("Starting fixture server on {}", self.addr);

        let app = build_router(self.state);
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                if let Err(e) = shutdown.wait_for_shutdown().await {
                    tracing::warn!("Signal listener failed: {}", e);
                }
            })
            .into_future()
            .await?;

        tracing::info!("Fixture server stopped");
        Ok(())
    }

    /// Bind and run on a background task.
    pub async fn spawn(config: &FixtureConfig) -> Result<RunningFixtures, ServerError> {
        let mut server = FixtureServer::new(config);
        let (addr, base_url) = server.try_bind().await?;
        let handle = server.handle();
        let log = server.request_log();
        let task = tokio::spawn(server.run());

        Ok(RunningFixtures {
            addr,
            base_url,
            handle,
            log,
            task,
        })
    }
}

fn base_url_for(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://127.0.0.1:{}", addr.port())
    } else {
        format!("http://{}", addr)
    }
}

#[derive(Clone)]
pub struct FixtureHandle {
    shutdown: ShutdownHandle,
}

impl FixtureHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal();
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.is_shutting_down()
    }
}

/// A fixture server running on a background task.
pub struct RunningFixtures {
    pub addr: SocketAddr,
    pub base_url: String,
    pub handle: FixtureHandle,
    pub log: RequestLog,
    task: JoinHandle<Result<(), ServerError>>,
}

impl RunningFixtures {
    /// Signal shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.handle.shutdown();
        match self.task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("Fixture server exited with error: {}", e),
            Err(e) => tracing::warn!("Fixture server task failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_maps_unspecified_host_to_loopback() {
        let addr: SocketAddr = "0.0.0.0:4100".parse().unwrap();
        assert_eq!(base_url_for(addr), "http://127.0.0.1:4100");

        let addr: SocketAddr = "127.0.0.1:4200".parse().unwrap();
        assert_eq!(base_url_for(addr), "http://127.0.0.1:4200");
    }

    #[tokio::test]
    async fn run_without_bind_fails() {
        let server = FixtureServer::new(&FixtureConfig::default());
        assert!(matches!(server.run().await, Err(ServerError::NotBound)));
    }

    #[tokio::test]
    async fn invalid_bind_addr_is_rejected() {
        let config = FixtureConfig {
            bind_addr: "not-an-addr".to_string(),
            ..FixtureConfig::default()
        };
        let mut server = FixtureServer::new(&config);
        assert!(matches!(
            server.try_bind().await,
            Err(ServerError::InvalidAddr { .. })
        ));
    }

    #[tokio::test]
    async fn spawn_and_stop() {
        let running = FixtureServer::spawn(&FixtureConfig::default()).await.unwrap();
        assert!(running.base_url.starts_with("http://127.0.0.1:"));
        assert_ne!(running.addr.port(), 0);

        let handle = running.handle.clone();
        running.stop().await;
        assert!(handle.is_shutting_down());
    }
}
