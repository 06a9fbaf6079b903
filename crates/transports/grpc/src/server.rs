//! Tonic server setup and configuration for the signaling service
//!
//! Builds the server with keepalive settings tuned for long-parked calls
//! (a StartExchange caller may legitimately sit for minutes waiting for
//! its counterpart) and supports graceful shutdown via an external flag.

use crate::config::ServiceConfig;
use crate::generated::signaling_server::SignalingServer;
use crate::service::SignalingServiceImpl;
use rendezvous_core::HandshakeSlot;
use std::sync::Arc;
use tonic::transport::Server;
use tracing::info;

/// gRPC signaling server
pub struct GrpcServer {
    config: ServiceConfig,
    slot: Arc<HandshakeSlot>,
}

impl GrpcServer {
    /// Create a new server; the slot it owns lives for the whole process.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            slot: Arc::new(HandshakeSlot::new()),
        }
    }

    /// Shared handle to the slot, for tests and observability.
    pub fn slot(&self) -> Arc<HandshakeSlot> {
        Arc::clone(&self.slot)
    }

    fn build_router(&self) -> tonic::transport::server::Router {
        let service = SignalingServiceImpl::new(Arc::clone(&self.slot), &self.config);

        // No server-wide request timeout: StartExchange parks on purpose,
        // bounded by the configured exchange deadline instead.
        Server::builder()
            // TCP keepalive to detect dead peers
            .tcp_keepalive(Some(std::time::Duration::from_secs(60)))
            .tcp_nodelay(true)
            // HTTP/2 keepalive ping so long-parked streams stay alive
            .http2_keepalive_interval(Some(std::time::Duration::from_secs(30)))
            .http2_keepalive_timeout(Some(std::time::Duration::from_secs(10)))
            // Tracing
            .trace_fn(|_| tracing::info_span!("grpc_request"))
            .add_service(SignalingServer::new(service))
    }

    /// Build and run the server until the task is cancelled.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr: std::net::SocketAddr = self.config.bind_address.parse()?;

        info!(
            %addr,
            exchange_timeout_sec = self.config.exchange_timeout.as_secs(),
            offer_wait_timeout_sec = self.config.offer_wait_timeout.as_secs(),
            "Starting signaling server"
        );

        let router = self.build_router();
        info!("Signaling server listening on {}", addr);
        router.serve(addr).await?;

        Ok(())
    }

    /// Build and run the server on an already-bound listener.
    ///
    /// Used by tests to serve on an ephemeral port.
    pub async fn serve_with_incoming(
        self,
        listener: tokio::net::TcpListener,
    ) -> anyhow::Result<()> {
        let router = self.build_router();
        router
            .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
            .await?;
        Ok(())
    }

    /// Build and run the server with external shutdown flag (for robust Ctrl+C handling)
    pub async fn serve_with_shutdown_flag(
        self,
        shutdown_flag: Arc<std::sync::atomic::AtomicBool>,
    ) -> anyhow::Result<()> {
        let addr: std::net::SocketAddr = self.config.bind_address.parse()?;

        info!(
            %addr,
            exchange_timeout_sec = self.config.exchange_timeout.as_secs(),
            "Starting signaling server with shutdown flag"
        );

        let router = self.build_router();

        // Poll the flag frequently so Ctrl+C stays responsive even while
        // calls are parked in the slot.
        let shutdown_future = async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                if shutdown_flag.load(std::sync::atomic::Ordering::SeqCst) {
                    info!("Shutdown flag detected, closing signaling server");
                    break;
                }
            }
        };

        info!("Signaling server listening on {}", addr);
        router.serve_with_shutdown(addr, shutdown_future).await?;

        info!("Signaling server shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = GrpcServer::new(ServiceConfig::default());
        assert!(server.slot().current_offer().is_none());
    }

    #[test]
    fn test_slot_handles_are_shared() {
        let server = GrpcServer::new(ServiceConfig::default());
        let a = server.slot();
        let b = server.slot();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
