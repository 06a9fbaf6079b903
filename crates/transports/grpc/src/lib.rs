//! gRPC signaling transport for SDP rendezvous
//!
//! Exposes the [`rendezvous_core::HandshakeSlot`] operations over three
//! RPCs on a single port: `StartExchange` (publish an offer, park, stream
//! the answer back), `WaitForOffer` (park until an offer is live, stream
//! it), and `SubmitAnswer` (deliver the answer, get an ack). One logical
//! exchange is live at a time; the service brokers sequential exchanges
//! for the whole process lifetime.
//!
//! A misbehaving or disconnected peer fails its own call and nothing
//! else: every error is mapped onto a gRPC status for the immediate
//! caller and the slot is left in a well-defined state.

pub mod client;
pub mod config;
pub mod server;
pub mod service;

/// Generated protobuf bindings for the `rendezvous.v1` wire protocol.
pub mod generated {
    #![allow(clippy::all)]
    include!("generated/rendezvous.v1.rs");
}

pub use client::RendezvousClient;
pub use config::ServiceConfig;
pub use server::GrpcServer;
pub use service::SignalingServiceImpl;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with EnvFilter for RUST_LOG support.
///
/// With `json_logging` the fmt layer emits structured JSON lines for log
/// shippers; otherwise human-readable output.
pub fn init_tracing(json_logging: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let registry = tracing_subscriber::registry().with(env_filter);
    if json_logging {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
