//! Signaling server binary entry point
//!
//! Starts the rendezvous signaling service that brokers offer/answer
//! exchanges between two WebRTC peers.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults ([::1]:6556)
//! cargo run -p rendezvous-grpc --bin signaling-server
//!
//! # Start on all interfaces
//! RENDEZVOUS_BIND_ADDRESS="0.0.0.0:6556" cargo run -p rendezvous-grpc --bin signaling-server
//!
//! # Shorten the exchange deadline
//! RENDEZVOUS_EXCHANGE_TIMEOUT_SEC=60 cargo run -p rendezvous-grpc --bin signaling-server
//! ```
//!
//! # Environment Variables
//!
//! - `RENDEZVOUS_BIND_ADDRESS`: Server bind address (default: `[::1]:6556`)
//! - `RENDEZVOUS_EXCHANGE_TIMEOUT_SEC`: Deadline for a parked StartExchange (default: `300`)
//! - `RENDEZVOUS_OFFER_WAIT_TIMEOUT_SEC`: Deadline for a parked WaitForOffer (default: `60`)
//! - `RENDEZVOUS_JSON_LOGGING`: Enable JSON structured logging (default: `false`)
//! - `RUST_LOG`: Logging level (default: `info`)

use rendezvous_grpc::{init_tracing, GrpcServer, ServiceConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Register Ctrl+C handling before anything can block
    let shutdown_flag = Arc::new(AtomicBool::new(false));
    let shutdown_flag_handler = Arc::clone(&shutdown_flag);

    ctrlc::set_handler(move || {
        let was_already_set = shutdown_flag_handler.swap(true, Ordering::SeqCst);
        if was_already_set {
            eprintln!("Shutdown already in progress, forcing immediate exit");
            std::process::exit(0);
        }
        eprintln!("Ctrl+C received, shutting down...");

        // Force exit if graceful shutdown stalls on a parked call
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_secs(2));
            eprintln!("Graceful shutdown timeout, forcing exit");
            std::process::exit(0);
        });
    })
    .expect("Failed to set Ctrl+C handler");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("rendezvous-worker")
        .enable_all()
        .build()?;

    runtime.block_on(async_main(shutdown_flag))
}

async fn async_main(shutdown_flag: Arc<AtomicBool>) -> anyhow::Result<()> {
    let config = ServiceConfig::from_env();

    init_tracing(config.json_logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        protocol = "rendezvous.v1",
        "Rendezvous signaling server starting"
    );

    info!(
        bind_address = %config.bind_address,
        exchange_timeout_sec = config.exchange_timeout.as_secs(),
        offer_wait_timeout_sec = config.offer_wait_timeout.as_secs(),
        json_logging = config.json_logging,
        "Configuration loaded"
    );

    GrpcServer::new(config)
        .serve_with_shutdown_flag(shutdown_flag)
        .await
}
