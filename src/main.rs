//! Stack Overflow Profile Lookup Service
//!
//! An HTTP API that resolves Stack Overflow users by display name or
//! numeric id and returns normalized profile summaries.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌───────────────────────────────────────────────────┐
//!                         │               PROFILE LOOKUP SERVICE              │
//!                         │                                                   │
//!     Client Request      │  ┌──────────┐   ┌──────────┐   ┌──────────────┐  │
//!     ────────────────────┼─▶│   http   │──▶│ validate │──▶│    http      │  │
//!                         │  │  server  │   │          │   │   handlers   │  │
//!                         │  └──────────┘   └──────────┘   └──────┬───────┘  │
//!                         │                                       │          │
//!                         │                                       ▼          │
//!                         │                               ┌──────────────┐   │      Stack
//!                         │                               │   upstream   │───┼───▶ Exchange
//!                         │                               │    client    │   │       API
//!                         │                               └──────┬───────┘   │
//!                         │                                      │           │
//!     Client Response     │  ┌──────────┐   ┌──────────────┐     │           │
//!     ◀───────────────────┼──│   http   │◀──│   profile    │◀────┘           │
//!                         │  │  error   │   │  normalize   │                 │
//!                         │  └──────────┘   └──────────────┘                 │
//!                         │                                                  │
//!                         │  ┌────────────────────────────────────────────┐  │
//!                         │  │          Cross-Cutting Concerns            │  │
//!                         │  │  ┌────────┐ ┌─────────────┐ ┌───────────┐  │  │
//!                         │  │  │ config │ │observability│ │ lifecycle │  │  │
//!                         │  │  └────────┘ └─────────────┘ └───────────┘  │  │
//!                         │  └────────────────────────────────────────────┘  │
//!                         └───────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use so_profile_api::config;
use so_profile_api::lifecycle::{signals, Shutdown};
use so_profile_api::observability::{logging, metrics};
use so_profile_api::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load()?;

    logging::init(&config.observability);

    tracing::info!("so-profile-api v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        site = %config.upstream.site,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config)?;
    server.run(listener, receiver).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
