use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use vigor_domain::Service;
use vigor_storage::Memory;

/// Fitness tracking service with an exercise library, workout
/// prescriptions and progress history.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "VIGOR_ADDRESS", default_value = "127.0.0.1")]
    address: IpAddr,

    /// Port to listen on
    #[arg(long, env = "VIGOR_PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let app = Arc::new(Service::new(Memory::new()));
    let router = vigor_server::router(app).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(args.address, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown signal handler: {err}");
    }
}
