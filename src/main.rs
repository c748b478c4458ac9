// lulimi - Zambian language translation API with English pivot routing
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use lulimi::cli::Args;
use lulimi::inference::build_adapter;
use lulimi::languages::LanguageRegistry;
use lulimi::router::TranslationRouter;
use lulimi::server::create_router;
use lulimi::utils::logging;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = args.resolve_config()?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting lulimi v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the language table and inference backend
    let registry = Arc::new(LanguageRegistry::zambian());
    info!(
        "Serving {} languages, pivot {}",
        registry.languages().len(),
        registry.pivot()
    );
    let adapter = build_adapter(&config.inference, registry.clone())?;
    let translation_router = TranslationRouter::new(registry, adapter);

    // Phase 4: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, translation_router)?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
