use anyhow::{Context, Result};
use helpdesk_api::config::ApiConfig;
use helpdesk_api::middleware;
use helpdesk_api::routes::{self, AppState};
use std::net::SocketAddr;
use tracing::{error, info};

// Panic hook to catch and log panics
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let message = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_default();
        error!("PANIC at {}: {}", location, message);
        eprintln!("Backtrace:\n{:?}", std::backtrace::Backtrace::capture());
    }));
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let config = ApiConfig::from_env();

    middleware::init_tracing(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;
    setup_panic_hook();
    info!("Application starting...");

    let state = AppState::from_config(&config).context("Failed to initialize storage")?;
    let app = routes::build_app(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind listener on {}", addr))?;
    info!("Server listening on {} (port {})", addr, config.port);
    info!("Health check available at http://{}/health", addr);
    info!("OpenAPI document at http://{}/api/v1/openapi.json", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

// Handle both SIGINT (Ctrl+C) and SIGTERM (Docker stop)
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => info!("SIGINT received, shutting down gracefully"),
                    _ = sigterm.recv() => info!("SIGTERM received, shutting down gracefully"),
                }
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
                info!("SIGINT received, shutting down gracefully");
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received");
    }
}
