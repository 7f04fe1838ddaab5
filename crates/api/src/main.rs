use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ssp_api::config::ServerConfig;
use ssp_api::router::build_app_router;
use ssp_api::state::{self, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ssp_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    // --- Persistence ---
    let persistence = match state::resolve_persistence(&config).await {
        Ok(persistence) => persistence,
        Err(err) => {
            tracing::error!(error = %err, "Database unavailable and STRICT_PERSISTENCE is set");
            return ExitCode::FAILURE;
        }
    };
    if persistence.is_demo() {
        tracing::warn!("Contact submissions will be acknowledged but not stored");
    }

    // --- App state and router ---
    let state = AppState { persistence };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let host: IpAddr = match config.host.parse() {
        Ok(host) => host,
        Err(err) => {
            tracing::error!(host = %config.host, error = %err, "Invalid HOST address");
            return ExitCode::FAILURE;
        }
    };
    let addr = SocketAddr::new(host, config.port);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(%addr, "Server is running, visit http://localhost:{}", config.port);

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Graceful shutdown complete");
    ExitCode::SUCCESS
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
