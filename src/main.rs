//! CardioPredict - Rust Implementation
//!
//! Serves the Dioxus web client and proxies prediction requests to the
//! remote prediction service.

#[cfg(feature = "server")]
use cardio_predict::{api, app::api::PREDICT_PATH, app::App, config};

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardio_predict=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting CardioPredict v{} ({})",
        env!("CP_VERSION"),
        env!("CP_GIT_SHA")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(
        "Configuration loaded, port: {}, prediction endpoint: {}",
        config.port,
        config.prediction.endpoint
    );
    let port = config.port;

    let state = api::AppState::new(config)?;

    let app = Router::new()
        .route("/status", get(api::status_handler))
        .route(PREDICT_PATH, post(api::predict_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        // Web UI (SSR + hydration)
        .merge(dioxus::server::router(App));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
#[cfg(feature = "server")]
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}

/// WASM client entry point
#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(cardio_predict::app::App);
}
