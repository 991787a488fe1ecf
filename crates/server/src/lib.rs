//! Server crate for the movie finder web app.
//!
//! This crate wires the data loader and ranking pipeline behind a single
//! HTML page:
//!
//! - **orchestrator**: reload → filter → rank, once per request
//! - **form**: parsing and validating the submitted filters
//! - **views**: the embedded Tera template and its view models
//! - **routes**: the axum router
//! - **config**: where the dataset lives and where to listen

pub mod config;
pub mod error;
pub mod form;
pub mod orchestrator;
pub mod routes;
pub mod views;

pub use config::ServerConfig;
pub use error::ServerError;
pub use form::{FormError, MovieFilterForm};
pub use orchestrator::RankingOrchestrator;
pub use routes::{AppState, router};

use tokio::net::TcpListener;
use tracing::info;

/// Run the web app until Ctrl-C.
pub async fn serve(config: ServerConfig) -> error::Result<()> {
    let state = AppState::new(&config)?;
    let app = router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    info!(
        "Serving {} on http://{}",
        config.dataset_path.display(),
        config.bind_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Never resolve; keep serving
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
