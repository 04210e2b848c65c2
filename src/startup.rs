use tokio::net::TcpListener;
use tokio::signal;

use crate::config::Config;
use crate::error::Error;
use crate::{mongo, routes};

/// Builds the MongoDB client, wires the router and serves requests until a
/// shutdown signal arrives. The client handle is constructed before the
/// first request is accepted and shared with the router as state.
pub async fn create_web_server(config: Config, listener: TcpListener) -> Result<(), Error> {
    let client = mongo::create_client(&config.mongo).await?;

    let router = routes::create_router(&config).with_state(client);

    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Listens for shutdown signals (Ctrl+C or Unix signals)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
