use checkin_heatmap::config::{TARGET_YEAR, resolve_port};
use checkin_heatmap::{AppState, resolve_csv_path, router};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let csv_path = resolve_csv_path();
    let state = AppState::new(csv_path, TARGET_YEAR);
    if let Err(err) = state.reload().await {
        error!("error loading check-in log, serving empty results: {err}");
    }

    #[cfg(unix)]
    tokio::spawn(reload_on_hangup(state.clone()));

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], resolve_port()));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(unix)]
async fn reload_on_hangup(state: AppState) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangups = match signal(SignalKind::hangup()) {
        Ok(stream) => stream,
        Err(err) => {
            error!("failed to install SIGHUP handler: {err}");
            return;
        }
    };

    while hangups.recv().await.is_some() {
        info!(path = %state.csv_path.display(), "reloading check-in log");
        if let Err(err) = state.reload().await {
            error!("reload failed, keeping previous results: {err}");
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
