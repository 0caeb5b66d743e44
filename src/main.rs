use std::future::IntoFuture;
use std::sync::Arc;

use anyhow::{bail, Context};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use flight_path_tracker::api::{app, AppState};
use flight_path_tracker::{ItineraryService, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = config.socket_addr()?;
    let state = AppState::new(Arc::new(ItineraryService::new()), &config);
    let router = app(state, &config);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "starting server");

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = stop_rx.await;
            })
            .into_future(),
    );

    tokio::select! {
        result = &mut server => {
            result??;
            bail!("server stopped unexpectedly");
        }
        signal = shutdown_signal() => {
            info!(signal, "starting shutdown");
        }
    }

    let _ = stop_tx.send(());
    match tokio::time::timeout(config.shutdown_timeout(), &mut server).await {
        Ok(result) => result?.context("could not stop server gracefully")?,
        Err(_) => {
            warn!("graceful shutdown timed out");
            server.abort();
            bail!("could not stop server within {:?}", config.shutdown_timeout());
        }
    }

    info!("server shutdown");
    Ok(())
}

async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}
