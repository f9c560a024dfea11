//! Process entry: load config, build routers, serve until signalled.

use crate::config::AppConfig;
use crate::domain::{MetricsExposure, MetricsPtr, ServiceVariant};
use crate::{create_metrics, create_metrics_router, create_router, init_tracing};
use anyhow::Result;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

/// Run `variant` with configuration taken from the environment.
///
/// Loads `.env` if present, installs logging, then serves the application
/// router (and, for app1, the metrics router on its own port) until SIGINT
/// or SIGTERM.
pub async fn serve(variant: ServiceVariant) -> Result<()> {
    // ---
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env(variant)?;
    init_tracing(config.log_level);

    info!(
        "Starting {} v{} (environment: {})...",
        variant, config.version, config.environment
    );

    let metrics = create_metrics(config.metrics_type)?;
    let bind_addr = config.bind_addr;
    let metrics_bind_addr = config.metrics_bind_addr;

    let app = create_router(config, metrics.clone());
    let app_listener = TcpListener::bind(bind_addr).await?;
    info!("Application listening on {}", app_listener.local_addr()?);

    match variant.metrics_exposure() {
        MetricsExposure::SeparatePort => {
            let metrics_listener = bind_metrics(metrics, metrics_bind_addr).await?;
            tokio::try_join!(
                async {
                    axum::serve(app_listener, app)
                        .with_graceful_shutdown(shutdown_signal())
                        .await
                        .map_err(anyhow::Error::from)
                },
                metrics_listener,
            )?;
        }
        MetricsExposure::Route => {
            axum::serve(app_listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Bind the standalone metrics listener and return its serving future.
async fn bind_metrics(
    metrics: MetricsPtr,
    addr: SocketAddr,
) -> Result<impl std::future::Future<Output = Result<()>>> {
    // ---
    let listener = TcpListener::bind(addr).await?;
    info!("Metrics server started on {}", listener.local_addr()?);

    let router = create_metrics_router(metrics);
    Ok(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    })
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    // ---
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {:?}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {:?}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
