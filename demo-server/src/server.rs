use std::{sync::Arc, time::Duration};

use axum::{Extension, Router};
use idverify_sdk::{DocScanService, ShareClient};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{media_storage::MediaStorage, routes, types::DemoConfig};

/// Upper bound for one request, including the upstream calls it makes
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the application router with its dependencies attached
#[must_use]
pub fn app(
    config: Arc<DemoConfig>,
    doc_scan: Arc<DocScanService>,
    share_client: Arc<ShareClient>,
    media_storage: Arc<MediaStorage>,
) -> Router {
    routes::handler()
        .nest_service("/static", ServeDir::new(config.static_dir()))
        .layer(Extension(config))
        .layer(Extension(doc_scan))
        .layer(Extension(share_client))
        .layer(Extension(media_storage))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}

/// Starts the server with the given configuration and services
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(
    config: Arc<DemoConfig>,
    doc_scan: Arc<DocScanService>,
    share_client: Arc<ShareClient>,
    media_storage: Arc<MediaStorage>,
) -> anyhow::Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port()));
    let router = app(config, doc_scan, share_client, media_storage);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🔄 Identity verification demo started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
