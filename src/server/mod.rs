//! HTTP front end.
//!
//! Every route is a thin pass-through to the record store or the
//! [`Reconciler`]; the store handle is opened once at startup and shared by
//! all handlers through [`AppState`].

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    reconcile::Reconciler, sportsdata::SportsDataClient, storage::QuarterbackDatabase, Result,
};

pub mod error;
pub mod forms;
pub mod routes;


pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<QuarterbackDatabase>,
    pub reconciler: Arc<Reconciler>,
}

impl AppState {
    pub fn new(store: Arc<QuarterbackDatabase>, source: SportsDataClient) -> Self {
        let reconciler = Arc::new(Reconciler::new(source, store.clone()));
        Self { store, reconciler }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/addQB", post(routes::add_quarterback))
        .route("/viewQBs", get(routes::view_quarterbacks))
        .route("/searchQB", post(routes::search_quarterback))
        .route("/teamStats", get(routes::team_stats))
        .route("/teamStats/{season}/{team}", get(routes::team_stats_by_path))
        .route("/admin/fetchQBs", get(routes::admin_fetch))
        .route("/deleteQBs", post(routes::delete_quarterbacks))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn bind(address: &str) -> Result<TcpListener> {
    info!("Binding to {address}");
    Ok(TcpListener::bind(address).await?)
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    serve_until(listener, state, shutdown_signal()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve_until<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(address) = listener.local_addr() {
        info!("Server running on http://{address}");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
