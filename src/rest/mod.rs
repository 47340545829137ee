use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};

use crate::satis::RepoStore;

mod error;
mod handlers;
mod models;

pub use error::ApiError;
use handlers::{
    add_repo, delete_repo, find_all_repos, find_repo, generate_static_web, health, not_found,
    save_repo, update_package,
};

/// Settings the repo resource needs at request time.
#[derive(Clone, Debug, Default)]
pub struct ResourceSettings {
    /// Public base URL used to build `Location` headers.
    pub host: String,
    /// Webhook credentials; the check is skipped unless both are set.
    pub username: String,
    pub api_token: String,
}

#[derive(Clone)]
pub struct AppState<S: RepoStore> {
    pub store: S,
    pub settings: ResourceSettings,
    pub started_at: std::time::SystemTime,
}

impl<S: RepoStore> AppState<S> {
    pub fn new(store: S, settings: ResourceSettings) -> Self {
        Self {
            store,
            settings,
            started_at: std::time::SystemTime::now(),
        }
    }
}

pub fn router<S: RepoStore + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health::<S>))
        .route("/api/repo", get(find_all_repos::<S>).post(add_repo::<S>))
        .route(
            "/api/repo/:id",
            get(find_repo::<S>)
                .put(save_repo::<S>)
                .delete(delete_repo::<S>),
        )
        .route("/api/generate", post(generate_static_web::<S>))
        .route(
            "/update-package",
            get(update_package::<S>).post(update_package::<S>),
        )
        .fallback(not_found)
        .with_state(state)
}

pub async fn serve<S: RepoStore + Clone + Send + Sync + 'static>(
    addr: SocketAddr,
    state: AppState<S>,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("🌐 REST listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 REST shutdown requested");
        })
        .await?;
    log::info!("👋 REST server exited");
    Ok(())
}
