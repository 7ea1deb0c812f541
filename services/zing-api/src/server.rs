use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::MusicCatalog;
use crate::config::ServerConfig;
use crate::controllers::MusicController;
use crate::routers::api_routes;

#[derive(Clone)]
pub struct AppState {
    pub music: MusicController,
}

pub fn build_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Owns the listener for the lifetime of the process (or of a test).
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    pub async fn bind(
        config: &ServerConfig,
        catalog: Arc<dyn MusicCatalog>,
    ) -> std::io::Result<Self> {
        let listener = TcpListener::bind(config.bind_addr()).await?;
        let state = AppState {
            music: MusicController::new(catalog, config.upstream_timeout),
        };
        Ok(Server {
            listener,
            router: build_router(state),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn serve(self) -> std::io::Result<()> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    pub async fn serve_with_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("✅ Zing API listening on http://{}", self.local_addr()?);
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}
