use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod routes;

use config::ServerConfig;

pub struct AppState {
    pub config: ServerConfig,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/options", get(routes::options))
        .route("/api/progression", post(routes::progression::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default().with_env_overrides();
    let addr = config.addr.clone();

    let state = Arc::new(AppState { config });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");

    info!("Server running at http://{}", addr);

    axum::serve(listener, app(state)).await.unwrap();
}
