// src/server/mod.rs
//! JSON HTTP surface over `NotionGateway`.

mod error;
mod handlers;
mod middleware;

pub use error::ServerError;
pub use handlers::{ExtractIdRequest, ExtractIdResponse};

use crate::error::AppError;
use crate::gateway::NotionGateway;
use axum::middleware::from_fn;
use axum::routing::{get, post, Router};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<NotionGateway>,
}

impl AppState {
    pub fn new(gateway: NotionGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

#[rustfmt::skip]
pub fn get_routes() -> Router<AppState> {
    Router::new()
        .route("/api/database/:database_id", get(handlers::get_database))
        .route("/api/databases", get(handlers::list_databases))
        .route("/api/extract-database-id", post(handlers::extract_database_id))
}

/// The full application: routes, request logging and state.
pub fn router(state: AppState) -> Router {
    get_routes()
        .layer(from_fn(middleware::log_requests))
        .with_state(state)
}

/// Serves the API on `addr` until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), AppError> {
    let server = axum::Server::try_bind(&addr).map_err(io_error)?;
    log::info!("Listening on http://{}", addr);

    server
        .serve(router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(io_error)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}

fn io_error(err: hyper::Error) -> AppError {
    AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, err))
}
