use std::{future::Future, net::SocketAddr};

use axum::{middleware, routing::any, Router};
use tokio::net::TcpListener;

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;

use errors::StartupError;

pub fn build_app() -> Router {
    Router::new()
        .route(http::handlers::HOME_PATH, any(http::handlers::home))
        .layer(middleware::from_fn(logging::request_logging_middleware))
}

pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, StartupError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::bind(addr, source))
}

/// Serves `build_app()` until `shutdown` resolves, then drains open
/// connections and returns.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_app().into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)
}
