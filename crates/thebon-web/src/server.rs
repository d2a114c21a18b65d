use axum::{Router, middleware, routing::get};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::info;

use crate::boundary::{error_boundary, handle_panic};
use crate::configuration::{Settings, get_configuration};
use crate::error::ServerError;
use crate::routes;

/// The site's pages. Known paths answer other methods with 405 instead of
/// falling through to the not-found page.
pub fn pages() -> Router {
    Router::new()
        .route("/", get(routes::home).fallback(routes::method_not_allowed))
        .route("/health", get(routes::health_check).fallback(routes::method_not_allowed))
}

/// Wrap pages with the not-found fallback, the error boundary and request
/// tracing.
pub fn mount(pages: Router) -> Router {
    pages
        .fallback(routes::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(error_boundary))
        .layer(TraceLayer::new_for_http())
}

pub fn app() -> Router {
    mount(pages())
}

/// Load configuration and serve until interrupted.
pub async fn start() -> Result<(), ServerError> {
    let settings = get_configuration()?;
    run(settings).await
}

pub async fn run(settings: Settings) -> Result<(), ServerError> {
    let addr = settings.application.address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("✨ Server ready:");
    info!("  🌎 http://{}", listener.local_addr()?);

    axum::serve(listener, app().into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
