use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use wizardwebb_core::{AppConfig, Catalog};

mod dto;
mod error;
mod handlers;
mod html;
mod security;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) app_name: Arc<str>,
}

impl WebState {
    fn new(catalog: Catalog, app_name: &str) -> Self {
        Self {
            catalog: Arc::new(catalog),
            app_name: Arc::from(app_name),
        }
    }
}

/// Start the directory web server and block until shutdown.
///
/// # Errors
/// Returns an error when the runtime cannot be created, the socket cannot be
/// bound, or the server exits with a runtime failure.
pub fn serve_web(config: &AppConfig, catalog: Catalog) -> Result<()> {
    let state = WebState::new(catalog, &config.app_name);
    let bind_addr = config.bind_addr();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build web runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind web server at {bind_addr}"))?;
        tracing::info!(
            addr = %listener.local_addr()?,
            links = state.catalog.len(),
            app = %state.app_name,
            "link directory listening"
        );

        axum::serve(listener, app_router(state))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutdown requested");
            })
            .await
            .context("web server failed")
    })
}

pub(crate) fn app_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/about", get(handlers::about))
        .route("/assets/index.css", get(handlers::index_css))
        .route("/assets/index.js", get(handlers::index_js))
        .route("/api/links", get(handlers::list_links))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/view", post(handlers::apply_view))
        .route("/healthz", get(handlers::healthz))
        .layer(middleware::from_fn(security::security_headers_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(false))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .with_state(state)
}
