//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the meme API (upload, list, fetch, delete) and stitches
//! it with Leptos SSR rendering of the editor under a single Axum router.
//! Paths match what the editor and gallery call: `/upload` and `/memes`.

pub mod memes;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Slack on top of `MAX_UPLOAD_BYTES` for multipart boundaries and part headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Meme API routes.
///
/// CORS is open: the editor may be hosted on a different origin than the API.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/upload", post(memes::upload))
        .route("/memes", get(memes::list))
        .route("/memes/{id}", get(memes::get_meme).delete(memes::delete_meme))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR of the editor at `/` + static site assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `[package.metadata.leptos]` or `LEPTOS_*` environment).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Compiled WASM/JS/CSS live under `{site_root}/pkg`; anything else in the
    // site root (favicon, robots.txt) is served as-is.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path)))
}

/// Full application router. Falls back to the bare API when the UI cannot be
/// configured, so uploads keep working in headless deployments.
pub fn app(state: AppState) -> Router {
    let router = match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "UI disabled, serving API only");
            api_routes(state)
        }
    };
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
