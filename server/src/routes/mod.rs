//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health endpoint and Leptos SSR rendering under a
//! single Axum router and serves the compiled WASM/CSS bundle from `/pkg`.
//! The resolved `ApiConfig` is handed to every render through Leptos context
//! and published to the browser by the HTML shell.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use icebreaker_client::net::config::ApiConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Non-UI routes.
fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR frontend: health route + the icebreaker page + static assets.
///
/// Returns the router together with the configured Leptos `site_addr`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(api: ApiConfig) -> Result<(Router, SocketAddr), String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let site_addr = leptos_options.site_addr;
    let routes = generate_route_list(icebreaker_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let api = api.clone();
                move || provide_context(api.clone())
            },
            {
                let opts = leptos_options.clone();
                move || icebreaker_client::app::shell(opts.clone(), api.clone())
            },
        )
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let app = api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());
    Ok((app, site_addr))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
