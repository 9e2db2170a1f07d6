mod config;
mod routes;

use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    match config.api.base_url() {
        Some(url) => tracing::info!(api_url = url, "webhook API configured"),
        None => tracing::warn!(
            var = config::API_URL_ENV,
            "webhook API URL not configured; submissions will fail"
        ),
    }

    let (app, site_addr) = match routes::leptos_app(config.api.clone()) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!(error = %e, "failed to build app");
            std::process::exit(1);
        }
    };

    let addr = config
        .port
        .map_or(site_addr, |port| SocketAddr::from(([0, 0, 0, 0], port)));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "icebreaker listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
