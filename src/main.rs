#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::fixture::FixtureRepository;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::PortalConfig::from_env().expect("invalid configuration");
    let repo = FixtureRepository::new(config.simulate_latency);
    tracing::info!(simulate_latency = config.simulate_latency, "fixture repository ready");

    let state = state::AppState::new(Arc::new(repo));
    let app = match routes::leptos_app(state.clone(), config.site_root.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos configuration unavailable; serving API only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    let port = config.port;
    tracing::info!(%port, "feeportal listening");
    axum::serve(listener, app).await.expect("server failed");
}
