use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api_client;
mod components;
mod config;
mod config_store;
mod controllers;
mod errors;
mod htmx;
mod lease;
mod middleware;
mod models;
mod property;
mod routes;
mod tabs;
mod tenant;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rentals=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;
    let state = models::AppState {
        transport: Arc::new(api_client::ReqwestTransport::new()),
    };
    let app = routes::get_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("listening on {}", config.listen_addr);
    axum::Server::bind(&config.listen_addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
