use anyhow::Context;
use aws_config::BehaviorVersion;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use config::settings::AppConfig;
use infrastructure::kms::client::KmsService;
use infrastructure::storage::s3::StorageService;
use infrastructure::transcoder::elastic::ElasticTranscoderService;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = AppConfig::new();
    let aws = aws_config::load_defaults(BehaviorVersion::latest()).await;

    let transcoder = Arc::new(ElasticTranscoderService::new(&aws));
    let storage = Arc::new(StorageService::new(&aws, config.s3_endpoint.as_deref()));
    let kms = Arc::new(KmsService::new(&aws));
    let http = reqwest::Client::new();

    let port = config.server_port;
    let state = AppState::new(config, transcoder, storage, kms, http);
    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("🚀 Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
