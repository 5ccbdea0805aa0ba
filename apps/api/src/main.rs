mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::enhancer::{DisabledEnhancer, EnhancementProvider, GeminiEnhancer};
use crate::generation::processor::ResumeProcessor;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let enhancement_timeout = Duration::from_secs(config.enhancement_timeout_secs);

    // Pick the enhancement backend once; handlers never branch on it.
    let enhancer: Arc<dyn EnhancementProvider> = match &config.gemini_api_key {
        Some(api_key) => {
            let llm = LlmClient::new(
                api_key.clone(),
                config.gemini_api_url.clone(),
                config.gemini_model.clone(),
                enhancement_timeout,
            )?
            .with_max_retries(config.enhancement_max_retries);
            info!(
                "GEMINI_API_KEY found - AI enhancement enabled (model: {})",
                llm.model()
            );
            Arc::new(GeminiEnhancer(llm))
        }
        None => {
            info!("No GEMINI_API_KEY found - using rule-based enhancement");
            Arc::new(DisabledEnhancer)
        }
    };

    let state = AppState {
        processor: Arc::new(ResumeProcessor::new(enhancer, enhancement_timeout)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the front end has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
