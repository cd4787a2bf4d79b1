use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use voxnote::application::services::{InputValidator, SummarizationService, TranscriptionService};
use voxnote::infrastructure::audio::TranscriptionEngineFactory;
use voxnote::infrastructure::llm::SummarizerFactory;
use voxnote::infrastructure::observability::{TracingConfig, init_tracing};
use voxnote::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let validator = InputValidator::new(settings.limits.validation_limits());

    tracing::info!(
        provider = settings.transcription.provider.as_str(),
        "Initializing transcription backend"
    );
    let engine = TranscriptionEngineFactory::create(&settings.transcription)
        .context("Failed to initialize transcription backend")?;

    tracing::info!(
        provider = settings.summarization.provider.as_str(),
        "Initializing summarization backend"
    );
    let summarizer = SummarizerFactory::create(&settings.summarization)
        .context("Failed to initialize summarization backend")?;

    let state = AppState::new(
        Arc::new(TranscriptionService::new(engine, validator)),
        Arc::new(SummarizationService::new(summarizer, validator)),
    );

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(address = %addr, environment = %environment, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
