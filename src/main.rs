use anyhow::Context;
use helpdesk_classifier::chat::OpenAiChatClient;
use helpdesk_classifier::classifier::ClassifierService;
use helpdesk_classifier::config::Config;
use helpdesk_classifier::http;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("incomplete configuration")?;

    let transport = OpenAiChatClient::with_base_url(config.api_key.clone(), config.base_url.clone());
    let service = Arc::new(ClassifierService::new(transport, config.model.clone()));
    let app = http::router(service);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, model = %config.model, "classifier service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
