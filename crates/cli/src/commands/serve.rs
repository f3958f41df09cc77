use anyhow::Result;
use chatdesk_http::{create_router, AppState};
use chatdesk_llm::LlmClient;
use chatdesk_service::{AuthService, ChatService, SettingsService};
use chatdesk_storage::SettingsStore;
use std::path::PathBuf;
use std::sync::Arc;

use crate::get_api_key;

pub(crate) struct ServeOptions {
    pub port: u16,
    pub host: String,
    pub settings_file: PathBuf,
    pub upstream_url: String,
    pub allowed_origins: Vec<String>,
}

pub(crate) async fn run(options: ServeOptions) -> Result<()> {
    let store = Arc::new(SettingsStore::initialize(&options.settings_file).await?);
    let llm = Arc::new(LlmClient::new(get_api_key()?, options.upstream_url)?);
    tracing::info!(upstream = %llm.base_url(), "upstream completion API configured");

    let state = Arc::new(AppState {
        chat_service: Arc::new(ChatService::new(Arc::clone(&store), llm)),
        settings_service: Arc::new(SettingsService::new(store)),
        auth_service: AuthService::new(),
        allowed_origins: options.allowed_origins,
    });
    tracing::info!(origins = ?state.allowed_origins, "CORS origins");

    let router = create_router(state);
    let addr = format!("{}:{}", options.host, options.port);
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server");
}
