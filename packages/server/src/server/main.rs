// Main entry point for the contact API server

use anyhow::{Context, Result};
use server_core::{
    kernel::EmailDispatcher,
    server::{build_app, AppState},
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio contact API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(providers = ?config.providers, "Configuration loaded");

    let dispatcher = EmailDispatcher::from_credentials(&config.providers);
    match dispatcher.selected_provider() {
        Some(provider) => tracing::info!(provider, "Email provider selected"),
        None => tracing::warn!(
            "No email provider configured; submissions will be accepted but not delivered"
        ),
    }

    // Build application
    let app = build_app(AppState::new(config.contact, dispatcher));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Contact endpoint: http://localhost:{}/api/contact", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
