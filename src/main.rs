// src/main.rs
use anyhow::Result;
use oauth_clients::{config::AppConfig, infrastructure::build_client_store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Prepares the configured client store, applying migrations when backed by
/// PostgreSQL, then exits.
#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let _store = build_client_store(&config).await?;
    tracing::info!(backend = %config.backend(), "schema up to date");

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
