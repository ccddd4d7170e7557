// src/infrastructure/mod.rs
pub mod database;
pub mod repositories;

use crate::config::{AppConfig, StoreBackend};
use crate::domain::client::ClientStore;
use anyhow::{Context, Result};
use repositories::{MemoryClientStore, PostgresClientStore, TimeoutClientStore};
use std::sync::Arc;

/// Builds the store selected by `config`. For PostgreSQL this connects and
/// applies pending migrations before returning.
pub async fn build_client_store(config: &AppConfig) -> Result<Arc<dyn ClientStore>> {
    let store: Arc<dyn ClientStore> = match (config.backend(), config.operation_timeout()) {
        (StoreBackend::Memory, None) => Arc::new(MemoryClientStore::new()),
        (StoreBackend::Memory, Some(limit)) => {
            Arc::new(TimeoutClientStore::new(MemoryClientStore::new(), limit))
        }
        (StoreBackend::Postgres, timeout) => {
            let pool = database::init_pool(config.database_url(), config.max_connections())
                .await
                .context("connecting to PostgreSQL")?;
            database::run_migrations(&pool)
                .await
                .context("applying client store migrations")?;
            let store = PostgresClientStore::new(pool);
            match timeout {
                Some(limit) => Arc::new(TimeoutClientStore::new(store, limit)),
                None => Arc::new(store),
            }
        }
    };

    tracing::info!(
        backend = %config.backend(),
        timeout = ?config.operation_timeout(),
        "client store ready"
    );
    Ok(store)
}
