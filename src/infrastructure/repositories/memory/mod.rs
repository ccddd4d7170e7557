// src/infrastructure/repositories/memory/mod.rs
mod db;

pub use db::{MemDb, ReadTxn, Tables, WriteTxn};

use crate::domain::client::{
    Change, Client, ClientId, ClientStore, RedirectUri, RedirectUriId, apply, sort_by_uri,
};
use crate::domain::errors::{DomainError, DomainResult, RedirectUriConflict};
use async_trait::async_trait;

/// [`ClientStore`] kept entirely in process memory.
///
/// Every call runs in its own [`MemDb`] transaction, so a failed batch leaves
/// nothing behind.
#[derive(Debug, Default)]
pub struct MemoryClientStore {
    db: MemDb,
}

impl MemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn db(&self) -> &MemDb {
        &self.db
    }
}

#[async_trait]
impl ClientStore for MemoryClientStore {
    #[tracing::instrument(skip_all, fields(client_id = %client.id))]
    async fn create(&self, client: Client) -> DomainResult<()> {
        let mut txn = self.db.write().await;
        if txn.client(&client.id).is_some() {
            return Err(DomainError::ClientAlreadyExists);
        }
        txn.put_client(client.with_stored_precision());
        txn.commit();
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(client_id = %id))]
    async fn get(&self, id: &ClientId) -> DomainResult<Client> {
        self.db
            .read()
            .client(id)
            .cloned()
            .ok_or(DomainError::ClientNotFound)
    }

    #[tracing::instrument(skip_all, fields(client_id = %id))]
    async fn update(&self, id: &ClientId, change: Change) -> DomainResult<()> {
        if change.is_empty() {
            return Ok(());
        }
        let mut txn = self.db.write().await;
        let Some(existing) = txn.client(id) else {
            return Ok(());
        };
        let updated = apply(&change, existing);
        txn.put_client(updated);
        txn.commit();
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(client_id = %id))]
    async fn delete(&self, id: &ClientId) -> DomainResult<()> {
        let mut txn = self.db.write().await;
        if txn.remove_client(id).is_some() {
            txn.commit();
        }
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(client_id = %client_id))]
    async fn list_redirect_uris(&self, client_id: &ClientId) -> DomainResult<Vec<RedirectUri>> {
        let txn = self.db.read();
        let mut uris: Vec<RedirectUri> = txn.redirect_uris_for_client(client_id).cloned().collect();
        sort_by_uri(&mut uris);
        Ok(uris)
    }

    #[tracing::instrument(skip_all, fields(count = uris.len()))]
    async fn add_redirect_uris(&self, uris: Vec<RedirectUri>) -> DomainResult<()> {
        if uris.is_empty() {
            return Ok(());
        }
        let mut txn = self.db.write().await;
        for uri in uris {
            if txn.redirect_uri(&uri.id).is_some() {
                return Err(RedirectUriConflict::id(uri.id).into());
            }
            if txn.redirect_uri_by_value(&uri.uri).is_some() {
                return Err(RedirectUriConflict::uri(uri.uri).into());
            }
            txn.put_redirect_uri(uri.with_stored_precision());
        }
        txn.commit();
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(count = ids.len()))]
    async fn remove_redirect_uris(&self, ids: Vec<RedirectUriId>) -> DomainResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let mut txn = self.db.write().await;
        let mut removed = 0usize;
        for id in &ids {
            if txn.remove_redirect_uri(id).is_some() {
                removed += 1;
            }
        }
        if removed > 0 {
            txn.commit();
        }
        Ok(())
    }
}
