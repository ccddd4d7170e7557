// src/infrastructure/repositories/memory/db.rs
//! Indexed tables behind snapshot transactions.
//!
//! Readers take an immutable snapshot of the tables and never observe a
//! partially applied write. Writers are serialised by an async mutex, work on a
//! private copy of the tables, and publish it on [`WriteTxn::commit`]. A write
//! transaction dropped without committing (including one whose future was
//! cancelled) discards every change it made.

use crate::domain::client::{Client, ClientId, RedirectUri, RedirectUriId};
use parking_lot::RwLock;
use std::{
    collections::{BTreeMap, BTreeSet},
    ops::{Deref, DerefMut},
    sync::Arc,
};
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Default)]
pub struct Tables {
    clients: BTreeMap<ClientId, Client>,
    redirect_uris: BTreeMap<RedirectUriId, RedirectUri>,
    // unique: uri value -> redirect uri id
    by_uri: BTreeMap<String, RedirectUriId>,
    // non-unique: owning client -> redirect uri ids
    by_client: BTreeMap<ClientId, BTreeSet<RedirectUriId>>,
}

impl Tables {
    pub fn client(&self, id: &ClientId) -> Option<&Client> {
        self.clients.get(id)
    }

    pub fn redirect_uri(&self, id: &RedirectUriId) -> Option<&RedirectUri> {
        self.redirect_uris.get(id)
    }

    pub fn redirect_uri_by_value(&self, uri: &str) -> Option<&RedirectUri> {
        self.by_uri
            .get(uri)
            .and_then(|id| self.redirect_uris.get(id))
    }

    pub fn redirect_uris_for_client<'a>(
        &'a self,
        client_id: &ClientId,
    ) -> impl Iterator<Item = &'a RedirectUri> + 'a {
        self.by_client
            .get(client_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.redirect_uris.get(id))
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn redirect_uri_count(&self) -> usize {
        self.redirect_uris.len()
    }

    /// Inserts or replaces a client.
    pub fn put_client(&mut self, client: Client) {
        self.clients.insert(client.id.clone(), client);
    }

    pub fn remove_client(&mut self, id: &ClientId) -> Option<Client> {
        self.clients.remove(id)
    }

    /// Inserts or replaces a redirect URI, keeping both secondary indexes in
    /// step. Callers check the unique indexes first.
    pub fn put_redirect_uri(&mut self, uri: RedirectUri) {
        self.remove_redirect_uri(&uri.id);
        self.by_uri.insert(uri.uri.clone(), uri.id.clone());
        self.by_client
            .entry(uri.client_id.clone())
            .or_default()
            .insert(uri.id.clone());
        self.redirect_uris.insert(uri.id.clone(), uri);
    }

    pub fn remove_redirect_uri(&mut self, id: &RedirectUriId) -> Option<RedirectUri> {
        let removed = self.redirect_uris.remove(id)?;
        self.by_uri.remove(&removed.uri);
        if let Some(ids) = self.by_client.get_mut(&removed.client_id) {
            ids.remove(id);
            if ids.is_empty() {
                self.by_client.remove(&removed.client_id);
            }
        }
        Some(removed)
    }
}

#[derive(Debug, Default)]
pub struct MemDb {
    root: RwLock<Arc<Tables>>,
    writer: Mutex<()>,
}

impl MemDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a read-only transaction over the latest committed tables.
    pub fn read(&self) -> ReadTxn {
        ReadTxn {
            tables: Arc::clone(&self.root.read()),
        }
    }

    /// Opens a read-write transaction, waiting for any other writer to finish.
    pub async fn write(&self) -> WriteTxn<'_> {
        let writer = self.writer.lock().await;
        let tables = Tables::clone(&self.root.read());
        WriteTxn {
            db: self,
            tables,
            _writer: writer,
        }
    }
}

pub struct ReadTxn {
    tables: Arc<Tables>,
}

impl Deref for ReadTxn {
    type Target = Tables;

    fn deref(&self) -> &Tables {
        &self.tables
    }
}

pub struct WriteTxn<'a> {
    db: &'a MemDb,
    tables: Tables,
    _writer: MutexGuard<'a, ()>,
}

impl WriteTxn<'_> {
    /// Publishes this transaction's tables. Dropping the transaction instead
    /// aborts it.
    pub fn commit(self) {
        *self.db.root.write() = Arc::new(self.tables);
        tracing::trace!("memory transaction committed");
    }
}

impl Deref for WriteTxn<'_> {
    type Target = Tables;

    fn deref(&self) -> &Tables {
        &self.tables
    }
}

impl DerefMut for WriteTxn<'_> {
    fn deref_mut(&mut self) -> &mut Tables {
        &mut self.tables
    }
}
