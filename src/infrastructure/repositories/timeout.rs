// src/infrastructure/repositories/timeout.rs
use crate::domain::client::{Change, Client, ClientId, ClientStore, RedirectUri, RedirectUriId};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::{future::Future, time::Duration};

/// Bounds every call on the wrapped store by a fixed deadline.
///
/// On expiry the inner future is dropped, which aborts an in-memory write
/// transaction or returns a PostgreSQL connection to the pool before the
/// statement commits.
pub struct TimeoutClientStore<S> {
    inner: S,
    limit: Duration,
}

impl<S> TimeoutClientStore<S> {
    pub fn new(inner: S, limit: Duration) -> Self {
        Self { inner, limit }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    async fn run<T>(&self, op: impl Future<Output = DomainResult<T>>) -> DomainResult<T> {
        tokio::time::timeout(self.limit, op)
            .await
            .map_err(|_| DomainError::Timeout(self.limit))?
    }
}

#[async_trait]
impl<S: ClientStore> ClientStore for TimeoutClientStore<S> {
    async fn create(&self, client: Client) -> DomainResult<()> {
        self.run(self.inner.create(client)).await
    }

    async fn get(&self, id: &ClientId) -> DomainResult<Client> {
        self.run(self.inner.get(id)).await
    }

    async fn update(&self, id: &ClientId, change: Change) -> DomainResult<()> {
        self.run(self.inner.update(id, change)).await
    }

    async fn delete(&self, id: &ClientId) -> DomainResult<()> {
        self.run(self.inner.delete(id)).await
    }

    async fn list_redirect_uris(&self, client_id: &ClientId) -> DomainResult<Vec<RedirectUri>> {
        self.run(self.inner.list_redirect_uris(client_id)).await
    }

    async fn add_redirect_uris(&self, uris: Vec<RedirectUri>) -> DomainResult<()> {
        self.run(self.inner.add_redirect_uris(uris)).await
    }

    async fn remove_redirect_uris(&self, ids: Vec<RedirectUriId>) -> DomainResult<()> {
        self.run(self.inner.remove_redirect_uris(ids)).await
    }
}
