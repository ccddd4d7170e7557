// src/domain/client/repository.rs
use crate::domain::client::{
    entity::{Change, Client, RedirectUri},
    value_objects::{ClientId, RedirectUriId},
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence contract for clients and their redirect URIs.
///
/// Every backend must produce the same results and errors for the same calls:
///
/// - `get` reports [`ClientNotFound`](crate::domain::errors::DomainError::ClientNotFound)
///   for an unknown id, while `update` and `delete` silently do nothing.
/// - `create` reports [`ClientAlreadyExists`](crate::domain::errors::DomainError::ClientAlreadyExists)
///   when the id is taken and leaves the stored record alone.
/// - `add_redirect_uris` is atomic: on a
///   [`RedirectUriAlreadyExists`](crate::domain::errors::DomainError::RedirectUriAlreadyExists)
///   error nothing from the batch is stored. Redirect URIs may reference
///   clients that do not exist.
/// - `list_redirect_uris` returns URIs sorted ascending by value, and an empty
///   vector (not an error) when there are none.
/// - `remove_redirect_uris` ignores ids it cannot find.
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn create(&self, client: Client) -> DomainResult<()>;

    async fn get(&self, id: &ClientId) -> DomainResult<Client>;

    async fn update(&self, id: &ClientId, change: Change) -> DomainResult<()>;

    async fn delete(&self, id: &ClientId) -> DomainResult<()>;

    async fn list_redirect_uris(&self, client_id: &ClientId) -> DomainResult<Vec<RedirectUri>>;

    async fn add_redirect_uris(&self, uris: Vec<RedirectUri>) -> DomainResult<()>;

    async fn remove_redirect_uris(&self, ids: Vec<RedirectUriId>) -> DomainResult<()>;
}
