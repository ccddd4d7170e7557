// src/infrastructure/repositories/postgres/mod.rs
mod rows;
mod sql;

use self::rows::{ClientRow, RedirectUriRow};
use super::error::{map_add_redirect_uris, map_create_client, map_sqlx};
use crate::domain::client::{Change, Client, ClientId, ClientStore, RedirectUri, RedirectUriId};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::PgPool;

/// [`ClientStore`] backed by the `clients` and `redirect_uris` tables.
///
/// Uniqueness is left to the table constraints; violations are translated
/// back into domain errors. The pool is shared and owned by the caller.
#[derive(Clone)]
pub struct PostgresClientStore {
    pool: PgPool,
}

impl PostgresClientStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ClientStore for PostgresClientStore {
    #[tracing::instrument(skip_all, fields(client_id = %client.id))]
    async fn create(&self, client: Client) -> DomainResult<()> {
        sql::insert_client(ClientRow::from(client))
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_create_client)?;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(client_id = %id))]
    async fn get(&self, id: &ClientId) -> DomainResult<Client> {
        let row = sql::select_client(id)
            .build_query_as::<ClientRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Client::from).ok_or(DomainError::ClientNotFound)
    }

    // No existence check: updating an unknown id affects zero rows and succeeds.
    #[tracing::instrument(skip_all, fields(client_id = %id))]
    async fn update(&self, id: &ClientId, change: Change) -> DomainResult<()> {
        let Some(mut builder) = sql::update_client(id, change) else {
            return Ok(());
        };
        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(client_id = %id))]
    async fn delete(&self, id: &ClientId) -> DomainResult<()> {
        sql::delete_client(id)
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(client_id = %client_id))]
    async fn list_redirect_uris(&self, client_id: &ClientId) -> DomainResult<Vec<RedirectUri>> {
        let rows = sql::list_redirect_uris(client_id)
            .build_query_as::<RedirectUriRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(RedirectUri::from).collect())
    }

    #[tracing::instrument(skip_all, fields(count = uris.len()))]
    async fn add_redirect_uris(&self, uris: Vec<RedirectUri>) -> DomainResult<()> {
        if uris.is_empty() {
            return Ok(());
        }
        let rows = uris.into_iter().map(RedirectUriRow::from).collect();
        sql::insert_redirect_uris(rows)
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_add_redirect_uris)?;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(count = ids.len()))]
    async fn remove_redirect_uris(&self, ids: Vec<RedirectUriId>) -> DomainResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let ids = ids.into_iter().map(String::from).collect();
        sql::delete_redirect_uris(ids)
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
