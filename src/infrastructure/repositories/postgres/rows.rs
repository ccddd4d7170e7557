// src/infrastructure/repositories/postgres/rows.rs
use crate::domain::client::{Client, ClientId, RedirectUri, RedirectUriId, stored_timestamp};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub(super) const CLIENT_COLUMNS: &str =
    "id, name, secret_hash, secret_scheme, confidential, created_at, created_by, created_by_ip";

pub(super) const REDIRECT_URI_COLUMNS: &str =
    "id, uri, is_base_uri, client_id, created_at, created_by, created_by_ip";

#[derive(Debug, FromRow)]
pub(super) struct ClientRow {
    pub id: String,
    pub name: String,
    pub secret_hash: String,
    pub secret_scheme: String,
    pub confidential: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub created_by_ip: String,
}

impl From<Client> for ClientRow {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.into(),
            name: client.name,
            secret_hash: client.secret_hash,
            secret_scheme: client.secret_scheme,
            confidential: client.confidential,
            created_at: stored_timestamp(client.created_at),
            created_by: client.created_by,
            created_by_ip: client.created_by_ip,
        }
    }
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: ClientId::from(row.id),
            name: row.name,
            secret_hash: row.secret_hash,
            secret_scheme: row.secret_scheme,
            confidential: row.confidential,
            created_at: row.created_at,
            created_by: row.created_by,
            created_by_ip: row.created_by_ip,
        }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct RedirectUriRow {
    pub id: String,
    pub uri: String,
    pub is_base_uri: bool,
    pub client_id: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub created_by_ip: String,
}

impl From<RedirectUri> for RedirectUriRow {
    fn from(uri: RedirectUri) -> Self {
        Self {
            id: uri.id.into(),
            uri: uri.uri,
            is_base_uri: uri.is_base_uri,
            client_id: uri.client_id.into(),
            created_at: stored_timestamp(uri.created_at),
            created_by: uri.created_by,
            created_by_ip: uri.created_by_ip,
        }
    }
}

impl From<RedirectUriRow> for RedirectUri {
    fn from(row: RedirectUriRow) -> Self {
        Self {
            id: RedirectUriId::from(row.id),
            uri: row.uri,
            is_base_uri: row.is_base_uri,
            client_id: ClientId::from(row.client_id),
            created_at: row.created_at,
            created_by: row.created_by,
            created_by_ip: row.created_by_ip,
        }
    }
}
