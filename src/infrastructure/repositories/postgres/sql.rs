// src/infrastructure/repositories/postgres/sql.rs
//! Statement builders. Each store operation issues exactly one of these.

use super::rows::{CLIENT_COLUMNS, ClientRow, REDIRECT_URI_COLUMNS, RedirectUriRow};
use crate::domain::client::{Change, ClientId};
use sqlx::{Postgres, QueryBuilder};

pub(super) fn insert_client(row: ClientRow) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("INSERT INTO clients ({CLIENT_COLUMNS}) "));
    builder.push_values([row], |mut values, row| {
        values
            .push_bind(row.id)
            .push_bind(row.name)
            .push_bind(row.secret_hash)
            .push_bind(row.secret_scheme)
            .push_bind(row.confidential)
            .push_bind(row.created_at)
            .push_bind(row.created_by)
            .push_bind(row.created_by_ip);
    });
    builder
}

pub(super) fn select_client(id: &ClientId) -> QueryBuilder<'static, Postgres> {
    let mut builder =
        QueryBuilder::new(format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = "));
    builder.push_bind(id.as_str().to_owned());
    builder
}

/// Builds an `UPDATE` assigning only the fields set in `change`.
///
/// Returns `None` for an empty change, which must not reach the database.
pub(super) fn update_client(
    id: &ClientId,
    change: Change,
) -> Option<QueryBuilder<'static, Postgres>> {
    if change.is_empty() {
        return None;
    }

    let Change {
        name,
        secret_hash,
        secret_scheme,
    } = change;

    let mut builder = QueryBuilder::new("UPDATE clients SET ");
    let mut assignments = builder.separated(", ");
    if let Some(name) = name {
        assignments.push("name = ");
        assignments.push_bind_unseparated(name);
    }
    if let Some(secret_hash) = secret_hash {
        assignments.push("secret_hash = ");
        assignments.push_bind_unseparated(secret_hash);
    }
    if let Some(secret_scheme) = secret_scheme {
        assignments.push("secret_scheme = ");
        assignments.push_bind_unseparated(secret_scheme);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id.as_str().to_owned());
    Some(builder)
}

pub(super) fn delete_client(id: &ClientId) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("DELETE FROM clients WHERE id = ");
    builder.push_bind(id.as_str().to_owned());
    builder
}

/// Ordering uses the "C" collation so results sort by byte value regardless of
/// the database's locale.
pub(super) fn list_redirect_uris(client_id: &ClientId) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {REDIRECT_URI_COLUMNS} FROM redirect_uris WHERE client_id = "
    ));
    builder.push_bind(client_id.as_str().to_owned());
    builder.push(r#" ORDER BY uri COLLATE "C" ASC"#);
    builder
}

/// One multi-row `INSERT`, so the whole batch commits or fails together.
pub(super) fn insert_redirect_uris(rows: Vec<RedirectUriRow>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "INSERT INTO redirect_uris ({REDIRECT_URI_COLUMNS}) "
    ));
    builder.push_values(rows, |mut values, row| {
        values
            .push_bind(row.id)
            .push_bind(row.uri)
            .push_bind(row.is_base_uri)
            .push_bind(row.client_id)
            .push_bind(row.created_at)
            .push_bind(row.created_by)
            .push_bind(row.created_by_ip);
    });
    builder
}

pub(super) fn delete_redirect_uris(ids: Vec<String>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("DELETE FROM redirect_uris WHERE id = ANY(");
    builder.push_bind(ids);
    builder.push(")");
    builder
}
