// src/domain/client/entity.rs
use crate::domain::client::value_objects::{ClientId, RedirectUriId};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Sub-second digits a store keeps for creation timestamps.
///
/// PostgreSQL `TIMESTAMPTZ` holds microseconds, so every backend truncates
/// `created_at` to this precision on write and reads return the truncated value.
pub const TIMESTAMP_PRECISION: u16 = 6;

/// Truncates `at` to [`TIMESTAMP_PRECISION`].
pub fn stored_timestamp(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(TIMESTAMP_PRECISION)
}

/// A registered API consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    /// Hash of the client secret, encoded as described by `secret_scheme`.
    pub secret_hash: String,
    pub secret_scheme: String,
    /// Confidential clients are expected to authenticate with a secret.
    pub confidential: bool,
    pub created_at: DateTime<Utc>,
    /// The key that authenticated the request creating this client.
    pub created_by: String,
    pub created_by_ip: String,
}

/// A URI (or URI prefix, when `is_base_uri` is set) a client may redirect to.
///
/// `uri` is unique across every client in a store, not just within one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectUri {
    pub id: RedirectUriId,
    pub uri: String,
    pub is_base_uri: bool,
    pub client_id: ClientId,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub created_by_ip: String,
}

impl Client {
    /// Returns the client as a store will hand it back.
    pub fn with_stored_precision(mut self) -> Self {
        self.created_at = stored_timestamp(self.created_at);
        self
    }
}

impl RedirectUri {
    pub fn with_stored_precision(mut self) -> Self {
        self.created_at = stored_timestamp(self.created_at);
        self
    }
}

/// Sorts `uris` ascending by their `uri` value.
pub fn sort_by_uri(uris: &mut [RedirectUri]) {
    uris.sort_by(|a, b| a.uri.cmp(&b.uri));
}

/// A sparse patch over the mutable fields of a [`Client`].
///
/// `None` leaves a field untouched; `Some(String::new())` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Change {
    pub name: Option<String>,
    pub secret_hash: Option<String>,
    pub secret_scheme: Option<String>,
}

impl Change {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_secret_hash(mut self, secret_hash: impl Into<String>) -> Self {
        self.secret_hash = Some(secret_hash.into());
        self
    }

    pub fn with_secret_scheme(mut self, secret_scheme: impl Into<String>) -> Self {
        self.secret_scheme = Some(secret_scheme.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.secret_hash.is_none() && self.secret_scheme.is_none()
    }
}

/// Returns `client` with `change` applied.
pub fn apply(change: &Change, client: &Client) -> Client {
    let mut result = client.clone();
    if let Some(name) = &change.name {
        result.name = name.clone();
    }
    if let Some(secret_hash) = &change.secret_hash {
        result.secret_hash = secret_hash.clone();
    }
    if let Some(secret_scheme) = &change.secret_scheme {
        result.secret_scheme = secret_scheme.clone();
    }
    result
}
