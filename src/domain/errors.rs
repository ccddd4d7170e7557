// src/domain/errors.rs
use std::{fmt, time::Duration};
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("client not found")]
    ClientNotFound,
    #[error("client already exists")]
    ClientAlreadyExists,
    #[error(transparent)]
    RedirectUriAlreadyExists(#[from] RedirectUriConflict),
    #[error("incorrect client secret")]
    IncorrectSecret,
    #[error("an unsupported secret scheme was used: {0:?}")]
    UnsupportedSecretScheme(String),
    #[error("stored secret hash is not valid hex: {0}")]
    SecretDecode(#[from] hex::FromHexError),
    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("persistence error: {0}")]
    Persistence(#[source] BoxError),
}

impl DomainError {
    pub fn persistence(err: impl Into<BoxError>) -> Self {
        Self::Persistence(err.into())
    }
}

/// Identifies which redirect URI field collided when a batch was rejected.
///
/// At most one of `id` and `uri` is set. Both are empty when a backend could
/// not work out the colliding field; `source` then holds the raw backend error.
#[derive(Debug, Default, Error)]
pub struct RedirectUriConflict {
    pub id: Option<String>,
    pub uri: Option<String>,
    #[source]
    pub source: Option<BoxError>,
}

impl RedirectUriConflict {
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn uri(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }

    pub fn unidentified(source: impl Into<BoxError>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for RedirectUriConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.id, &self.uri, &self.source) {
            (Some(id), _, _) => write!(f, "redirect URI {id:?} already exists"),
            (None, Some(uri), _) => write!(f, "redirect URI {uri:?} already exists"),
            (None, None, Some(source)) => write!(f, "redirect URI already exists: {source}"),
            (None, None, None) => f.write_str("redirect URI already exists"),
        }
    }
}
