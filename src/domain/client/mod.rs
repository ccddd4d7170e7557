// src/domain/client/mod.rs
pub mod entity;
pub mod repository;
pub mod secret;
pub mod value_objects;

pub use entity::{
    Change, Client, RedirectUri, TIMESTAMP_PRECISION, apply, sort_by_uri, stored_timestamp,
};
pub use repository::ClientStore;
pub use secret::{SecretScheme, change_secret};
pub use value_objects::{ClientId, RedirectUriId};
