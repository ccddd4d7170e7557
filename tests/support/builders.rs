// tests/support/builders.rs
use chrono::{DateTime, Utc};
use oauth_clients::domain::client::{
    Client, ClientId, RedirectUri, RedirectUriId, stored_timestamp,
};

/// The current time at the precision stores keep, so round trips compare equal.
pub fn now() -> DateTime<Utc> {
    stored_timestamp(Utc::now())
}

pub fn client(id: &str) -> Client {
    Client {
        id: ClientId::new(id),
        name: format!("client {id}"),
        secret_hash: String::new(),
        secret_scheme: String::new(),
        confidential: false,
        created_at: now(),
        created_by: "test-key".into(),
        created_by_ip: "127.0.0.1".into(),
    }
}

/// A client with a random id, so suites sharing a store cannot collide.
pub fn unique_client() -> Client {
    client(ClientId::generate().as_str())
}

pub fn redirect_uri(id: &str, uri: &str, client_id: &ClientId) -> RedirectUri {
    RedirectUri {
        id: RedirectUriId::new(id),
        uri: uri.into(),
        is_base_uri: false,
        client_id: client_id.clone(),
        created_at: now(),
        created_by: "test-key".into(),
        created_by_ip: "127.0.0.1".into(),
    }
}

/// A redirect URI with a random id and a URI derived from it.
pub fn unique_redirect_uri(client_id: &ClientId) -> RedirectUri {
    let id = RedirectUriId::generate();
    let uri = format!("https://{id}.example.test/callback");
    redirect_uri(id.as_str(), &uri, client_id)
}
