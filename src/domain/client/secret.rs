// src/domain/client/secret.rs
use crate::domain::client::entity::{Change, Client};
use crate::domain::errors::{DomainError, DomainResult};
use sha2::{Digest, Sha256};
use std::{fmt, str::FromStr};

/// Hashing schemes a stored client secret may use.
///
/// The scheme name is persisted alongside each hash, so records written under
/// an older scheme keep verifying after new variants are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretScheme {
    Sha256,
}

impl SecretScheme {
    pub const CURRENT: SecretScheme = SecretScheme::Sha256;

    pub fn as_str(&self) -> &'static str {
        match self {
            SecretScheme::Sha256 => "sha256",
        }
    }

    fn digest(&self, secret: &[u8]) -> Vec<u8> {
        match self {
            SecretScheme::Sha256 => Sha256::digest(secret).to_vec(),
        }
    }
}

impl fmt::Display for SecretScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecretScheme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(SecretScheme::Sha256),
            other => Err(DomainError::UnsupportedSecretScheme(other.to_string())),
        }
    }
}

/// Builds a [`Change`] replacing a client's secret with `secret`.
pub fn change_secret(secret: &[u8]) -> Change {
    let scheme = SecretScheme::CURRENT;
    Change::new()
        .with_secret_hash(hex::encode(scheme.digest(secret)))
        .with_secret_scheme(scheme.as_str())
}

impl Client {
    /// Checks `attempt` against the stored secret hash.
    ///
    /// Errors other than [`DomainError::IncorrectSecret`] and
    /// [`DomainError::UnsupportedSecretScheme`] mean the stored record is corrupt.
    pub fn check_secret(&self, attempt: &str) -> DomainResult<()> {
        let scheme: SecretScheme = self.secret_scheme.parse()?;
        let expected = hex::decode(&self.secret_hash)?;
        let candidate = scheme.digest(attempt.as_bytes());

        if constant_time_eq(&candidate, &expected) {
            Ok(())
        } else {
            Err(DomainError::IncorrectSecret)
        }
    }
}

/// Compares two byte strings without an early exit on the first mismatch.
///
/// Both operands are copied into zero-padded buffers of the same length first,
/// so a length difference costs the same as a content difference.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let len = a.len().max(b.len());
    let mut lhs = vec![0u8; len];
    let mut rhs = vec![0u8; len];
    lhs[..a.len()].copy_from_slice(a);
    rhs[..b.len()].copy_from_slice(b);

    let mut diff = a.len() ^ b.len();
    for (x, y) in lhs.iter().zip(rhs.iter()) {
        diff |= usize::from(x ^ y);
    }
    std::hint::black_box(diff) == 0
}
