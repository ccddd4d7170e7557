// src/infrastructure/repositories/error.rs
use crate::domain::errors::{DomainError, RedirectUriConflict};
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::postgres::PgDatabaseError;

pub(crate) const CNT_CLIENTS_PKEY: &str = "clients_pkey";
pub(crate) const CNT_REDIRECT_URIS_PKEY: &str = "redirect_uris_pkey";
pub(crate) const CNT_REDIRECT_URIS_URI: &str = "redirect_uris_unique_uri";

// PostgreSQL's DETAIL line for unique violations, e.g.
// `Key (uri)=(https://a/cb) already exists.`
static KEY_EXISTS_DETAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Key \(([^)]*)\)=\((.*)\) already exists\.$").expect("valid detail regex")
});

pub(crate) fn map_sqlx(err: sqlx::Error) -> DomainError {
    DomainError::persistence(err)
}

/// Maps failures of the client `INSERT`. The primary key is the only unique
/// constraint on `clients`, so no detail parsing is needed.
pub(crate) fn map_create_client(err: sqlx::Error) -> DomainError {
    let duplicate_id = matches!(
        &err,
        sqlx::Error::Database(db_err) if db_err.constraint() == Some(CNT_CLIENTS_PKEY)
    );
    if duplicate_id {
        DomainError::ClientAlreadyExists
    } else {
        map_sqlx(err)
    }
}

/// Maps failures of the redirect URI batch `INSERT`, recovering which field
/// collided from the engine's constraint name and detail message.
pub(crate) fn map_add_redirect_uris(err: sqlx::Error) -> DomainError {
    let violation = match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Some((
            db_err.constraint().map(str::to_owned),
            db_err
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(PgDatabaseError::detail)
                .map(str::to_owned),
        )),
        _ => None,
    };
    let Some((constraint, detail)) = violation else {
        return map_sqlx(err);
    };

    let conflict = match classify_redirect_uri_conflict(constraint.as_deref(), detail.as_deref()) {
        Ok(conflict) => conflict,
        Err(reason) => {
            tracing::error!(
                error = %err,
                constraint = ?constraint,
                detail = ?detail,
                "{reason}"
            );
            RedirectUriConflict::default()
        }
    };
    conflict.with_source(err).into()
}

/// Works out which redirect URI field a unique violation refers to.
///
/// The error side names why the violation could not be attributed; the caller
/// then reports a conflict with neither field set.
pub(crate) fn classify_redirect_uri_conflict(
    constraint: Option<&str>,
    detail: Option<&str>,
) -> Result<RedirectUriConflict, &'static str> {
    let expected_column = match constraint {
        Some(CNT_REDIRECT_URIS_PKEY) => "id",
        Some(CNT_REDIRECT_URIS_URI) => "uri",
        _ => return Err("unexpected constraint for redirect URI conflict"),
    };

    let (column, value) = detail
        .and_then(parse_key_detail)
        .ok_or("redirect URI constraint detail did not match the expected pattern")?;

    if column != expected_column {
        return Err("unexpected column for redirect URI constraint error");
    }

    let value = value.trim();
    Ok(match column {
        "id" => RedirectUriConflict::id(value),
        _ => RedirectUriConflict::uri(value),
    })
}

fn parse_key_detail(detail: &str) -> Option<(&str, &str)> {
    let captures = KEY_EXISTS_DETAIL.captures(detail)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}
