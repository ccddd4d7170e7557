// tests/support/postgres.rs
use super::conformance::StoreFixture;
use oauth_clients::domain::client::ClientStore;
use oauth_clients::infrastructure::{database, repositories::PostgresClientStore};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgConnection};

/// A freshly migrated database that exists for a single test.
pub struct TestDatabase {
    name: String,
    admin: PgConnectOptions,
    store: PostgresClientStore,
}

impl TestDatabase {
    /// Creates the database, or returns `None` when PostgreSQL tests are not
    /// enabled via `RUN_DB_INTEGRATION=1`.
    pub async fn create() -> Option<Self> {
        if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
            eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
            return None;
        }

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
        let admin: PgConnectOptions = database_url.parse().expect("valid DATABASE_URL");
        let name = format!(
            "clients_test_{}",
            hex::encode(&uuid::Uuid::new_v4().as_bytes()[..8])
        );

        let mut conn = PgConnection::connect_with(&admin)
            .await
            .expect("connect to admin database");
        sqlx::query(&format!(r#"CREATE DATABASE "{name}""#))
            .execute(&mut conn)
            .await
            .expect("create test database");
        conn.close().await.expect("close admin connection");

        let pool = PgPoolOptions::new()
            .max_connections(4)
            .connect_with(admin.clone().database(&name))
            .await
            .expect("connect to test database");
        database::run_migrations(&pool)
            .await
            .expect("run migrations");

        Some(Self {
            name,
            admin,
            store: PostgresClientStore::new(pool),
        })
    }

    pub fn pool(&self) -> &sqlx::PgPool {
        self.store.pool()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a database called `name` exists on the server.
    pub async fn exists(admin: &PgConnectOptions, name: &str) -> bool {
        let mut conn = PgConnection::connect_with(admin)
            .await
            .expect("connect to admin database");
        let found: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
                .bind(name)
                .fetch_one(&mut conn)
                .await
                .expect("query pg_database");
        conn.close().await.ok();
        found
    }

    pub fn admin_options(&self) -> PgConnectOptions {
        self.admin.clone()
    }
}

impl StoreFixture for TestDatabase {
    fn store(&self) -> &dyn ClientStore {
        &self.store
    }

    // Closed pool connections can linger server-side for a moment, so the
    // drop forces them off (PostgreSQL 13+).
    async fn teardown(self) {
        self.store.pool().close().await;
        let mut conn = PgConnection::connect_with(&self.admin)
            .await
            .expect("connect to admin database");
        sqlx::query(&format!(r#"DROP DATABASE IF EXISTS "{}" WITH (FORCE)"#, self.name))
            .execute(&mut conn)
            .await
            .expect("drop test database");
        conn.close().await.ok();
    }
}
