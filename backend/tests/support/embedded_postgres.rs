//! Embedded PostgreSQL schema helpers.
//!
//! - Database reset uses `postgres` so Diesel transaction semantics do not
//!   interfere with `DROP DATABASE`.
//! - Schema setup runs the embedded Diesel migrations so tests never drift
//!   from `backend/migrations`.

use customer_api::domain::ports::CustomerPersistenceError;
use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

use super::format_postgres_error;

/// Embedded migrations from the backend/migrations directory.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Drop and recreate `name` on the cluster.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), CustomerPersistenceError> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client = Client::connect(&admin_url, NoTls)
        .map_err(|err| CustomerPersistenceError::connection(format_postgres_error(&err)))?;
    // DROP DATABASE cannot share an implicit transaction with CREATE.
    for statement in [
        format!("DROP DATABASE IF EXISTS \"{name}\""),
        format!("CREATE DATABASE \"{name}\""),
    ] {
        client
            .batch_execute(&statement)
            .map_err(|err| CustomerPersistenceError::query(format_postgres_error(&err)))?;
    }
    Ok(())
}

/// Runs all pending Diesel migrations against the test database.
pub fn migrate_schema(url: &str) -> Result<(), CustomerPersistenceError> {
    let mut conn = PgConnection::establish(url)
        .map_err(|err| CustomerPersistenceError::connection(format!("{err:?}")))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| CustomerPersistenceError::query(format!("migration: {err:?}")))?;
    Ok(())
}

/// Drops the `customer` table to simulate schema loss.
pub fn drop_customer_table(url: &str) -> Result<(), CustomerPersistenceError> {
    let mut client = Client::connect(url, NoTls)
        .map_err(|err| CustomerPersistenceError::connection(format_postgres_error(&err)))?;
    client
        .batch_execute("DROP TABLE IF EXISTS customer;")
        .map_err(|err| CustomerPersistenceError::query(format_postgres_error(&err)))?;
    Ok(())
}
