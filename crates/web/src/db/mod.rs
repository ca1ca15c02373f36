//! Database operations for the Stockroom SQLite store.
//!
//! ## Tables
//!
//! - `products` - Inventory items (name, category, price, quantity)
//! - `buyers` - Buyer contacts, `email` is `UNIQUE`
//!
//! # Schema
//!
//! There is no migration tooling. [`create_schema`] runs
//! `CREATE TABLE IF NOT EXISTS` for both tables on every startup.
//!
//! # Connection
//!
//! The application holds a single long-lived connection. The pool is capped at
//! one connection that never idles out, so it is opened once at startup and
//! released by [`sqlx::Pool::close`] at shutdown. This also keeps
//! `sqlite::memory:` databases alive for the lifetime of the pool.

pub mod buyers;
pub mod products;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use thiserror::Error;

pub use buyers::BuyerRepository;
pub use products::ProductRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Map a write error, turning unique-constraint violations into
    /// [`RepositoryError::Conflict`] with the given message.
    pub(crate) fn from_write(err: sqlx::Error, conflict_message: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict_message.to_owned());
        }
        Self::Database(err)
    }
}

const CREATE_PRODUCTS: &str = r"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        price REAL NOT NULL,
        quantity INTEGER NOT NULL,
        description TEXT
    )
";

const CREATE_BUYERS: &str = r"
    CREATE TABLE IF NOT EXISTS buyers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        phone TEXT NOT NULL,
        address TEXT
    )
";

/// Open the single-connection SQLite pool.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Create the `products` and `buyers` tables if they do not exist.
///
/// # Errors
///
/// Returns `sqlx::Error` if either statement fails.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS).execute(pool).await?;
    sqlx::query(CREATE_BUYERS).execute(pool).await?;
    Ok(())
}

/// Open a fresh in-memory store with the schema applied.
///
/// Used by tests across the workspace.
///
/// # Errors
///
/// Returns `sqlx::Error` if the store cannot be opened or initialized.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = create_pool(&secrecy::SecretString::from("sqlite::memory:")).await?;
    create_schema(&pool).await?;
    Ok(pool)
}
