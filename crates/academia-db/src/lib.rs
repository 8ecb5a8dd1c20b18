//! # Academia DB
//!
//! Storage for the records an authorization decision reads: user records and
//! parent-to-student links.
//!
//! - [`store`]: The [`RelationshipStore`] trait and [`StoreError`]
//! - [`postgres`]: [`PgStore`], backed by a PostgreSQL pool
//! - `memory`: `InMemoryStore`, for tests and tooling (feature `test-utils`)
//!
//! # Example
//!
//! ```ignore
//! use academia_config::DatabaseConfig;
//! use academia_db::{PgStore, RelationshipStore, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! let store = PgStore::new(pool);
//! let links = store.parent_links_for_user(principal.id).await?;
//! ```

pub mod postgres;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

use academia_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub use postgres::PgStore;
pub use sqlx::PgPool;
pub use store::{RelationshipStore, StoreError, StoreResult};

#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryStore;

/// Initializes a PostgreSQL connection pool from `config`.
///
/// # Errors
///
/// Returns [`StoreError::MissingUrl`] when no `DATABASE_URL` is configured, and
/// [`StoreError::Database`] when the connection fails.
pub async fn init_db_pool(config: &DatabaseConfig) -> StoreResult<PgPool> {
    let url = config.url.as_deref().ok_or(StoreError::MissingUrl)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(url)
        .await?;

    info!(max_connections = config.max_connections, "Database pool ready");
    Ok(pool)
}
