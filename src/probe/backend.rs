//! Backend traits for the connection probe.
//!
//! The prober only talks to these traits, so the PostgreSQL implementation in
//! `infrastructure::postgres` can be swapped for a test double.

use async_trait::async_trait;

use crate::config::ConnectionUri;

/// Builds a connection pool from a connection URI.
///
/// Pool construction must not perform network I/O; connection errors surface
/// on [`ConnectionPool::acquire`].
pub trait PoolFactory: Send + Sync {
    type Pool: ConnectionPool;

    fn create_pool(&self, uri: &ConnectionUri) -> Result<Self::Pool, sqlx::Error>;
}

/// A pool of reusable connections.
#[async_trait]
pub trait ConnectionPool: Send + Sync {
    type Connection: ProbeConnection;

    /// Lease one connection. Dropping it returns it to the pool.
    async fn acquire(&self) -> Result<Self::Connection, sqlx::Error>;

    /// Close the pool, waiting for leased connections to be returned.
    async fn close(&self);
}

/// A connection leased from a [`ConnectionPool`].
#[async_trait]
pub trait ProbeConnection: Send {
    /// Lightweight round-trip to confirm the server is responsive.
    async fn ping(&mut self) -> Result<(), sqlx::Error>;

    /// Server version string as reported by `SELECT version()`.
    async fn server_version(&mut self) -> Result<String, sqlx::Error>;
}
