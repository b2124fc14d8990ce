//! PostgreSQL backend for the connectivity probe.
//!
//! Provides the lazy pool factory and leased connections used by `probe`.

pub mod pool;

pub use pool::{PostgresConnection, PostgresPool, PostgresPoolFactory};
