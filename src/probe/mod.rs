//! Connectivity probe.
//!
//! Sequence: build pool, lease one connection, ping, query the server version,
//! release everything. The first failure ends the probe.

mod backend;
mod prober;
mod runner;

pub use backend::{ConnectionPool, PoolFactory, ProbeConnection};
pub use prober::{ConnectionProber, ProbeReport, CONNECTED_MESSAGE};
pub use runner::run_probe;
