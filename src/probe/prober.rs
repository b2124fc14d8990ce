use std::io::Write;
use std::time::{Duration, Instant};

use super::backend::{ConnectionPool, PoolFactory, ProbeConnection};
use crate::config::ConnectionUri;
use crate::error::{ProbeError, Result};

/// Console line written once the ping succeeds.
pub const CONNECTED_MESSAGE: &str = "Successfully connected to the database!";

/// Outcome of a successful probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub server_version: String,
    pub ping_latency: Duration,
}

/// Opens a pool, leases one connection, pings it and asks for the server version.
pub struct ConnectionProber<F> {
    factory: F,
}

impl<F: PoolFactory> ConnectionProber<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Run the probe against `uri`, writing the confirmation line to `console`.
    ///
    /// Once the pool exists it is closed exactly once, whatever step fails
    /// afterwards. The URI is dropped as soon as the pool has been built.
    pub async fn probe<W>(&self, uri: ConnectionUri, console: &mut W) -> Result<ProbeReport>
    where
        W: Write + Send,
    {
        let pool = self
            .factory
            .create_pool(&uri)
            .map_err(|e| ProbeError::PoolCreation {
                target: uri.redacted().to_string(),
                reason: uri.scrub(&e.to_string()),
            })?;
        tracing::debug!(uri = %uri, "Connection pool created");
        drop(uri);

        let result = probe_pool(&pool, console).await;
        pool.close().await;
        result
    }
}

/// The leased connection is dropped, and so released, before this returns.
async fn probe_pool<P, W>(pool: &P, console: &mut W) -> Result<ProbeReport>
where
    P: ConnectionPool,
    W: Write + Send,
{
    let mut conn = pool.acquire().await.map_err(ProbeError::Acquire)?;

    let started = Instant::now();
    conn.ping().await.map_err(ProbeError::Ping)?;
    let ping_latency = started.elapsed();

    writeln!(console, "{}", CONNECTED_MESSAGE)?;
    console.flush()?;
    tracing::info!(
        ping_ms = ping_latency.as_millis() as u64,
        "Database ping succeeded"
    );

    let server_version = conn.server_version().await.map_err(ProbeError::Query)?;
    tracing::info!("PostgreSQL version: {}", server_version);

    Ok(ProbeReport {
        server_version,
        ping_latency,
    })
}
