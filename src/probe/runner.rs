use std::io::Write;

use super::backend::PoolFactory;
use super::prober::{ConnectionProber, ProbeReport};
use crate::config::DatabaseConfig;
use crate::error::Result;

/// Load the configuration, then probe the database it points at.
///
/// `load_config` runs first; if it fails, `factory` is never touched.
pub async fn run_probe<L, F, W>(load_config: L, factory: F, console: &mut W) -> Result<ProbeReport>
where
    L: FnOnce() -> Result<DatabaseConfig>,
    F: PoolFactory,
    W: Write + Send,
{
    let config = load_config()?;
    tracing::info!(
        user = %config.user,
        host = %config.host,
        port = %config.port,
        dbname = %config.dbname,
        "Database configuration loaded"
    );

    let uri = config.into_uri();
    ConnectionProber::new(factory).probe(uri, console).await
}
