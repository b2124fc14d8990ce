use std::process::ExitCode;

use db_connectivity_probe::config::DatabaseConfig;
use db_connectivity_probe::postgres::PostgresPoolFactory;
use db_connectivity_probe::probe::run_probe;
use db_connectivity_probe::telemetry::init_telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = init_telemetry() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let mut stdout = std::io::stdout();
    match run_probe(DatabaseConfig::load, PostgresPoolFactory::default(), &mut stdout).await {
        Ok(report) => {
            tracing::debug!(
                ping_ms = report.ping_latency.as_millis() as u64,
                "Database probe complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(stage = e.stage(), "{}", e);
            ExitCode::FAILURE
        }
    }
}
