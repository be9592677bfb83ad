//! CLI command implementations
//!
//! `serve` boots in strict order: configuration, then storage (connect and
//! prepare the schema, aborting the process on failure), and only then the
//! listening socket. The database is never reachable-but-unbacked: if the
//! pool cannot be established, no socket is ever bound.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::tickets::TicketRepository;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { config } => serve(config.as_deref()),
        Command::Init { config } => init(config.as_deref()),
    }
}

/// Start the HTTP service.
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let repo = connect_storage(&config).await?;

        let server = HttpServer::new(config, repo);
        server.start().await?;
        Ok(())
    })
}

/// Create the database file and ticket table, then exit.
pub fn init(config_path: Option<&Path>) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        connect_storage(&config).await?;
        tracing::info!(url = %config.database_url, "database initialized");
        Ok(())
    })
}

/// Connect the pool and prepare the schema. Errors out of here abort the
/// process before any socket is bound.
async fn connect_storage(config: &ServiceConfig) -> CliResult<TicketRepository> {
    let repo = TicketRepository::connect(&config.database_url, config.max_connections).await?;
    repo.ensure_schema().await?;
    tracing::info!(url = %config.database_url, "storage ready");
    Ok(repo)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("repairdesk=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_config(dir: &Path, database_url: &str) -> PathBuf {
        let config_path = dir.join("repairdesk.json");
        std::fs::write(
            &config_path,
            format!(r#"{{"database_url": "{database_url}"}}"#),
        )
        .unwrap();
        config_path
    }

    // One test covers both startup paths so the DATABASE_URL override can be
    // cleared without racing a parallel test.
    #[test]
    fn test_startup_is_storage_first() {
        std::env::remove_var("DATABASE_URL");
        let dir = tempfile::tempdir().unwrap();

        // An unusable database aborts serve before any socket is bound.
        let bad = write_config(dir.path(), "sqlite:///proc/no-such-dir/tickets.db");
        assert!(serve(Some(bad.as_path())).is_err());

        // init creates the database file and table, then returns.
        let db_path = dir.path().join("tickets.db");
        let good = write_config(dir.path(), &format!("sqlite://{}", db_path.display()));
        init(Some(good.as_path())).unwrap();
        assert!(db_path.exists());
    }
}
