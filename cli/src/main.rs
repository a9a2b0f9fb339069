//! Student management service - CLI server
//!
//! Headless REST API for student records, suitable for deployment as a
//! systemd service, Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/student-service/config.toml)
//! student-service
//!
//! # Custom config path
//! student-service --config /etc/student-service/config.toml
//!
//! # Override port, keep everything in memory
//! student-service --port 9090 --database-url memory
//!
//! # Validate config without starting
//! student-service --check
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info};

use student_management::config::{AppConfig, ConfigError};
use student_management::server::{init_tracing, ServerHandle, ServerOptions};

/// Student management service - CRUD and search over student records.
#[derive(Parser, Debug)]
#[command(
    name = "student-service",
    version,
    about = "REST API for managing student records",
    long_about = "Student management service: REST API with Swagger UI \
                  backed by SQLite (SeaORM) or an in-memory store.\n\n\
                  Default config: ~/.config/student-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "STUDENT_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the database URL (`memory` selects the in-memory store).
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(student_management::default_config_path);

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        let config = check_config(&cli, &config_path)?;
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.api_address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return Ok(());
    }

    // ── Load configuration ─────────────────────────────────────
    let loaded = AppConfig::load(&config_path);

    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // Init tracing first so subsequent logs are formatted properly
    init_tracing(&config);

    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    apply_overrides(&cli, &mut config);
    config.validate()?;

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    // Wait for shutdown signal, then clean up
    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}

/// `--check`: the file must exist and parse; overrides are applied on top and
/// the result validated. Nothing falls back to defaults.
fn check_config(cli: &Cli, path: &Path) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::load_existing(path)?;
    apply_overrides(cli, &mut config);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }
    if let Some(ref url) = cli.database_url {
        info!("CLI override: database.url = {}", url);
        config.database.url = url.clone();
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
        config.logging.level = level.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("student-service").chain(args.iter().copied()))
    }

    #[test]
    fn check_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let result = check_config(&cli(&["--check"]), &path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn check_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(check_config(&cli(&["--check"]), &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn check_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let config = check_config(
            &cli(&["--check", "--port", "9100", "--database-url", "memory"]),
            &path,
        )
        .unwrap();
        assert_eq!(config.server.port, 9100);
        assert!(config.database.is_in_memory());
    }
}
