//! CLI command implementations
//!
//! `serve` resolves configuration (file, then flag overrides), builds the
//! server around a freshly constructed store and blocks on a tokio runtime.
//! `check-config` performs the same resolution without binding anything.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, Event, Logger};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Flag values that take precedence over the configuration file
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_seed: bool,
}

impl ServeOverrides {
    fn apply(&self, config: &mut HttpServerConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.no_seed {
            config.seed = false;
        }
    }
}

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            host,
            port,
            no_seed,
        } => {
            let overrides = ServeOverrides {
                host,
                port,
                no_seed,
            };
            let config = resolve_config(config.as_deref(), &overrides)?;
            serve(config)
        }
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Load and validate a JSON configuration file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    config.validate().map_err(CliError::config_error)?;

    Ok(config)
}

/// File values (or defaults) with flag overrides applied, then validated
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &ServeOverrides,
) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    overrides.apply(&mut config);
    config.validate().map_err(CliError::config_error)?;

    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    log_event(Event::BootStart);

    let seed = if config.seed { "true" } else { "false" };
    let addr = config.socket_addr();
    Logger::info(
        Event::ConfigLoaded,
        &[("addr", addr.as_str()), ("seed", seed)],
    );

    let server = HttpServer::with_config(config);

    let count = server
        .store()
        .len()
        .map_err(|e| CliError::serve_failed(e.to_string()))?;
    if count > 0 {
        let count = count.to_string();
        Logger::info(Event::CatalogSeeded, &[("books", count.as_str())]);
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start()).map_err(|e| {
        let reason = e.to_string();
        Logger::error(Event::ServerFailed, &[("reason", reason.as_str())]);
        CliError::serve_failed(format!("HTTP server failed: {}", e))
    })
}

/// Validate a configuration file and print it with defaults filled in
pub fn check_config(path: &Path) -> CliResult<()> {
    let config = load_config(path)?;

    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
