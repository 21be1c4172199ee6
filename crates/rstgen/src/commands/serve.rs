//! `rstgen serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use rstgen_config::{CliSettings, Config};
use rstgen_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover rstgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "RSTGEN_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "RSTGEN_PORT")]
    port: Option<u16>,

    /// File name offered for the generated document download (overrides config).
    #[arg(long)]
    filename: Option<String>,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            filename: self.filename,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!("Export filename: {}", config.export.filename));

        run_server(server_config_from_config(&config))
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
