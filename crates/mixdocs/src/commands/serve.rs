//! `mixdocs serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use mixdocs_config::{CliSettings, Config};
use mixdocs_content::catalog;
use mixdocs_server::run_server;
use mixdocs_site::Site;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover mixdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "MIXDOCS_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "MIXDOCS_PORT")]
    port: Option<u16>,

    /// Enable verbose output (request and navigation logs).
    #[arg(short, long)]
    pub verbose: bool,
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
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }

        let site = Site::new(catalog::registry()?, &config)?;

        output.info(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "{} pages, version {}",
            site.registry().pages().len(),
            site.info().version
        ));

        run_server(site, &config.server).await?;

        Ok(())
    }
}
