//! `mixdocs build` command implementation.

use std::path::PathBuf;

use clap::Args;
use mixdocs_config::{CliSettings, Config};
use mixdocs_content::catalog;
use mixdocs_site::{Site, StaticSiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover mixdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Enable verbose output (log every written page).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.out_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let out_dir = &config.build.output_dir;

        output.info(&format!("Output: {}", out_dir.display()));

        let site = Site::new(catalog::registry()?, &config)?;
        let count = StaticSiteBuilder::new(&site).build(out_dir)?;

        output.success(&format!(
            "Built {count} pages to {}",
            out_dir.display()
        ));
        Ok(())
    }
}
