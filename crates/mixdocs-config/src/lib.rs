//! Configuration management for the `AproxMixer` documentation site.
//!
//! Loads `mixdocs.toml` from the current directory or its parents, expands
//! environment variables, resolves relative paths against the config file
//! directory and applies command-line overrides.

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::expand::expand_env;

/// Config filename to search for.
pub const CONFIG_FILENAME: &str = "mixdocs.toml";

/// Longest accepted copy confirmation window, in milliseconds.
pub const MAX_CONFIRMATION_MS: u64 = 60_000;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Validation(String),

    #[error("Environment variable error in {field}: {message}")]
    EnvVar { field: String, message: String },
}

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct CliSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub output_dir: Option<PathBuf>,
}

/// Site configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub build: BuildConfig,
    pub copy: CopyConfig,
    /// Path of the loaded config file, if any.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// `[site]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Location the navigation starts from when a request carries none.
    pub initial_location: String,
    /// Overrides the version label shown in the sidebar footer.
    pub version: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            initial_location: "/".to_owned(),
            version: None,
        }
    }
}

/// `[build]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Static build output directory, relative to the config file.
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
        }
    }
}

/// `[copy]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// How long a copy button shows its confirmation.
    pub confirmation_ms: u64,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            confirmation_ms: 2000,
        }
    }
}

impl CopyConfig {
    #[must_use]
    pub fn confirmation_window(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With `config_path` the file must exist. Without it, `mixdocs.toml` is
    /// searched for in the current directory and its parents; if none is
    /// found, defaults relative to the current directory are used.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(path) = Self::discover_config() {
            Self::load_from_file(&path)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;
        Ok(config)
    }

    /// Defaults with paths resolved against `base`.
    #[must_use]
    pub fn default_with_base(base: &Path) -> Self {
        let mut config = Self::default();
        config.resolve_paths(base);
        config
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::default_with_base(&cwd)
    }

    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        cwd.ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or_else(|| Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand_env(&self.server.host, "server.host")?;
        if let Some(version) = &self.site.version {
            self.site.version = Some(expand_env(version, "site.version")?);
        }
        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        if self.build.output_dir.is_relative() {
            self.build.output_dir = base.join(&self.build.output_dir);
        }
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build.output_dir.clone_from(output_dir);
        }
    }

    /// Check values that deserialize fine but cannot be served.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }
        if !self.site.initial_location.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.initial_location must start with '/', got '{}'",
                self.site.initial_location
            )));
        }
        if !(1..=MAX_CONFIRMATION_MS).contains(&self.copy.confirmation_ms) {
            return Err(ConfigError::Validation(format!(
                "copy.confirmation_ms must be between 1 and {MAX_CONFIRMATION_MS}, got {}",
                self.copy.confirmation_ms
            )));
        }
        Ok(())
    }
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}
