//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GAWD_DOC_` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working config.
//!
//! # Example
//!
//! ```no_run
//! use gawd_doc::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Spooling print artifacts to {}", config.print.spool_dir.display());
//! ```

mod error;
mod export;
mod logging;
mod print;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use print::PrintConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Export pipeline settings (placeholder text, extra heading exclusions)
    #[serde(default)]
    pub export: ExportConfig,

    /// Print facility settings (command, timeout, spool directory)
    #[serde(default)]
    pub print: PrintConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GAWD_DOC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Splits list values on commas
    ///
    /// # Environment Variable Format
    ///
    /// - `GAWD_DOC__PRINT__COMMAND=lpr` -> `print.command = "lpr"`
    /// - `GAWD_DOC__PRINT__ARGS=-P,office` -> `print.args = ["-P", "office"]`
    /// - `GAWD_DOC__EXPORT__EMPTY_PLACEHOLDER=(blank)` -> `export.empty_placeholder`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GAWD_DOC")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("print.args")
                    .with_list_parse_key("export.extra_excluded_headings")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.export.validate()?;
        self.print.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
