//! Print facility configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Configuration for the command-backed print host and spool surface
#[derive(Debug, Clone, Deserialize)]
pub struct PrintConfig {
    /// Print command to run over spooled artifacts
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments passed before the artifact paths
    #[serde(default)]
    pub args: Vec<String>,

    /// Seconds before a running print command is abandoned
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Directory print artifacts are spooled to
    #[serde(default = "default_spool_dir")]
    pub spool_dir: PathBuf,
}

impl PrintConfig {
    /// Validate print configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.command.trim().is_empty() {
            return Err(ValidationError::MissingRequired("print.command"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidPrintTimeout);
        }
        if self.spool_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("print.spool_dir"));
        }
        Ok(())
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
            timeout_secs: default_timeout(),
            spool_dir: default_spool_dir(),
        }
    }
}

fn default_command() -> String {
    "lp".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_spool_dir() -> PathBuf {
    std::env::temp_dir().join("gawd-doc-print")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_config_defaults() {
        let config = PrintConfig::default();
        assert_eq!(config.command, "lp");
        assert_eq!(config.timeout_secs, 60);
        assert!(config.spool_dir.ends_with("gawd-doc-print"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = PrintConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPrintTimeout));

        config.timeout_secs = 601;
        assert_eq!(config.validate(), Err(ValidationError::InvalidPrintTimeout));

        config.timeout_secs = 600;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_command_rejected() {
        let config = PrintConfig {
            command: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("print.command"))
        );
    }

    #[test]
    fn test_empty_spool_dir_rejected() {
        let config = PrintConfig {
            spool_dir: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("print.spool_dir"))
        );
    }
}
