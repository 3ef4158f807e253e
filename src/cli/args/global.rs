//! Global CLI options shared across all commands
//!
//! Collects the global flags into a single struct so handlers take one
//! argument instead of several.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::store::AppStore;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are applied in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.appforge/config.yaml)
    pub config: Option<String>,

    /// Custom store database path
    pub store: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            store: cli.store.clone(),
        }
    }

    /// Config file path, explicit or default.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(PathBuf::from(path)),
            None => Config::default_path(),
        }
    }

    /// Store database path, explicit or default.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.store {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(AppStore::default_path()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_paths() {
        let opts = GlobalOptions {
            format: Some(OutputFormat::Json),
            config: Some("/custom/config.yaml".to_string()),
            store: Some("/custom/apps.db".to_string()),
        };

        assert_eq!(opts.config_path().unwrap(), PathBuf::from("/custom/config.yaml"));
        assert_eq!(opts.store_path().unwrap(), PathBuf::from("/custom/apps.db"));
    }

    #[test]
    fn test_default_paths() {
        let opts = GlobalOptions::default();

        if let Ok(path) = opts.config_path() {
            assert!(path.ends_with(".appforge/config.yaml"));
        }
        if let Ok(path) = opts.store_path() {
            assert!(path.ends_with("appforge/apps.db"));
        }
    }
}
