//! Configuration management for AppForge

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::groq::{API_BASE_URL, DEFAULT_MODEL};
use crate::error::{ConfigError, Result};

/// Environment variable overriding the configured API key
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable overriding the configured API host
pub const API_HOST_ENV: &str = "APPFORGE_API_HOST";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Groq API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API base URL override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Generation model override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Directory generated files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            output_dir: default_output_dir(),
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".appforge").join("config.yaml"))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load_from(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// API key, preferring the environment over the file
    pub fn api_key(&self) -> Result<String> {
        self.resolve_api_key(env_value(API_KEY_ENV))
    }

    fn resolve_api_key(&self, from_env: Option<String>) -> Result<String> {
        from_env
            .or_else(|| self.api_key.clone().filter(|k| !k.is_empty()))
            .ok_or_else(|| ConfigError::MissingApiKey.into())
    }

    /// API base URL, preferring the environment over the file
    pub fn api_host(&self) -> String {
        self.resolve_api_host(env_value(API_HOST_ENV))
    }

    fn resolve_api_host(&self, from_env: Option<String>) -> String {
        from_env
            .or_else(|| self.api_host.clone())
            .unwrap_or_else(|| API_BASE_URL.to_string())
    }

    /// Generation model
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Check a loaded file for values that cannot work
    pub fn validate(&self) -> Result<()> {
        if let Some(host) = &self.api_host {
            if !(host.starts_with("http://") || host.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "api_host must be an http(s) URL: {}",
                    host
                ))
                .into());
            }
        }
        if let Some(format) = &self.preferences.format {
            if !["pretty", "table", "json"].contains(&format.as_str()) {
                return Err(
                    ConfigError::Invalid(format!("Unknown output format: {}", format)).into(),
                );
            }
        }
        Ok(())
    }
}
