//! Command execution context
//!
//! Loads configuration, opens the store and resolves the output format so
//! command handlers don't repeat that boilerplate.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::GroqClient;
use crate::config::Config;
use crate::error::Result;
use crate::store::AppStore;

/// Context for command execution
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Open saved-application store
    pub store: AppStore,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable or invalid, or the
    /// store cannot be opened.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = opts.config_path()?;
        let config = Config::load_or_default(&config_path)?;
        config.validate()?;

        let store_path = opts.store_path()?;
        debug!("Opening store at {}", store_path.display());
        let store = AppStore::open_file(&store_path)?;

        let format = resolve_format(opts.format, &config);

        Ok(Self {
            config,
            store,
            format,
        })
    }

    /// Build a generation client from the configured key, host and model.
    pub fn generator(&self) -> Result<GroqClient> {
        let api_key = self.config.api_key()?;
        let host = self.config.api_host();
        debug!("Using generation host {}", host);

        Ok(GroqClient::with_base_url(api_key, &host)?.with_model(self.config.model()))
    }
}

/// Flag/env value wins, then the config preference, then pretty.
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(|f| f.parse().ok())
    })
    .unwrap_or_default()
}
