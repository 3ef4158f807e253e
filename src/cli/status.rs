//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::{API_HOST_ENV, API_KEY_ENV, Config};
use crate::error::Result;
use crate::store::AppStore;

/// Run the status command to display configuration and store status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "AppForge Status".bold());

    let config_path = opts.config_path()?;
    let config = match Config::load_from(&config_path) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!(
                "  → Run {} to create a configuration file.",
                "appforge init".cyan()
            );
            Config::default()
        }
    };

    println!();

    if std::env::var(API_KEY_ENV).is_ok_and(|v| !v.trim().is_empty()) {
        println!("{} API key set via {}", "✓".green(), API_KEY_ENV);
    } else if config.api_key.is_some() {
        println!("{} API key configured", "✓".green());
    } else {
        println!("{} API key not configured", "✗".red());
        println!("  → Run 'appforge init' or set {}", API_KEY_ENV);
    }

    println!("{} Model: {}", "○".dimmed(), config.model());

    if config.api_host.is_some() || std::env::var(API_HOST_ENV).is_ok() {
        println!("{} Custom API host: {}", "○".dimmed(), config.api_host().cyan());
    }

    println!(
        "{} Output directory: {}",
        "○".dimmed(),
        config.preferences.output_dir.display()
    );

    let store_path = opts.store_path()?;
    if store_path.exists() {
        let count = AppStore::open_file(&store_path)?.count()?;
        println!(
            "{} App store: {} ({} saved)",
            "✓".green(),
            store_path.display().to_string().cyan(),
            count
        );
    } else {
        println!(
            "{} App store: {} (not created yet)",
            "○".dimmed(),
            store_path.display()
        );
    }

    println!();
    Ok(())
}
