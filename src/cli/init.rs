//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Password, Select, theme::ColorfulTheme};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::groq::DEFAULT_MODEL;
use crate::client::{GroqClient, StructureGenerator};
use crate::config::Config;
use crate::error::Result;
use crate::output::progress::spinner;

/// Models offered during setup
const MODELS: [&str; 2] = [DEFAULT_MODEL, "llama3-8b-8192"];

/// Run the init command
///
/// Prompts for a Groq API key and model, checks the key against the API and
/// writes the config file. Existing preferences and host overrides are kept.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();
    let config_path = opts.config_path()?;

    println!("{}", "Welcome to AppForge!".bold().green());
    println!("Let's set up access to the structure generation service.\n");

    let api_key: String = Password::with_theme(&theme)
        .with_prompt("Enter your Groq API key")
        .interact()?;

    let model_idx = Select::with_theme(&theme)
        .with_prompt("Select the generation model")
        .items(&MODELS)
        .default(0)
        .interact()?;
    let model = MODELS[model_idx];

    let mut config = Config::load_or_default(&config_path)?;
    config.api_key = Some(api_key.clone());
    config.model = (model != DEFAULT_MODEL).then(|| model.to_string());

    let client = GroqClient::with_base_url(api_key, &config.api_host())?.with_model(model);
    let progress = spinner("Checking API key...", OutputFormat::Pretty);
    let verified = client.verify().await;
    progress.finish_and_clear();

    match verified {
        Ok(()) => println!("{}", "✓ API key accepted!".green()),
        Err(err) => {
            println!("{} {}", "⚠ Could not verify API key:".yellow(), err);
            let keep = Confirm::with_theme(&theme)
                .with_prompt("Save this key anyway?")
                .default(false)
                .interact()?;
            if !keep {
                println!("Nothing saved.");
                return Ok(());
            }
        }
    }

    config.save_to(&config_path)?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );
    println!("  Model: {}", model.bold());

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show available templates", "appforge template list".cyan());
    println!(
        "  {} - Generate an app",
        "appforge app new --name Todo --prompt \"A todo app\"".cyan()
    );

    Ok(())
}
