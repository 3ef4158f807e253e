//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod app;
pub mod args;
pub mod classify;
pub mod code;
pub mod content;
pub mod context;
pub mod init;
pub mod status;
pub mod template;

pub use args::OutputFormat;
pub use context::CommandContext;

/// AppForge - turn app descriptions into page components and keep business
/// site content in shape
#[derive(Parser, Debug)]
#[command(name = "appforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "APPFORGE_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "APPFORGE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override app store database location
    #[arg(long, global = true, env = "APPFORGE_STORE", hide_env = true)]
    pub store: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "APPFORGE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize AppForge configuration
    Init,

    /// Show configuration and store status
    Status,

    /// Display version information
    Version,

    /// Browse application templates
    #[command(subcommand)]
    Template(TemplateCommands),

    /// Show which generation strategy each page name selects
    Classify {
        /// Page names to classify
        #[arg(required = true)]
        pages: Vec<String>,

        /// Check model lookups against a saved app
        #[arg(long)]
        app: Option<String>,
    },

    /// Manage saved applications
    #[command(subcommand)]
    App(AppCommands),

    /// Generate page and layout source files for an app
    Code {
        /// Application ID
        id: String,

        /// Print a single generated file (e.g. `todolist/page`, `layout`)
        #[arg(long)]
        file: Option<String>,

        /// Write all files below this directory
        #[arg(long)]
        out: Option<String>,

        /// Write to the configured output directory
        #[arg(long, conflicts_with = "out")]
        write: bool,
    },

    /// View and edit business site content
    #[command(subcommand)]
    Content(ContentCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   appforge completion bash > /etc/bash_completion.d/appforge
  zsh:    appforge completion zsh > \"${fpath[1]}/_appforge\"
  fish:   appforge completion fish > ~/.config/fish/completions/appforge.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Template subcommands
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List built-in templates
    List,
}

/// Application management subcommands
#[derive(Subcommand, Debug)]
pub enum AppCommands {
    /// List saved applications
    List {
        /// Maximum number of results to show
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show one application's pages, features and models
    Get {
        /// Application ID
        id: String,
    },

    /// Create an application from a description or a template
    New(NewAppArgs),

    /// Create an application from a structure JSON file
    Import {
        /// Path to a JSON file with pages, features and models
        file: String,

        /// Application name
        #[arg(long)]
        name: String,

        /// Template the app belongs to
        #[arg(long, default_value = "custom")]
        template: String,
    },

    /// Delete an application
    Delete {
        /// Application ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Arguments for `app new`
#[derive(Args, Debug, Clone)]
pub struct NewAppArgs {
    /// Application name
    #[arg(long)]
    pub name: String,

    /// Template to start from
    #[arg(long, short = 't', default_value = "custom")]
    pub template: String,

    /// Description sent to the generation model
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,
}

/// Content subcommands
#[derive(Subcommand, Debug)]
pub enum ContentCommands {
    /// Show an app's business content
    Show {
        /// Application ID
        id: String,
    },

    /// Check content for missing pieces
    Analyze {
        /// Application ID
        id: String,
    },

    /// Edit content with short instructions
    Chat {
        /// Application ID
        id: String,

        /// Instruction; omit to start an interactive session
        message: Option<String>,
    },

    /// Set content fields directly
    Set(SetContentArgs),

    /// Replace content from a JSON document
    Import {
        /// Application ID
        id: String,

        /// Path to a business content JSON file
        file: String,
    },
}

/// Arguments for `content set`
#[derive(Args, Debug, Clone)]
pub struct SetContentArgs {
    /// Application ID
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub mission: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Opening hours line; repeat for several
    #[arg(long = "hours")]
    pub hours: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_anywhere() {
        let cli = Cli::try_parse_from(["appforge", "app", "list", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::App(AppCommands::List { limit: None })
        ));
    }

    #[test]
    fn test_classify_requires_pages() {
        assert!(Cli::try_parse_from(["appforge", "classify"]).is_err());
    }

    #[test]
    fn test_content_set_repeated_hours() {
        let cli = Cli::try_parse_from([
            "appforge", "content", "set", "abc", "--hours", "Mon 9-5", "--hours", "Tue 9-5",
        ])
        .unwrap();

        match cli.command {
            Commands::Content(ContentCommands::Set(args)) => {
                assert_eq!(args.id, "abc");
                assert_eq!(args.hours, vec!["Mon 9-5", "Tue 9-5"]);
            }
            _ => panic!("Expected content set"),
        }
    }

    #[test]
    fn test_code_out_conflicts_with_write() {
        assert!(Cli::try_parse_from(["appforge", "code", "abc", "--out", "x", "--write"]).is_err());
    }
}
