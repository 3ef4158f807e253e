//! AppForge CLI

use clap::{CommandFactory, Parser};
use log::LevelFilter;

use appforge::cli::args::GlobalOptions;
use appforge::cli::{self, AppCommands, Cli, Commands, ContentCommands, TemplateCommands};
use appforge::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Warnings only unless `--debug`; `RUST_LOG` overrides both.
fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("appforge version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Template(template_cmd) => match template_cmd {
            TemplateCommands::List => cli::template::list(opts.format.unwrap_or_default()),
        },
        Commands::Classify { pages, app } => cli::classify::run(&opts, &pages, app.as_deref()),
        Commands::App(app_cmd) => match app_cmd {
            AppCommands::List { limit } => cli::app::list(&opts, limit),
            AppCommands::Get { id } => cli::app::get(&opts, &id),
            AppCommands::New(args) => cli::app::new(&opts, &args).await,
            AppCommands::Import {
                file,
                name,
                template,
            } => cli::app::import(&opts, &file, &name, &template),
            AppCommands::Delete { id, yes } => cli::app::delete(&opts, &id, yes),
        },
        Commands::Code {
            id,
            file,
            out,
            write,
        } => cli::code::run(&opts, &id, file, out, write),
        Commands::Content(content_cmd) => match content_cmd {
            ContentCommands::Show { id } => cli::content::show(&opts, &id),
            ContentCommands::Analyze { id } => cli::content::analyze_cmd(&opts, &id),
            ContentCommands::Chat { id, message } => {
                cli::content::chat(&opts, &id, message.as_deref())
            }
            ContentCommands::Set(args) => cli::content::set(&opts, &args),
            ContentCommands::Import { id, file } => cli::content::import(&opts, &id, &file),
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "appforge", &mut std::io::stdout());
            Ok(())
        }
    }
}
