//! Application management commands

use std::path::Path;

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::{debug, info};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, NewAppArgs, OutputFormat};
use crate::client::StructureGenerator;
use crate::engine::classify;
use crate::error::{Error, Result, StoreError};
use crate::models::AppDisplay;
use crate::output::formatters::{count_noun, format_local, join_or_dash};
use crate::output::progress::spinner;
use crate::output::{Formattable, json, table};
use crate::schema::{ApplicationStructure, SavedApplication};
use crate::store::AppStore;
use crate::templates::{self, AppTemplate};

/// Run the app list command
pub fn list(opts: &GlobalOptions, limit: Option<usize>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let apps = ctx.store.list()?;
    debug!("Loaded {} apps", apps.len());

    let rows: Vec<AppDisplay> = apps
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(AppDisplay::from)
        .collect();
    rows.print(ctx.format)
}

/// Run the app get command
pub fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let app = ctx.store.get(id)?;

    match ctx.format {
        OutputFormat::Json => json::print_json(&app)?,
        OutputFormat::Table => println!("{}", table::format_details(&detail_rows(&app))),
        OutputFormat::Pretty => print_pretty(&app),
    }
    Ok(())
}

fn detail_rows(app: &SavedApplication) -> Vec<(&'static str, String)> {
    let model_names: Vec<String> = app.structure.models.keys().cloned().collect();
    vec![
        ("ID", app.id.clone()),
        ("Name", app.name.clone()),
        ("Category", app.category.as_str().to_string()),
        ("Template", app.template_id.clone()),
        ("Prompt", app.prompt.clone()),
        ("Pages", join_or_dash(&app.structure.pages)),
        ("Features", join_or_dash(&app.structure.features)),
        ("Models", join_or_dash(&model_names)),
        ("Created", format_local(&app.created_at)),
        ("Updated", format_local(&app.updated_at)),
    ]
}

fn print_pretty(app: &SavedApplication) {
    println!("{} {}", app.name.bold(), format!("({})", app.id).dimmed());
    println!(
        "{} {}   {} {}",
        "Category:".dimmed(),
        app.category.as_str(),
        "Template:".dimmed(),
        app.template_id
    );
    if !app.prompt.is_empty() {
        println!("{} {}", "Prompt:".dimmed(), app.prompt);
    }
    println!(
        "{} {}   {} {}",
        "Created:".dimmed(),
        format_local(&app.created_at),
        "Updated:".dimmed(),
        format_local(&app.updated_at)
    );

    println!("\n{}", "Pages".bold());
    if app.structure.pages.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for page in &app.structure.pages {
        let strategy = classify(page);
        match strategy.model_name() {
            Some(model) if app.structure.model(model).is_some() => {
                println!("  {:<24} {} → {}", page, strategy.to_string().cyan(), model)
            }
            Some(model) => println!(
                "  {:<24} {} → {} {}",
                page,
                strategy.to_string().cyan(),
                model,
                "(no such model)".yellow()
            ),
            None => println!("  {:<24} {}", page, strategy.to_string().cyan()),
        }
    }

    println!("\n{} {}", "Features:".bold(), join_or_dash(&app.structure.features));

    println!("\n{}", "Models".bold());
    if app.structure.models.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for (name, fields) in &app.structure.models {
        println!("  {}", name.green());
        for (field, field_type) in fields {
            println!("    {}: {}", field, field_type.to_string().dimmed());
        }
    }
}

fn find_template(id: &str) -> Result<AppTemplate> {
    templates::find(id).ok_or_else(|| {
        Error::Other(format!(
            "Unknown template: {}. Run `appforge template list` to see templates.",
            id
        ))
    })
}

/// Generate a structure from a description and save it as a new app
pub async fn generate_app<G>(
    store: &AppStore,
    generator: &G,
    name: &str,
    template: &AppTemplate,
    prompt: &str,
    format: OutputFormat,
) -> Result<SavedApplication>
where
    G: StructureGenerator + ?Sized,
{
    let progress = spinner("Generating app structure...", format);
    let generated = generator.generate_structure(prompt).await;
    progress.finish_and_clear();

    let structure = generated?;
    info!(
        "Generated {} and {} for {}",
        count_noun(structure.pages.len(), "page"),
        count_noun(structure.models.len(), "model"),
        name
    );

    Ok(store.create(name, template.category, template.id, prompt, structure)?)
}

/// Save a new app from a template's default structure
pub fn app_from_template(
    store: &AppStore,
    name: &str,
    template: &AppTemplate,
) -> Result<SavedApplication> {
    let structure = template
        .default_structure
        .clone()
        .filter(|s| !s.pages.is_empty())
        .ok_or_else(|| {
            Error::Other(format!(
                "Template {} has no pages. Describe your app with --prompt.",
                template.id
            ))
        })?;

    Ok(store.create(name, template.category, template.id, "", structure)?)
}

/// Run the app new command
pub async fn new(opts: &GlobalOptions, args: &NewAppArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let template = find_template(&args.template)?;

    let app = match args.prompt.as_deref() {
        Some(prompt) => {
            let client = ctx.generator()?;
            generate_app(&ctx.store, &client, &args.name, &template, prompt, ctx.format).await?
        }
        None => app_from_template(&ctx.store, &args.name, &template)?,
    };

    report_created(&app, ctx.format)
}

/// Run the app import command
pub fn import(opts: &GlobalOptions, file: &str, name: &str, template_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let template = find_template(template_id)?;
    let structure = read_structure(Path::new(file))?;

    let app = ctx
        .store
        .create(name, template.category, template.id, "", structure)?;
    report_created(&app, ctx.format)
}

/// Read a structure JSON file
pub fn read_structure(path: &Path) -> Result<ApplicationStructure> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn report_created(app: &SavedApplication, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::print_json(app)?,
        _ => {
            println!(
                "{} Created {} ({})",
                "✓".green(),
                app.name.bold(),
                app.id.cyan()
            );
            println!(
                "  {}, {}",
                count_noun(app.structure.pages.len(), "page"),
                count_noun(app.structure.models.len(), "model")
            );
            println!("\n  {} - Generate files", format!("appforge code {}", app.id).cyan());
        }
    }
    Ok(())
}

/// Run the app delete command
pub fn delete(opts: &GlobalOptions, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let app = ctx.store.get(id)?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete {} ({})?", app.name, app.id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if !ctx.store.delete(id)? {
        return Err(StoreError::NotFound(id.to_string()).into());
    }

    match ctx.format {
        OutputFormat::Json => json::print_json(&serde_json::json!({ "id": id, "deleted": true }))?,
        _ => println!("{} Deleted {}", "✓".green(), app.name.bold()),
    }
    Ok(())
}
