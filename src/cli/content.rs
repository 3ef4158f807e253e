//! Business content commands

use std::path::Path;

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, SetContentArgs};
use crate::engine::{Analysis, Reply, analyze, interpret};
use crate::error::{Error, Result};
use crate::output::{json, table};
use crate::schema::{BusinessContent, ContentField, SavedApplication};
use crate::store::AppStore;

/// Words that end an interactive chat session
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Run the content show command
pub fn show(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let content = ctx.store.get(id)?.content_or_blank();

    match ctx.format {
        OutputFormat::Json => json::print_json(&content)?,
        OutputFormat::Table => println!("{}", table::format_details(&content_rows(&content))),
        OutputFormat::Pretty => print_pretty(&content),
    }
    Ok(())
}

fn or_dash(value: Option<&String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => "-".to_string(),
    }
}

fn content_rows(content: &BusinessContent) -> Vec<(&'static str, String)> {
    let info = &content.business_info;
    let contact = content.contact();
    let services: Vec<String> = content.services().iter().map(|s| s.title.clone()).collect();
    let sections: Vec<String> = content.sections().iter().map(|s| s.title.clone()).collect();

    vec![
        ("Name", or_dash(Some(&info.name))),
        ("Description", or_dash(Some(&info.description))),
        ("Mission", or_dash(info.mission.as_ref())),
        ("Email", or_dash(contact.and_then(|c| c.email.as_ref()))),
        ("Phone", or_dash(contact.and_then(|c| c.phone.as_ref()))),
        ("Address", or_dash(contact.and_then(|c| c.address.as_ref()))),
        (
            "Hours",
            or_dash(
                contact
                    .and_then(|c| c.hours.as_ref())
                    .map(|h| h.join("; "))
                    .as_ref(),
            ),
        ),
        ("Services", or_dash(Some(&services.join(", ")))),
        ("Sections", or_dash(Some(&sections.join(", ")))),
    ]
}

fn print_pretty(content: &BusinessContent) {
    let rows = content_rows(content);
    for (label, value) in &rows[..7] {
        println!("{:<12} {}", format!("{}:", label).dimmed(), value);
    }

    println!("\n{}", "Services".bold());
    if content.services().is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for service in content.services() {
        match service.price.as_deref() {
            Some(price) if !price.is_empty() => {
                println!("  {} {}", service.title.green(), price.dimmed())
            }
            _ => println!("  {}", service.title.green()),
        }
        if !service.description.is_empty() {
            println!("    {}", service.description);
        }
    }

    if !content.sections().is_empty() {
        println!("\n{}", "Sections".bold());
        let mut sections = content.sections().to_vec();
        sections.sort_by_key(|s| s.order);
        for section in sections {
            println!("  {}. {}", section.order, section.title.green());
        }
    }
}

/// Run the content analyze command
pub fn analyze_cmd(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let content = ctx.store.get(id)?.content_or_blank();
    print_analysis(&analyze(&content), ctx.format)
}

fn print_analysis(analysis: &Analysis, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        json::print_json(analysis)?;
        return Ok(());
    }

    if analysis.is_complete() {
        println!("{} {}", "✓".green(), analysis.message);
    } else {
        println!("{} {}", "⚠".yellow(), analysis.message);
        for recommendation in &analysis.recommendations {
            println!("  → {}", recommendation);
        }
    }
    Ok(())
}

/// Interpret one utterance and persist any resulting document.
pub fn apply_utterance(store: &AppStore, id: &str, utterance: &str) -> Result<Reply> {
    let current = store.get(id)?.content_or_blank();
    let reply = interpret(utterance, &current);

    if let Some(document) = &reply.updated_document {
        store.update(id, |app| app.content = Some(document.clone()))?;
        debug!("Saved content for {}", id);
    }
    Ok(reply)
}

/// Run the content chat command
pub fn chat(opts: &GlobalOptions, id: &str, message: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let app = ctx.store.get(id)?;

    if let Some(message) = message {
        let reply = apply_utterance(&ctx.store, &app.id, message)?;
        return print_reply(&reply, ctx.format);
    }

    println!(
        "Editing content for {}. Type {} to finish.\n",
        app.name.bold(),
        "exit".cyan()
    );
    let theme = ColorfulTheme::default();
    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();

        if line.is_empty() || EXIT_WORDS.contains(&line.to_lowercase().as_str()) {
            break;
        }

        let reply = apply_utterance(&ctx.store, &app.id, line)?;
        print_reply(&reply, ctx.format)?;
        println!();
    }
    Ok(())
}

fn print_reply(reply: &Reply, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::print_json(reply)?,
        _ if reply.updated_document.is_some() => println!("{} {}", "✓".green(), reply.message),
        _ => println!("{}", reply.message),
    }
    Ok(())
}

/// Apply the fields given on the command line, or `None` when there are none.
pub fn apply_fields(current: &BusinessContent, args: &SetContentArgs) -> Option<BusinessContent> {
    let fields = [
        (ContentField::Name, &args.name),
        (ContentField::Description, &args.description),
        (ContentField::Mission, &args.mission),
        (ContentField::Email, &args.email),
        (ContentField::Phone, &args.phone),
        (ContentField::Address, &args.address),
    ];

    let mut changed = false;
    let mut next = current.clone();
    for (field, value) in fields {
        if let Some(value) = value {
            next = next.with_field(field, value);
            changed = true;
        }
    }
    if !args.hours.is_empty() {
        next = next.with_hours(args.hours.clone());
        changed = true;
    }

    changed.then_some(next)
}

/// Run the content set command
pub fn set(opts: &GlobalOptions, args: &SetContentArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let current = ctx.store.get(&args.id)?.content_or_blank();

    let next = apply_fields(&current, args).ok_or_else(|| {
        Error::Other("Nothing to set. Pass at least one field, e.g. --name.".to_string())
    })?;
    let app = ctx.store.update(&args.id, |app| app.content = Some(next))?;

    match ctx.format {
        OutputFormat::Json => json::print_json(&app.content_or_blank())?,
        _ => println!("{} Updated content for {}", "✓".green(), app.name.bold()),
    }
    Ok(())
}

/// Overlay a parsed document, normalize it through the analyzer and persist.
pub fn import_content(
    store: &AppStore,
    id: &str,
    parsed: BusinessContent,
) -> Result<(SavedApplication, Analysis)> {
    let current = store.get(id)?.content_or_blank();
    let overlaid = current.overlay(parsed);
    let analysis = analyze(&overlaid);
    let merged = analysis.normalized_content.merge_into(&overlaid);

    let app = store.update(id, |app| app.content = Some(merged))?;
    Ok((app, analysis))
}

/// Run the content import command
pub fn import(opts: &GlobalOptions, id: &str, file: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let contents = std::fs::read_to_string(Path::new(file))?;
    let parsed: BusinessContent = serde_json::from_str(&contents)?;

    let (app, analysis) = import_content(&ctx.store, id, parsed)?;
    if ctx.format != OutputFormat::Json {
        println!("{} Imported content for {}", "✓".green(), app.name.bold());
    }
    print_analysis(&analysis, ctx.format)
}
