//! Code generation command

use std::path::{Path, PathBuf};

use colored::Colorize;
use log::info;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::engine::{FileSet, assemble};
use crate::error::{Error, Result};
use crate::models::FileDisplay;
use crate::output::formatters::count_noun;
use crate::output::{Formattable, json};

/// Where generated files should go, if anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Print one entry to stdout
    File(String),
    /// Write every entry below a directory
    Dir(PathBuf),
    /// Summarize the file set
    Summary,
}

#[derive(Serialize)]
struct WrittenFile {
    key: String,
    path: String,
}

/// Run the code command
pub fn run(
    opts: &GlobalOptions,
    id: &str,
    file: Option<String>,
    out: Option<String>,
    write: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let app = ctx.store.get(id)?;
    let files = assemble(&app);
    info!("Assembled {} for {}", count_noun(files.len(), "file"), app.id);

    let target = resolve_target(file, out, write, &ctx.config.preferences.output_dir, &app.id);

    match target {
        Target::File(key) => print_file(&files, &key),
        Target::Dir(out) => write_files(&files, &out, ctx.format),
        Target::Summary => summarize(&files, ctx.format),
    }
}

/// Resolve `--out`/`--write` into a target directory below `output_dir`.
pub fn resolve_target(
    file: Option<String>,
    out: Option<String>,
    write: bool,
    output_dir: &Path,
    id: &str,
) -> Target {
    match (file, out) {
        (Some(key), _) => Target::File(key),
        (None, Some(out)) => Target::Dir(PathBuf::from(out)),
        (None, None) if write => Target::Dir(output_dir.join(id)),
        (None, None) => Target::Summary,
    }
}

fn print_file(files: &FileSet, key: &str) -> Result<()> {
    let text = files.get(key).ok_or_else(|| {
        let known: Vec<&str> = files.paths().collect();
        Error::Other(format!(
            "No generated file named {}. Available: {}",
            key,
            known.join(", ")
        ))
    })?;
    print!("{}", text);
    Ok(())
}

fn write_files(files: &FileSet, out: &Path, format: OutputFormat) -> Result<()> {
    let written = files.write_to(out)?;

    if format == OutputFormat::Json {
        let rows: Vec<WrittenFile> = files
            .paths()
            .zip(&written)
            .map(|(key, path)| WrittenFile {
                key: key.to_string(),
                path: path.display().to_string(),
            })
            .collect();
        json::print_json(&rows)?;
        return Ok(());
    }

    for path in &written {
        println!("  {} {}", "+".green(), path.display());
    }
    println!(
        "\n{} Wrote {} to {}",
        "✓".green(),
        count_noun(written.len(), "file"),
        out.display().to_string().cyan()
    );
    Ok(())
}

fn summarize(files: &FileSet, format: OutputFormat) -> Result<()> {
    let rows: Vec<FileDisplay> = files
        .iter()
        .map(|(key, text)| FileDisplay::new(key, text))
        .collect();
    rows.print(format)
}
