//! Classify command

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::engine::classify;
use crate::error::Result;
use crate::models::PageDisplay;
use crate::output::Formattable;

/// Classify page names, optionally checking model lookups against an app
pub fn run(opts: &GlobalOptions, pages: &[String], app_id: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let app = app_id.map(|id| ctx.store.get(id)).transpose()?;
    let structure = app.as_ref().map(|a| &a.structure);

    let rows: Vec<PageDisplay> = pages
        .iter()
        .map(|page| {
            let strategy = classify(page);
            debug!("{} -> {}", page, strategy);
            PageDisplay::new(page, &strategy, structure)
        })
        .collect();

    rows.print(ctx.format)
}
