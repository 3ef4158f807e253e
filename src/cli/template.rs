//! Template commands

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::TemplateDisplay;
use crate::output::{Formattable, json};
use crate::templates;

/// Run the template list command
///
/// JSON output carries each template's full default structure.
pub fn list(format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        json::print_json(&templates::all())?;
        return Ok(());
    }

    let rows: Vec<TemplateDisplay> = templates::all().into_iter().map(Into::into).collect();
    rows.print(format)
}
