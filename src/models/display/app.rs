//! Saved application display model

use serde::Serialize;
use tabled::Tabled;

use crate::output::formatters::{format_local, truncate};
use crate::schema::SavedApplication;

/// Saved application display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AppDisplay {
    /// Application ID
    #[tabled(rename = "APP ID")]
    pub id: String,

    /// Display name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Application category
    #[tabled(rename = "CATEGORY")]
    pub category: String,

    /// Number of pages
    #[tabled(rename = "PAGES")]
    pub pages: usize,

    /// Originating prompt, shortened
    #[tabled(rename = "PROMPT")]
    pub prompt: String,

    /// Last update, local time
    #[tabled(rename = "UPDATED")]
    pub updated: String,
}

impl From<&SavedApplication> for AppDisplay {
    fn from(app: &SavedApplication) -> Self {
        let prompt = if app.prompt.is_empty() {
            "--".to_string()
        } else {
            truncate(&app.prompt, 40)
        };

        Self {
            id: app.id.clone(),
            name: app.name.clone(),
            category: app.category.as_str().to_string(),
            pages: app.structure.pages.len(),
            prompt,
            updated: format_local(&app.updated_at),
        }
    }
}

impl From<SavedApplication> for AppDisplay {
    fn from(app: SavedApplication) -> Self {
        AppDisplay::from(&app)
    }
}
