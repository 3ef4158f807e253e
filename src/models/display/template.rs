//! Template display model

use serde::Serialize;
use tabled::Tabled;

use crate::output::formatters::join_or_dash;
use crate::templates::AppTemplate;

/// Template display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TemplateDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "PAGES")]
    pub pages: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<AppTemplate> for TemplateDisplay {
    fn from(template: AppTemplate) -> Self {
        let pages = template
            .default_structure
            .as_ref()
            .map(|s| join_or_dash(&s.pages))
            .unwrap_or_else(|| "-".to_string());

        Self {
            id: template.id.to_string(),
            name: template.name.to_string(),
            category: template.category.as_str().to_string(),
            pages,
            description: template.description.to_string(),
        }
    }
}
