//! Application structure and saved application records

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{BusinessContent, Model};

/// Pages, feature tags and data models describing one application.
///
/// Missing keys deserialize to empty collections so a partial structure
/// degrades instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationStructure {
    /// Page names, in navigation order (duplicates allowed)
    #[serde(default)]
    pub pages: Vec<String>,

    /// Feature tags
    #[serde(default)]
    pub features: Vec<String>,

    /// Model name to field mapping
    #[serde(default)]
    pub models: IndexMap<String, Model>,
}

impl ApplicationStructure {
    /// Look up a model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }
}

/// Application category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppCategory {
    Management,
    Informational,
    TaskBased,
    #[default]
    Custom,
}

impl AppCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppCategory::Management => "management",
            AppCategory::Informational => "informational",
            AppCategory::TaskBased => "task-based",
            AppCategory::Custom => "custom",
        }
    }
}

/// A generated application plus identity and metadata.
///
/// The record is the sole owner of its `content`; editing operations hand
/// back whole replacement documents which the store persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedApplication {
    /// Application ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Category of the template it was created from
    #[serde(default)]
    pub category: AppCategory,

    /// Template ID
    #[serde(default)]
    pub template_id: String,

    /// Prompt the structure was generated from
    #[serde(default)]
    pub prompt: String,

    /// Pages, features and models
    #[serde(flatten)]
    pub structure: ApplicationStructure,

    /// Editable business content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<BusinessContent>,

    /// Creation time
    pub created_at: DateTime<Utc>,

    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl SavedApplication {
    /// Build a new record stamped with the current time.
    ///
    /// Informational apps start with a blank business document so the
    /// content tools have something to edit.
    pub fn new(
        id: String,
        name: &str,
        category: AppCategory,
        template_id: &str,
        prompt: &str,
        structure: ApplicationStructure,
    ) -> Self {
        let now = Utc::now();
        let content = match category {
            AppCategory::Informational => Some(BusinessContent::blank()),
            _ => None,
        };

        Self {
            id,
            name: name.to_string(),
            category,
            template_id: template_id.to_string(),
            prompt: prompt.to_string(),
            structure,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Current content, or a blank document when none has been stored yet.
    pub fn content_or_blank(&self) -> BusinessContent {
        self.content.clone().unwrap_or_else(BusinessContent::blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;

    #[test]
    fn test_structure_missing_keys_default_to_empty() {
        let structure: ApplicationStructure = serde_json::from_str(r#"{"pages":["Home"]}"#).unwrap();

        assert_eq!(structure.pages, vec!["Home"]);
        assert!(structure.features.is_empty());
        assert!(structure.models.is_empty());
    }

    #[test]
    fn test_structure_model_lookup() {
        let structure: ApplicationStructure = serde_json::from_str(
            r#"{"pages":[],"features":[],"models":{"Todo":{"task":"string","completed":"boolean"}}}"#,
        )
        .unwrap();

        let todo = structure.model("Todo").unwrap();
        assert_eq!(todo["completed"], FieldType::Boolean);
        assert!(structure.model("Missing").is_none());
    }

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&AppCategory::TaskBased).unwrap();
        assert_eq!(json, "\"task-based\"");
    }

    #[test]
    fn test_saved_application_flattens_structure() {
        let app = SavedApplication::new(
            "abc".to_string(),
            "Todo",
            AppCategory::TaskBased,
            "task-manager",
            "A todo app",
            ApplicationStructure {
                pages: vec!["TodoList".to_string()],
                ..Default::default()
            },
        );

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["pages"][0], "TodoList");
        assert_eq!(value["templateId"], "task-manager");
        assert!(value.get("content").is_none());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_informational_app_starts_with_blank_content() {
        let app = SavedApplication::new(
            "abc".to_string(),
            "Site",
            AppCategory::Informational,
            "business-info",
            "",
            ApplicationStructure::default(),
        );

        assert_eq!(app.content, Some(BusinessContent::blank()));
    }
}
