//! Page classification and generated file display models

use serde::Serialize;
use tabled::Tabled;

use crate::engine::Strategy;
use crate::schema::ApplicationStructure;

/// One classified page
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PageDisplay {
    #[tabled(rename = "PAGE")]
    pub page: String,

    #[tabled(rename = "STRATEGY")]
    pub strategy: String,

    /// Model the page renders; `--` when none, `(missing)` suffix when the
    /// structure has no such model
    #[tabled(rename = "MODEL")]
    pub model: String,
}

impl PageDisplay {
    pub fn new(page: &str, strategy: &Strategy, structure: Option<&ApplicationStructure>) -> Self {
        let model = match (strategy.model_name(), structure) {
            (None, _) => "--".to_string(),
            (Some(name), Some(s)) if s.model(name).is_none() => format!("{} (missing)", name),
            (Some(name), _) => name.to_string(),
        };

        Self {
            page: page.to_string(),
            strategy: strategy.label().to_string(),
            model,
        }
    }
}

/// One generated file
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FileDisplay {
    #[tabled(rename = "PATH")]
    pub path: String,

    #[tabled(rename = "LINES")]
    pub lines: usize,

    #[tabled(rename = "BYTES")]
    pub bytes: usize,
}

impl FileDisplay {
    pub fn new(path: &str, text: &str) -> Self {
        Self {
            path: path.to_string(),
            lines: text.lines().count(),
            bytes: text.len(),
        }
    }
}
