//! Field types and data models

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declared type of a model field.
///
/// The generation step is asked for the four scalar kinds only, but real
/// structures carry stringified complex types too (`"string[]"`, `"object"`).
/// Those are kept verbatim in `Other` and rendered as free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Other(String),
}

impl FieldType {
    /// The declared type exactly as written in the structure.
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Other(raw) => raw,
        }
    }
}

impl From<&str> for FieldType {
    fn from(raw: &str) -> Self {
        match raw {
            "string" => FieldType::String,
            "number" => FieldType::Number,
            "boolean" => FieldType::Boolean,
            "date" => FieldType::Date,
            other => FieldType::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(raw: String) -> Self {
        FieldType::from(raw.as_str())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to declared type, in declaration order.
pub type Model = IndexMap<String, FieldType>;
