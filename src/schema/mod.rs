//! Shared data model
//!
//! Field types, application structures, saved application records and the
//! business content document. Pure data; behaviour lives in `engine`.

mod content;
mod field;
mod structure;

pub use content::{BusinessContent, BusinessInfo, Contact, ContentField, Section, Service};
pub use field::{FieldType, Model};
pub use structure::{AppCategory, ApplicationStructure, SavedApplication};
