//! Content completeness analysis

use log::debug;
use serde::Serialize;

use crate::schema::{BusinessContent, Section, Service};

pub const COMPLETE_MESSAGE: &str = "Content looks complete. Your site is ready to publish.";
pub const INCOMPLETE_MESSAGE: &str = "Some content needs attention before your site is complete.";

pub const ADD_NAME: &str = "Add a business name";
pub const ADD_DESCRIPTION: &str = "Add a business description";
pub const ADD_MISSION: &str = "Add a mission statement";
pub const ADD_CONTACT: &str = "Add contact information (email or phone)";
pub const ADD_SERVICE: &str = "Add at least one service";

/// Sequences the analyzer carries forward from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

impl PartialContent {
    /// Fold into a full document, keeping its values where this is empty.
    pub fn merge_into(&self, base: &BusinessContent) -> BusinessContent {
        BusinessContent {
            business_info: base.business_info.clone(),
            services: self.services.clone().or_else(|| base.services.clone()),
            sections: self.sections.clone().or_else(|| base.sections.clone()),
        }
    }
}

/// Analyzer verdict
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub message: String,
    pub recommendations: Vec<String>,
    pub normalized_content: PartialContent,
}

impl Analysis {
    pub fn is_complete(&self) -> bool {
        self.recommendations.is_empty()
    }
}

fn filled(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Check a document for missing content.
///
/// Every check runs; recommendations keep a fixed order.
pub fn analyze(content: &BusinessContent) -> Analysis {
    let info = &content.business_info;
    let contact = content.contact();

    let checks = [
        (!info.name.is_empty(), ADD_NAME),
        (!info.description.is_empty(), ADD_DESCRIPTION),
        (filled(info.mission.as_ref()), ADD_MISSION),
        (
            contact.is_some_and(|c| filled(c.email.as_ref()) || filled(c.phone.as_ref())),
            ADD_CONTACT,
        ),
        (!content.services().is_empty(), ADD_SERVICE),
    ];

    let recommendations: Vec<String> = checks
        .iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, text)| text.to_string())
        .collect();

    let normalized_content = PartialContent {
        services: Some(content.services())
            .filter(|s| !s.is_empty())
            .map(<[Service]>::to_vec),
        sections: Some(content.sections())
            .filter(|s| !s.is_empty())
            .map(<[Section]>::to_vec),
    };

    debug!("Content analysis: {} recommendation(s)", recommendations.len());

    let message = if recommendations.is_empty() {
        COMPLETE_MESSAGE
    } else {
        INCOMPLETE_MESSAGE
    };

    Analysis {
        message: message.to_string(),
        recommendations,
        normalized_content,
    }
}
