//! Business content document

use serde::{Deserialize, Serialize};

/// Structured, editable content of a business website.
///
/// Only `business_info.name` and `business_info.description` are always
/// present (possibly empty). Everything else is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContent {
    #[serde(default)]
    pub business_info: BusinessInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

/// Name, description, mission and contact details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

/// Contact details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Opening hours, one line per entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Vec<String>>,
}

/// One offered service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

/// Free-form page section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub order: i64,
}

/// Directly editable business info fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentField {
    Name,
    Description,
    Mission,
    Email,
    Phone,
    Address,
}

impl BusinessContent {
    /// The empty document a new site starts from.
    pub fn blank() -> Self {
        Self {
            business_info: BusinessInfo {
                name: String::new(),
                description: String::new(),
                mission: Some(String::new()),
                contact: Some(Contact::default()),
            },
            services: Some(Vec::new()),
            sections: Some(Vec::new()),
        }
    }

    /// Services, or an empty slice when absent.
    pub fn services(&self) -> &[Service] {
        self.services.as_deref().unwrap_or_default()
    }

    /// Sections, or an empty slice when absent.
    pub fn sections(&self) -> &[Section] {
        self.sections.as_deref().unwrap_or_default()
    }

    /// Contact details if any were recorded.
    pub fn contact(&self) -> Option<&Contact> {
        self.business_info.contact.as_ref()
    }

    /// Return a copy with one business info field replaced.
    pub fn with_field(&self, field: ContentField, value: &str) -> Self {
        let mut next = self.clone();
        let info = &mut next.business_info;
        let value = value.to_string();

        match field {
            ContentField::Name => info.name = value,
            ContentField::Description => info.description = value,
            ContentField::Mission => info.mission = Some(value),
            ContentField::Email => info.contact.get_or_insert_with(Contact::default).email = Some(value),
            ContentField::Phone => info.contact.get_or_insert_with(Contact::default).phone = Some(value),
            ContentField::Address => {
                info.contact.get_or_insert_with(Contact::default).address = Some(value)
            }
        }

        next
    }

    /// Return a copy with the opening hours replaced.
    pub fn with_hours(&self, hours: Vec<String>) -> Self {
        let mut next = self.clone();
        next.business_info
            .contact
            .get_or_insert_with(Contact::default)
            .hours = Some(hours);
        next
    }

    /// Overlay a freshly parsed document on top of this one.
    ///
    /// Top-level keys present in `parsed` win; absent sequences keep the
    /// current value.
    pub fn overlay(&self, parsed: BusinessContent) -> Self {
        Self {
            business_info: parsed.business_info,
            services: parsed.services.or_else(|| self.services.clone()),
            sections: parsed.sections.or_else(|| self.sections.clone()),
        }
    }
}
