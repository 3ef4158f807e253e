//! Keyword-driven content commands
//!
//! Each rule pairs a lower-cased trigger phrase with a delimiter token. The
//! payload is whatever follows the first occurrence of the delimiter in the
//! original-case utterance. Rules are tried in order and the first trigger
//! found wins.

use log::debug;
use serde::Serialize;

use crate::schema::{BusinessContent, ContentField, Service};

pub const HELP_MESSAGE: &str = "I can help you with:\n\
- Changing your business name\n\
- Adding new services\n\
- Updating your business description\n\
- Modifying contact information\n\
Please be specific about what you'd like to change.";

/// Interpreter reply
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_document: Option<BusinessContent>,
}

impl Reply {
    fn help() -> Self {
        Self {
            message: HELP_MESSAGE.to_string(),
            updated_document: None,
        }
    }
}

/// One intent of the command grammar
pub struct Rule {
    pub intent: &'static str,
    /// Matched against the lower-cased utterance
    pub trigger: &'static str,
    /// Split point in the original-case utterance
    pub delimiter: &'static str,
    pub apply: fn(&BusinessContent, &str) -> (BusinessContent, String),
}

impl Rule {
    pub fn matches(&self, lowered: &str) -> bool {
        lowered.contains(self.trigger)
    }

    /// Text after the first delimiter occurrence, trimmed.
    ///
    /// Later occurrences stay in the payload: `add service Customer service
    /// training` adds "Customer service training", not "Customer".
    pub fn payload<'a>(&self, utterance: &'a str) -> Option<&'a str> {
        utterance
            .split_once(self.delimiter)
            .map(|(_, rest)| rest.trim())
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        intent: "rename",
        trigger: "change business name to",
        delimiter: "to",
        apply: rename,
    },
    Rule {
        intent: "add-service",
        trigger: "add service",
        delimiter: "service",
        apply: add_service,
    },
    Rule {
        intent: "describe",
        trigger: "update description",
        delimiter: "description",
        apply: describe,
    },
];

fn rename(current: &BusinessContent, name: &str) -> (BusinessContent, String) {
    (
        current.with_field(ContentField::Name, name),
        format!("I've updated your business name to \"{name}\"."),
    )
}

fn add_service(current: &BusinessContent, title: &str) -> (BusinessContent, String) {
    let mut next = current.clone();
    next.services.get_or_insert_with(Vec::new).push(Service {
        title: title.to_string(),
        description: String::new(),
        price: Some(String::new()),
        features: Some(Vec::new()),
    });
    (
        next,
        format!(
            "I've added a new service \"{title}\". You can now edit its details in the services section."
        ),
    )
}

fn describe(current: &BusinessContent, description: &str) -> (BusinessContent, String) {
    (
        current.with_field(ContentField::Description, description),
        "I've updated your business description.".to_string(),
    )
}

/// Interpret one utterance against the current document.
pub fn interpret(utterance: &str, current: &BusinessContent) -> Reply {
    let lowered = utterance.to_lowercase();

    let Some(rule) = RULES.iter().find(|rule| rule.matches(&lowered)) else {
        debug!("No intent matched");
        return Reply::help();
    };

    let Some(payload) = rule.payload(utterance) else {
        debug!("Intent {} matched without delimiter", rule.intent);
        return Reply::help();
    };

    debug!("Matched intent {}", rule.intent);
    let (document, message) = (rule.apply)(current, payload);
    Reply {
        message,
        updated_document: Some(document),
    }
}
