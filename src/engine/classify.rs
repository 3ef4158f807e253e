//! Page name classification
//!
//! A page's lexical form decides which synthesis strategy renders it. Rules
//! are checked in a fixed precedence order and the first match wins:
//!
//! 1. `list` anywhere (any case) selects [`Strategy::List`]
//! 2. exactly `dashboard` (any case) selects [`Strategy::Dashboard`]
//! 3. `create` or `edit` anywhere (any case) selects [`Strategy::CreateEdit`]
//! 4. exactly `home`, `about`, `services` or `contact` (any case) selects a
//!    [`Strategy::Business`] page
//! 5. anything else is [`Strategy::Default`]

use std::fmt;

use serde::Serialize;

/// One of the four fixed business-site pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessPage {
    Home,
    About,
    Services,
    Contact,
}

impl BusinessPage {
    fn from_name(lower: &str) -> Option<Self> {
        match lower {
            "home" => Some(BusinessPage::Home),
            "about" => Some(BusinessPage::About),
            "services" => Some(BusinessPage::Services),
            "contact" => Some(BusinessPage::Contact),
            _ => None,
        }
    }
}

/// Synthesis strategy selected for a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Strategy {
    /// Collection view over the named model
    List { model: String },
    /// Static dashboard placeholder
    Dashboard,
    /// Form creating or editing an instance of the named model
    CreateEdit { model: String },
    /// Fixed business-site page rendered from content
    Business { page: BusinessPage },
    /// Placeholder showing the page name
    Default,
}

impl Strategy {
    /// Short label for tables and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::List { .. } => "list",
            Strategy::Dashboard => "dashboard",
            Strategy::CreateEdit { .. } => "create-edit",
            Strategy::Business { page } => match page {
                BusinessPage::Home => "business:home",
                BusinessPage::About => "business:about",
                BusinessPage::Services => "business:services",
                BusinessPage::Contact => "business:contact",
            },
            Strategy::Default => "default",
        }
    }

    /// Model the strategy renders, if it is model-driven.
    pub fn model_name(&self) -> Option<&str> {
        match self {
            Strategy::List { model } | Strategy::CreateEdit { model } => Some(model),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a page name.
pub fn classify(page_name: &str) -> Strategy {
    let lower = page_name.to_lowercase();

    if lower.contains("list") {
        return Strategy::List {
            model: page_name.replacen("List", "", 1),
        };
    }

    if lower == "dashboard" {
        return Strategy::Dashboard;
    }

    if lower.contains("create") || lower.contains("edit") {
        return Strategy::CreateEdit {
            model: strip_first_form_token(page_name),
        };
    }

    match BusinessPage::from_name(&lower) {
        Some(page) => Strategy::Business { page },
        None => Strategy::Default,
    }
}

/// Remove the leftmost `Create` or `Edit` (case-sensitive) from a page name.
fn strip_first_form_token(page_name: &str) -> String {
    let hit = ["Create", "Edit"]
        .iter()
        .filter_map(|token| page_name.find(token).map(|at| (at, token.len())))
        .min_by_key(|(at, _)| *at);

    match hit {
        Some((at, len)) => format!("{}{}", &page_name[..at], &page_name[at + len..]),
        None => page_name.to_string(),
    }
}
