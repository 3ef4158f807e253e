//! Built-in application templates

use serde::Serialize;

use crate::schema::{AppCategory, ApplicationStructure, FieldType, Model};

/// Starting point for a new application
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: AppCategory,
    pub description: &'static str,
    pub sample_prompt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_structure: Option<ApplicationStructure>,
}

type ModelDef = (&'static str, &'static [(&'static str, &'static str)]);

struct TemplateDef {
    id: &'static str,
    name: &'static str,
    category: AppCategory,
    description: &'static str,
    sample_prompt: &'static str,
    pages: &'static [&'static str],
    features: &'static [&'static str],
    models: &'static [ModelDef],
}

const CATALOGUE: &[TemplateDef] = &[
    TemplateDef {
        id: "volunteer-mgmt",
        name: "Volunteer Manager",
        category: AppCategory::Management,
        description: "Track volunteers, events, and participation",
        sample_prompt: "A volunteer portal with signup, profiles, and event tracking",
        pages: &["VolunteerList", "EventCalendar", "Profile", "Dashboard"],
        features: &["Registration", "HourTracking", "EventSignup", "Reporting"],
        models: &[
            (
                "Volunteer",
                &[
                    ("name", "string"),
                    ("email", "string"),
                    ("hours", "number"),
                    ("skills", "string[]"),
                ],
            ),
            (
                "Event",
                &[
                    ("title", "string"),
                    ("date", "date"),
                    ("location", "string"),
                    ("requiredVolunteers", "number"),
                ],
            ),
        ],
    },
    TemplateDef {
        id: "customer-mgmt",
        name: "Customer Manager",
        category: AppCategory::Management,
        description: "Manage customer information and interactions",
        sample_prompt: "A customer relationship manager with profiles and interaction history",
        pages: &["CustomerList", "CustomerProfile", "Interactions", "Dashboard"],
        features: &["CustomerTracking", "InteractionHistory", "Notes", "Reporting"],
        models: &[(
            "Customer",
            &[
                ("name", "string"),
                ("email", "string"),
                ("phone", "string"),
                ("lastContact", "date"),
            ],
        )],
    },
    TemplateDef {
        id: "business-info",
        name: "Business Website",
        category: AppCategory::Informational,
        description: "Create a professional business website with content management",
        sample_prompt: "A business website with about page, services, and contact information.",
        pages: &["Home", "About", "Services", "Contact"],
        features: &["ContentManagement", "ContactForm"],
        models: &[
            (
                "BusinessInfo",
                &[
                    ("name", "string"),
                    ("description", "string"),
                    ("mission", "string"),
                    ("contact", "object"),
                ],
            ),
            (
                "Service",
                &[
                    ("title", "string"),
                    ("description", "string"),
                    ("price", "string"),
                    ("features", "string[]"),
                ],
            ),
            (
                "Content",
                &[
                    ("section", "string"),
                    ("title", "string"),
                    ("body", "string"),
                    ("order", "number"),
                ],
            ),
        ],
    },
    TemplateDef {
        id: "task-manager",
        name: "Task Manager",
        category: AppCategory::TaskBased,
        description: "Organize and track tasks and projects",
        sample_prompt: "A todo list with categories and due dates",
        pages: &["TaskList", "Calendar", "Categories"],
        features: &["TaskCreation", "Categories", "DueDates", "Priority"],
        models: &[(
            "Task",
            &[
                ("title", "string"),
                ("description", "string"),
                ("dueDate", "date"),
                ("status", "string"),
                ("priority", "string"),
            ],
        )],
    },
    TemplateDef {
        id: "custom",
        name: "Custom Application",
        category: AppCategory::Custom,
        description: "Create a completely custom application",
        sample_prompt: "Describe your application requirements...",
        pages: &[],
        features: &[],
        models: &[],
    },
];

impl TemplateDef {
    fn build(&self) -> AppTemplate {
        let structure = ApplicationStructure {
            pages: self.pages.iter().map(|p| p.to_string()).collect(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            models: self
                .models
                .iter()
                .map(|(name, fields)| {
                    let model: Model = fields
                        .iter()
                        .map(|(field, ty)| (field.to_string(), FieldType::from(*ty)))
                        .collect();
                    (name.to_string(), model)
                })
                .collect(),
        };

        AppTemplate {
            id: self.id,
            name: self.name,
            category: self.category,
            description: self.description,
            sample_prompt: self.sample_prompt,
            default_structure: Some(structure),
        }
    }
}

/// All built-in templates, in catalogue order.
pub fn all() -> Vec<AppTemplate> {
    CATALOGUE.iter().map(TemplateDef::build).collect()
}

/// Look up a template by id.
pub fn find(id: &str) -> Option<AppTemplate> {
    CATALOGUE.iter().find(|def| def.id == id).map(TemplateDef::build)
}
