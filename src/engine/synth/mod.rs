//! Page component synthesis
//!
//! Turns a classified page into the literal source of a React page
//! component. Model-driven strategies read field names and declared types
//! from the page's model; business pages bake values from the content
//! document into static markup.

mod business;

use crate::engine::classify::Strategy;
use crate::schema::{BusinessContent, FieldType, Model};

/// Hooks every page declares, whether or not the body uses both.
pub const BASE_IMPORTS: [&str; 2] = ["useState", "useEffect"];

/// Synthesized page component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Runtime symbols imported from `react`, in declaration order
    pub imports: Vec<&'static str>,

    /// Component source: a single default-exported function
    pub source: String,
}

impl Component {
    fn new(source: String) -> Self {
        Self {
            imports: BASE_IMPORTS.to_vec(),
            source,
        }
    }

    /// Full file text: client directive, import line, component.
    pub fn render_file(&self) -> String {
        format!(
            "'use client';\nimport {{ {} }} from 'react';\n{}",
            self.imports.join(", "),
            self.source
        )
    }
}

/// Synthesize the component for one page.
///
/// A missing model renders as an empty field set; missing content renders
/// the business pages from a blank document.
pub fn synthesize(
    page_name: &str,
    strategy: &Strategy,
    model: Option<&Model>,
    content: Option<&BusinessContent>,
) -> Component {
    let ident = component_ident(page_name);

    let source = match strategy {
        Strategy::List { model: model_name } => list_page(&ident, model_name, model),
        Strategy::Dashboard => dashboard_page(),
        Strategy::CreateEdit { model: model_name } => form_page(&ident, page_name, model_name, model),
        Strategy::Business { page } => {
            let blank;
            let content = match content {
                Some(content) => content,
                None => {
                    blank = BusinessContent::blank();
                    &blank
                }
            };
            business::render(&ident, *page, content)
        }
        Strategy::Default => default_page(&ident, page_name),
    };

    Component::new(source)
}

/// REST collection path shared by list fetches and form submissions.
pub fn collection_path(model_name: &str) -> String {
    format!("/api/{}s", model_name.to_lowercase())
}

/// JavaScript zero value used to initialise a form field.
///
/// Only `string`, `date` and `number` get scalar zeros. Every other declared
/// type, `boolean` included, starts as an empty array.
pub fn zero_value(field_type: &FieldType) -> &'static str {
    match field_type {
        FieldType::String | FieldType::Date => "\"\"",
        FieldType::Number => "0",
        _ => "[]",
    }
}

/// HTML input kind for a field.
pub fn input_kind(field_type: &FieldType) -> &'static str {
    match field_type {
        FieldType::Number => "number",
        _ => "text",
    }
}

/// Component identifier derived from a page name.
fn component_ident(page_name: &str) -> String {
    let ident: String = page_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .collect();

    match ident.chars().next() {
        Some(first) if !first.is_ascii_digit() => ident,
        _ => format!("Page{ident}"),
    }
}

/// Escape text placed between JSX tags.
pub(crate) fn jsx_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
    out
}

fn fields(model: Option<&Model>) -> impl Iterator<Item = (&String, &FieldType)> {
    model.into_iter().flat_map(|m| m.iter())
}

fn list_page(ident: &str, model_name: &str, model: Option<&Model>) -> String {
    let field_lines = fields(model)
        .map(|(field, _)| format!("<div><strong>{field}:</strong> {{item.{field}}}</div>"))
        .collect::<Vec<_>>()
        .join("\n              ");

    format!(
        r#"
export default function {ident}() {{
  const [items, setItems] = useState([]);
  const [loading, setLoading] = useState(true);

  useEffect(() => {{
    const fetchData = async () => {{
      try {{
        const response = await fetch('{path}');
        const data = await response.json();
        setItems(data);
      }} catch (error) {{
        console.error('Failed to fetch:', error);
      }} finally {{
        setLoading(false);
      }}
    }};

    fetchData();
  }}, []);

  return (
    <div className="p-6">
      <h1 className="text-2xl font-bold mb-4">{title} List</h1>

      {{loading ? (
        <div>Loading...</div>
      ) : (
        <div className="grid gap-4">
          {{items.map((item) => (
            <div key={{item.id}} className="border p-4 rounded-lg">
              {field_lines}
            </div>
          ))}}
        </div>
      )}}
    </div>
  );
}}"#,
        path = collection_path(model_name),
        title = jsx_text(model_name),
    )
}

fn dashboard_page() -> String {
    r#"
export default function Dashboard() {
  return (
    <div className="p-6">
      <h1 className="text-2xl font-bold mb-6">Dashboard</h1>
      <div className="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
        {/* Add dashboard widgets here */}
        <div className="bg-white p-6 rounded-lg shadow">
          <h2 className="text-lg font-semibold mb-2">Overview</h2>
          <p className="text-gray-600">Add dashboard content here</p>
        </div>
      </div>
    </div>
  );
}"#
    .to_string()
}

fn form_page(ident: &str, page_name: &str, model_name: &str, model: Option<&Model>) -> String {
    let initializers = fields(model)
        .map(|(field, field_type)| format!("{field}: {}", zero_value(field_type)))
        .collect::<Vec<_>>()
        .join(",\n    ");

    let inputs: String = fields(model)
        .map(|(field, field_type)| {
            let parsed = match field_type {
                FieldType::Number => "Number(e.target.value)",
                _ => "e.target.value",
            };
            format!(
                r#"
      <div className="mb-4">
        <label className="block text-sm font-medium mb-1">{label}</label>
        <input
          type="{kind}"
          value={{formData.{field}}}
          onChange={{(e) => setFormData(prev => ({{
            ...prev,
            {field}: {parsed}
          }}))}}
          className="w-full p-2 border rounded"
        />
      </div>"#,
                label = jsx_text(field),
                kind = input_kind(field_type),
            )
        })
        .collect();

    format!(
        r#"
export default function {ident}() {{
  const [formData, setFormData] = useState({{
    {initializers}
  }});

  const handleSubmit = async (e) => {{
    e.preventDefault();
    try {{
      const response = await fetch('{path}', {{
        method: 'POST',
        headers: {{ 'Content-Type': 'application/json' }},
        body: JSON.stringify(formData)
      }});
      if (response.ok) {{
        // Handle success
      }}
    }} catch (error) {{
      console.error('Failed to submit:', error);
    }}
  }};

  return (
    <form onSubmit={{handleSubmit}} className="max-w-2xl mx-auto p-6">
      <h1 className="text-2xl font-bold mb-6">{title}</h1>
      {inputs}

      <button
        type="submit"
        className="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700"
      >
        Save
      </button>
    </form>
  );
}}"#,
        path = collection_path(model_name),
        title = jsx_text(page_name),
    )
}

fn default_page(ident: &str, page_name: &str) -> String {
    let title = jsx_text(page_name);
    format!(
        r#"
export default function {ident}() {{
  return (
    <div className="p-6">
      <h1 className="text-2xl font-bold mb-4">{title}</h1>
      <div className="bg-white rounded-lg shadow p-6">
        <p>Add content for {title} here</p>
      </div>
    </div>
  );
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::classify::classify;

    fn todo_model() -> Model {
        let mut model = Model::new();
        model.insert("task".to_string(), FieldType::String);
        model.insert("completed".to_string(), FieldType::Boolean);
        model
    }

    #[test]
    fn test_every_strategy_declares_base_imports() {
        for page in ["TodoList", "Dashboard", "CreateTodo", "Home", "Profile"] {
            let component = synthesize(page, &classify(page), None, None);
            assert_eq!(component.imports, vec!["useState", "useEffect"], "{page}");
        }
    }

    #[test]
    fn test_list_fetches_collection_and_renders_fields_in_order() {
        let model = todo_model();
        let component = synthesize("TodoList", &classify("TodoList"), Some(&model), None);
        let src = &component.source;

        assert!(src.contains("export default function TodoList()"));
        assert!(src.contains("fetch('/api/todos')"));
        assert!(src.contains("const [loading, setLoading] = useState(true);"));

        let task = src.find("<strong>task:</strong> {item.task}").unwrap();
        let completed = src.find("<strong>completed:</strong> {item.completed}").unwrap();
        assert!(task < completed);
    }

    #[test]
    fn test_list_without_model_renders_no_fields() {
        let component = synthesize("OrderList", &classify("OrderList"), None, None);
        assert!(component.source.contains("fetch('/api/orders')"));
        assert!(!component.source.contains("<strong>"));
    }

    #[test]
    fn test_dashboard_has_no_network_calls() {
        let component = synthesize("Dashboard", &classify("Dashboard"), None, None);
        assert!(!component.source.contains("fetch("));
        assert!(component.source.contains("Overview"));
    }

    #[test]
    fn test_form_boolean_defaults_to_empty_array() {
        let mut model = Model::new();
        model.insert("active".to_string(), FieldType::Boolean);

        let component = synthesize("CreateUser", &classify("CreateUser"), Some(&model), None);
        assert!(component.source.contains("active: []"));
        assert!(!component.source.contains("active: false"));
    }

    #[test]
    fn test_form_zero_values_and_input_kinds() {
        let mut model = Model::new();
        model.insert("title".to_string(), FieldType::String);
        model.insert("hours".to_string(), FieldType::Number);
        model.insert("date".to_string(), FieldType::Date);
        model.insert("skills".to_string(), FieldType::Other("string[]".to_string()));

        let component = synthesize(
            "VolunteerEdit",
            &classify("VolunteerEdit"),
            Some(&model),
            None,
        );
        let src = &component.source;

        assert!(src.contains("title: \"\",\n    hours: 0,\n    date: \"\",\n    skills: []"));
        assert!(src.contains("fetch('/api/volunteers', {"));
        assert!(src.contains("method: 'POST'"));
        assert_eq!(src.matches("type=\"number\"").count(), 1);
        assert_eq!(src.matches("type=\"text\"").count(), 3);
        assert!(src.contains("hours: Number(e.target.value)"));
    }

    #[test]
    fn test_default_page_shows_literal_name() {
        let component = synthesize("Profile", &Strategy::Default, None, None);
        assert!(component.source.contains("<h1 className=\"text-2xl font-bold mb-4\">Profile</h1>"));
        assert!(component.source.contains("Add content for Profile here"));
    }

    #[test]
    fn test_component_ident_sanitizes_page_name() {
        assert_eq!(component_ident("Event Calendar"), "EventCalendar");
        assert_eq!(component_ident("404"), "Page404");
        assert_eq!(component_ident("--"), "Page");
    }

    #[test]
    fn test_default_page_keeps_spaces_in_body() {
        let component = synthesize("Event Calendar", &Strategy::Default, None, None);
        assert!(component.source.contains("export default function EventCalendar()"));
        assert!(component.source.contains("Add content for Event Calendar here"));
    }

    #[test]
    fn test_render_file_prepends_directive_and_imports() {
        let component = synthesize("Profile", &Strategy::Default, None, None);
        let file = component.render_file();

        assert!(file.starts_with("'use client';\nimport { useState, useEffect } from 'react';\n"));
        assert!(file.ends_with(&component.source));
    }

    #[test]
    fn test_jsx_text_escapes_markup() {
        assert_eq!(jsx_text("a {b} <c> & d"), "a &#123;b&#125; &lt;c&gt; &amp; d");
    }
}
