//! Fixed business-site pages
//!
//! Values from the content document are substituted at synthesis time.
//! Optional blocks are emitted only when their backing value is present,
//! and for sequences, non-empty.

use super::jsx_text;
use crate::engine::classify::BusinessPage;
use crate::schema::{BusinessContent, Service};

const FALLBACK_NAME: &str = "Welcome to Our Business";
const FALLBACK_DESCRIPTION: &str = "Your trusted business partner";

pub(super) fn render(ident: &str, page: BusinessPage, content: &BusinessContent) -> String {
    let body = match page {
        BusinessPage::Home => home(content),
        BusinessPage::About => about(content),
        BusinessPage::Services => services(content),
        BusinessPage::Contact => contact(content),
    };

    format!(
        r#"
export default function {ident}() {{
  return (
{body}
  );
}}"#
    )
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

fn home(content: &BusinessContent) -> String {
    let info = &content.business_info;
    let mut out = format!(
        r#"    <div className="space-y-8">
      <div className="text-center py-12 bg-gray-50">
        <h1 className="text-4xl font-bold mb-4 text-black">{name}</h1>
        <p className="text-xl text-black max-w-2xl mx-auto">{description}</p>
      </div>"#,
        name = jsx_text(or_fallback(&info.name, FALLBACK_NAME)),
        description = jsx_text(or_fallback(&info.description, FALLBACK_DESCRIPTION)),
    );

    if !content.services().is_empty() {
        out.push_str(
            r#"
      <div className="py-12">
        <h2 className="text-2xl font-bold mb-6 text-center text-black">Our Services</h2>
        <div className="grid grid-cols-1 md:grid-cols-3 gap-6">"#,
        );
        for service in content.services() {
            out.push_str(&format!(
                r#"
          <div className="bg-white p-6 rounded-lg shadow">
            <h3 className="font-bold mb-2 text-black">{}</h3>
            <p className="text-black">{}</p>
          </div>"#,
                jsx_text(&service.title),
                jsx_text(&service.description),
            ));
        }
        out.push_str("\n        </div>\n      </div>");
    }

    out.push_str("\n    </div>");
    out
}

fn about(content: &BusinessContent) -> String {
    let mut out = String::from(
        r#"    <div className="max-w-4xl mx-auto py-12">
      <h1 className="text-3xl font-bold mb-6 text-black">About Us</h1>"#,
    );

    if let Some(mission) = non_empty(content.business_info.mission.as_ref()) {
        out.push_str(&format!(
            r#"
      <div className="bg-gray-50 p-6 rounded-lg mb-8">
        <h2 className="text-xl font-semibold mb-3 text-black">Our Mission</h2>
        <p className="text-black">{}</p>
      </div>"#,
            jsx_text(mission)
        ));
    }

    out.push_str("\n      <div className=\"prose lg:prose-lg\">");
    for section in content.sections() {
        out.push_str(&format!(
            r#"
        <div className="mb-8">
          <h2 className="text-2xl font-bold mb-4 text-black">{}</h2>
          <p className="text-black">{}</p>
        </div>"#,
            jsx_text(&section.title),
            jsx_text(&section.content),
        ));
    }
    out.push_str("\n      </div>\n    </div>");
    out
}

fn service_card(service: &Service) -> String {
    let mut card = format!(
        r#"
          <div className="bg-white p-6 rounded-lg shadow">
            <h2 className="text-xl font-bold mb-3 text-black">{}</h2>
            <p className="text-black mb-4">{}</p>"#,
        jsx_text(&service.title),
        jsx_text(&service.description),
    );

    if let Some(price) = non_empty(service.price.as_ref()) {
        card.push_str(&format!(
            "\n            <p className=\"text-black font-semibold\">{}</p>",
            jsx_text(price)
        ));
    }

    let features = service.features.as_deref().unwrap_or_default();
    if !features.is_empty() {
        card.push_str("\n            <ul className=\"mt-4 space-y-2\">");
        for feature in features {
            card.push_str(&format!(
                r#"
              <li className="flex items-center text-black">
                <span className="mr-2 text-green-500">✓</span>
                {}
              </li>"#,
                jsx_text(feature)
            ));
        }
        card.push_str("\n            </ul>");
    }

    card.push_str("\n          </div>");
    card
}

fn services(content: &BusinessContent) -> String {
    let cards: String = content.services().iter().map(service_card).collect();

    format!(
        r#"    <div className="max-w-6xl mx-auto py-12">
      <h1 className="text-3xl font-bold mb-8 text-black">Our Services</h1>
      <div className="grid grid-cols-1 md:grid-cols-2 gap-8">{cards}
      </div>
    </div>"#
    )
}

fn contact(content: &BusinessContent) -> String {
    let mut details = String::new();
    let mut hours = String::new();

    if let Some(contact) = content.contact() {
        let lines: String = [
            ("📧", contact.email.as_ref()),
            ("📞", contact.phone.as_ref()),
            ("📍", contact.address.as_ref()),
        ]
        .into_iter()
        .filter_map(|(icon, value)| non_empty(value).map(|v| (icon, v)))
        .map(|(icon, value)| {
            format!(
                r#"
            <p className="flex items-center text-black">
              <span className="mr-2">{icon}</span>
              {}
            </p>"#,
                jsx_text(value)
            )
        })
        .collect();

        details = format!("\n          <div className=\"space-y-4\">{lines}\n          </div>");

        if let Some(entries) = contact.hours.as_deref().filter(|h| !h.is_empty()) {
            let items: String = entries
                .iter()
                .map(|hour| format!("\n            <li className=\"text-black\">{}</li>", jsx_text(hour)))
                .collect();
            hours = format!("\n          <ul className=\"space-y-2\">{items}\n          </ul>");
        }
    }

    format!(
        r#"    <div className="max-w-4xl mx-auto py-12">
      <h1 className="text-3xl font-bold mb-8 text-black">Contact Us</h1>
      <div className="grid grid-cols-1 md:grid-cols-2 gap-8">
        <div>
          <h2 className="text-xl font-semibold mb-4 text-black">Get in Touch</h2>{details}
        </div>
        <div>
          <h2 className="text-xl font-semibold mb-4 text-black">Business Hours</h2>{hours}
        </div>
      </div>
    </div>"#
    )
}
