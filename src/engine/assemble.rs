//! File set assembly
//!
//! Every page of an application is classified and synthesized into a
//! `"<segment>/page"` entry; one shared `"layout"` entry links them all.

use std::fs;
use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use log::debug;

use super::classify::classify;
use super::synth::synthesize;
use crate::error::{Error, Result};
use crate::schema::SavedApplication;

/// Key of the shared navigation layout.
pub const LAYOUT_KEY: &str = "layout";

/// Generated files keyed by relative path, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: IndexMap<String, String>,
}

impl FileSet {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// On-disk location of an entry below `out`.
    ///
    /// The page segment must be a single normal path component, so every
    /// entry lands inside `<out>/app`.
    pub fn disk_path(out: &Path, key: &str) -> Result<PathBuf> {
        let segment = key.strip_suffix("/page").unwrap_or(key);
        let mut components = Path::new(segment).components();
        let single = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        if !single || segment.contains(['/', '\\']) {
            return Err(Error::Other(format!(
                "Cannot write page \"{}\": page names must be a single path segment",
                segment
            )));
        }
        Ok(out.join("app").join(format!("{key}.tsx")))
    }

    /// Write every entry below `out`, creating directories as needed.
    ///
    /// All paths are checked before anything is written. Returns the written
    /// paths in generation order.
    pub fn write_to(&self, out: &Path) -> Result<Vec<PathBuf>> {
        let paths = self
            .files
            .keys()
            .map(|key| Self::disk_path(out, key))
            .collect::<Result<Vec<_>>>()?;
        let mut written = Vec::with_capacity(paths.len());

        for (path, text) in paths.into_iter().zip(self.files.values()) {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, text)?;
            debug!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }

    fn insert(&mut self, key: String, text: String) {
        self.files.insert(key, text);
    }
}

/// Page entry key for a page name.
pub fn page_key(page_name: &str) -> String {
    format!("{}/page", page_name.to_lowercase())
}

/// Build the full file set for an application.
pub fn assemble(app: &SavedApplication) -> FileSet {
    let mut set = FileSet::default();
    let content = app.content.as_ref();

    for page in &app.structure.pages {
        let strategy = classify(page);
        let model = strategy.model_name().and_then(|name| app.structure.model(name));
        debug!("Page {page} classified as {strategy}");

        let component = synthesize(page, &strategy, model, content);
        set.insert(page_key(page), component.render_file());
    }

    set.insert(LAYOUT_KEY.to_string(), layout(&app.structure.pages));
    debug!("Assembled {} files for {}", set.len(), app.id);
    set
}

fn layout(pages: &[String]) -> String {
    let links = pages
        .iter()
        .map(|page| {
            format!(
                r#"<a href="/{}" className="px-3 py-2 rounded-md text-sm font-medium">
                {}
              </a>"#,
                page.to_lowercase(),
                super::synth::jsx_text(page)
            )
        })
        .collect::<Vec<_>>()
        .join("\n              ");

    format!(
        r#"
export default function Layout({{ children }}) {{
  return (
    <div className="min-h-screen bg-gray-50">
      <nav className="bg-white shadow">
        <div className="max-w-7xl mx-auto px-4">
          <div className="flex justify-between h-16">
            <div className="flex">
              {links}
            </div>
          </div>
        </div>
      </nav>
      <main className="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
        {{children}}
      </main>
    </div>
  );
}}"#
    )
}
