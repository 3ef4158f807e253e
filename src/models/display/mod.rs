//! Display model implementations for table and JSON output
//!
//! Display models turn domain records into CLI-friendly rows with
//! appropriate column names and serialization.

mod app;
mod page;
mod template;

pub use app::AppDisplay;
pub use page::{FileDisplay, PageDisplay};
pub use template::TemplateDisplay;
