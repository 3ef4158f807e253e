//! AppForge - turn app descriptions into page components and keep business
//! site content in shape
//!
//! The binary in `main.rs` is a thin dispatcher over these modules; the
//! synthesis engine in [`engine`] is usable on its own.

pub mod cli;
pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod output;
pub mod schema;
pub mod store;
pub mod templates;
