//! Structure generation client
//!
//! Turns a free-text application description into an initial
//! [`ApplicationStructure`] using a hosted language model.

use async_trait::async_trait;

use crate::error::Result;
use crate::schema::ApplicationStructure;

pub mod groq;
#[cfg(test)]
pub mod mock;

pub use groq::GroqClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockGenerator;

/// Natural-language to structure generation
#[async_trait]
pub trait StructureGenerator: Send + Sync {
    /// Generate pages, features and models for a description.
    ///
    /// Empty or whitespace-only descriptions are rejected before any
    /// network call.
    async fn generate_structure(&self, description: &str) -> Result<ApplicationStructure>;

    /// Check that the service accepts our credentials.
    async fn verify(&self) -> Result<()>;
}
