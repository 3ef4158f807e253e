//! Mock structure generator for testing
//!
//! Returns canned structures without making network calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::StructureGenerator;
use crate::error::{ApiError, Result};
use crate::schema::ApplicationStructure;

/// Mock generator for testing.
///
/// # Example
/// ```ignore
/// let mock = MockGenerator::new().with_structure(structure);
/// let generated = mock.generate_structure("A todo app").await?;
/// ```
#[derive(Default)]
pub struct MockGenerator {
    /// Structure returned by generate_structure
    structure: Arc<Mutex<ApplicationStructure>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Descriptions received, in call order
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_structure(mut self, structure: ApplicationStructure) -> Self {
        self.structure = Arc::new(Mutex::new(structure));
        self
    }

    pub fn with_error(self, error: ApiError) -> Self {
        Self {
            error: Arc::new(Mutex::new(Some(error))),
            ..self
        }
    }

    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }

    async fn take_error(&self) -> Option<ApiError> {
        self.error.lock().await.take()
    }
}

#[async_trait]
impl StructureGenerator for MockGenerator {
    async fn generate_structure(&self, description: &str) -> Result<ApplicationStructure> {
        if description.trim().is_empty() {
            return Err(ApiError::EmptyDescription.into());
        }
        self.prompts.lock().await.push(description.to_string());

        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        Ok(self.structure.lock().await.clone())
    }

    async fn verify(&self) -> Result<()> {
        match self.take_error().await {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_returns_structure_and_records_prompt() {
        let mock = MockGenerator::new().with_structure(ApplicationStructure {
            pages: vec!["TodoList".to_string()],
            ..Default::default()
        });

        let structure = mock.generate_structure("A todo app").await.unwrap();
        assert_eq!(structure.pages, vec!["TodoList"]);
        assert_eq!(mock.prompts().await, vec!["A todo app"]);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockGenerator::new().with_error(ApiError::Unauthorized);

        let err = mock.generate_structure("x").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Unauthorized)));
        assert!(mock.generate_structure("x").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_rejects_empty_description() {
        let mock = MockGenerator::new();
        assert!(mock.generate_structure("").await.is_err());
        assert!(mock.prompts().await.is_empty());
    }
}
