//! Groq chat-completions client

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use indexmap::IndexMap;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::StructureGenerator;
use crate::error::{ApiError, Result};
use crate::schema::{ApplicationStructure, FieldType, Model};

/// Groq OpenAI-compatible API base URL
pub const API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default generation model
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Rate limit: 30 requests per minute
const RATE_LIMIT_PER_MINUTE: u32 = 30;

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 1000;

const SYSTEM_PROMPT: &str = r#"
You are an expert app architect. Extract the following from user descriptions:
1. pages: Array of page names (e.g., ["Login", "Dashboard"])
2. features: Array of features (e.g., ["Authentication", "CRUD"])
3. models: Object with data models and their fields (e.g., { User: { email: "string" } })

Rules:
- Always return valid JSON
- Field types must be: "string", "number", "boolean", or "date"
- Never add explanations or markdown
- If unclear about a field, default to "string"

Example output for "A todo app":
{
  "pages": ["Login", "TodoList"],
  "features": ["Authentication", "Task Management"],
  "models": {
    "Todo": {
      "task": "string",
      "completed": "boolean"
    }
  }
}
"#;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Groq API client
pub struct GroqClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    model: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl GroqClient {
    /// Create a new client against the public Groq endpoint
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(api_key: String, base_url: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_minute(NonZeroU32::new(RATE_LIMIT_PER_MINUTE).unwrap_or(NonZeroU32::MIN));

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// Use a different generation model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a chat completion and return the first choice's text
    async fn complete(&self, request: &ChatRequest<'_>) -> Result<String> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}/chat/completions", self.base_url);
        debug!("POST {} (model {})", url, request.model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let body = response.json::<ChatResponse>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                body.choices
                    .into_iter()
                    .next()
                    .and_then(|c| c.message.content)
                    .filter(|text| !text.is_empty())
                    .ok_or_else(|| ApiError::InvalidResponse("Empty response from AI".to_string()).into())
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl StructureGenerator for GroqClient {
    async fn generate_structure(&self, description: &str) -> Result<ApplicationStructure> {
        if description.trim().is_empty() {
            return Err(ApiError::EmptyDescription.into());
        }

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: description,
                },
            ],
            response_format: Some(ResponseFormat {
                kind: "json_object",
            }),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let text = self.complete(&request).await?;
        parse_structure(&text)
    }

    async fn verify(&self) -> Result<()> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: "Say 'hello'",
            }],
            response_format: None,
            temperature: TEMPERATURE,
            max_tokens: 16,
        };

        self.complete(&request).await.map(|_| ())
    }
}

/// Parse a model reply into a structure.
///
/// The three keys must be present. Values of the wrong shape degrade to
/// empty collections; non-string field types are kept verbatim.
pub fn parse_structure(text: &str) -> Result<ApplicationStructure> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| ApiError::InvalidResponse(format!("Reply is not JSON: {}", e)))?;

    let present = |key: &str| value.get(key).is_some_and(|v| !v.is_null());
    if !(present("pages") && present("features") && present("models")) {
        return Err(
            ApiError::InvalidResponse("Invalid response structure from AI".to_string()).into(),
        );
    }

    let strings = |key: &str| -> Vec<String> {
        value[key]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    };

    let mut models = IndexMap::new();
    if let Some(object) = value["models"].as_object() {
        for (name, fields) in object {
            let Some(fields) = fields.as_object() else {
                debug!("Skipping model {} with non-object fields", name);
                continue;
            };
            let model: Model = fields
                .iter()
                .map(|(field, ty)| {
                    let field_type = match ty.as_str() {
                        Some(raw) => FieldType::from(raw),
                        None => FieldType::Other(ty.to_string()),
                    };
                    (field.clone(), field_type)
                })
                .collect();
            models.insert(name.clone(), model);
        }
    }

    Ok(ApplicationStructure {
        pages: strings("pages"),
        features: strings("features"),
        models,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_client_creation() {
        let client = GroqClient::new("test_key".to_string()).unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);

        let client = client.with_model("llama3-8b-8192");
        assert_eq!(client.model(), "llama3-8b-8192");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = GroqClient::with_base_url("k".to_string(), "http://localhost:1234/").unwrap();
        assert_eq!(client.base_url, "http://localhost:1234");
    }

    #[tokio::test]
    async fn test_empty_description_rejected() {
        let client = GroqClient::with_base_url("k".to_string(), "http://127.0.0.1:9").unwrap();
        let err = client.generate_structure("   ").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::EmptyDescription)));
    }

    #[test]
    fn test_parse_structure_keeps_model_field_order() {
        let structure = parse_structure(
            r#"{"pages":["Login","TodoList"],"features":["Auth"],
                "models":{"Todo":{"task":"string","completed":"boolean","due":"date"}}}"#,
        )
        .unwrap();

        assert_eq!(structure.pages, vec!["Login", "TodoList"]);
        let fields: Vec<_> = structure.models["Todo"].keys().cloned().collect();
        assert_eq!(fields, vec!["task", "completed", "due"]);
    }

    #[test]
    fn test_parse_structure_requires_keys() {
        let err = parse_structure(r#"{"pages":[],"features":[]}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid response structure"));
    }

    #[test]
    fn test_parse_structure_degrades_wrong_shapes() {
        let structure =
            parse_structure(r#"{"pages":"Home","features":[1,"Chat"],"models":[]}"#).unwrap();

        assert!(structure.pages.is_empty());
        assert_eq!(structure.features, vec!["Chat"]);
        assert!(structure.models.is_empty());
    }

    #[test]
    fn test_parse_structure_non_string_field_type() {
        let structure =
            parse_structure(r#"{"pages":[],"features":[],"models":{"A":{"tags":["x"]}}}"#).unwrap();
        assert_eq!(
            structure.models["A"]["tags"],
            FieldType::Other("[\"x\"]".to_string())
        );
    }

    #[test]
    fn test_parse_structure_rejects_non_json() {
        assert!(parse_structure("Sure! Here is your app").is_err());
    }

    #[tokio::test]
    async fn test_generate_structure_against_server() {
        let mut server = mockito::Server::new_async().await;
        let content = r#"{"pages":["NoteList"],"features":[],"models":{"Note":{"title":"string"}}}"#;
        let body = serde_json::json!({ "choices": [{ "message": { "content": content } }] });
        let _m = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer gsk_test")
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = GroqClient::with_base_url("gsk_test".to_string(), &server.url()).unwrap();
        let structure = client.generate_structure("A notes app").await.unwrap();

        assert_eq!(structure.pages, vec!["NoteList"]);
        assert_eq!(structure.models["Note"]["title"], FieldType::String);
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let mut server = mockito::Server::new_async().await;
        let client = GroqClient::with_base_url("k".to_string(), &server.url()).unwrap();

        let unauthorized = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .create_async()
            .await;
        let err = client.generate_structure("A shop").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Unauthorized)));
        unauthorized.remove_async().await;

        let _limited = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_header("retry-after", "7")
            .create_async()
            .await;
        let err = client.generate_structure("A shop").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Api(ApiError::RateLimit(d)) if d == Duration::from_secs(7)
        ));
    }
}
