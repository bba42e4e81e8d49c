use crate::{
    constants::PDF_MIME_TYPE, errors::GenerateError, providers::ai::GenerativeContentProvider,
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

// --- Gemini-specific request and response structures ---

#[derive(Serialize, Debug)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Part<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Serialize, Debug)]
struct InlineData<'a> {
    mime_type: &'static str,
    data: &'a str,
}

impl<'a> GeminiRequest<'a> {
    fn new(prompt: &'a str, document: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: PDF_MIME_TYPE,
                            data: document,
                        },
                    },
                ],
            }],
        }
    }
}

#[derive(Deserialize, Debug, Default)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: Option<ContentResponse>,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Option<Vec<PartResponse>>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiResponse {
    /// Joins the text of every part of the first candidate with newlines.
    ///
    /// Parts without text contribute an empty line so that the position of
    /// the remaining fragments is preserved.
    fn into_text(self) -> Result<String, GenerateError> {
        let parts = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .unwrap_or_default();

        if parts.is_empty() {
            return Err(GenerateError::EmptyResponse);
        }

        Ok(parts
            .into_iter()
            .map(|p| p.text.unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

// --- Gemini Provider implementation ---

/// Connection settings for [`GeminiProvider`].
#[derive(Clone, Default)]
pub struct GeminiConfig {
    /// The full `generateContent` URL, without the `key` query parameter.
    pub api_url: String,
    /// The API key. `None` or an empty string is reported on every call.
    pub api_key: Option<String>,
    /// Overall request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A provider for interacting with the Google Gemini API.
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    client: ReqwestClient,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    ///
    /// A missing API key is not an error here; it is reported when
    /// [`GenerativeContentProvider::generate`] is called.
    pub fn new(config: GeminiConfig) -> Result<Self, GenerateError> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(GenerateError::ReqwestClientBuild)?;
        Ok(Self { client, config })
    }

    /// Returns `true` when a non-empty API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

#[async_trait]
impl GenerativeContentProvider for GeminiProvider {
    /// Sends the prompt and the inline PDF to Gemini and returns the joined text parts.
    async fn generate(&self, prompt: &str, document: &str) -> Result<String, GenerateError> {
        let api_key = self.api_key().ok_or(GenerateError::MissingApiKey)?;
        if document.is_empty() {
            return Err(GenerateError::MissingDocument);
        }

        let request_body = GeminiRequest::new(prompt, document);
        debug!(api_url = %self.config.api_url, "--> Sending document to Gemini");

        let response = self
            .client
            .post(&self.config.api_url)
            .query(&[("key", api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(GenerateError::AiRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini API returned an error status");
            return Err(GenerateError::AiApi {
                status: status.as_u16(),
                body,
            });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(GenerateError::AiDeserialization)?;

        let text = gemini_response.into_text()?;
        debug!("<-- Received {} bytes of text from Gemini", text.len());
        Ok(text)
    }
}
