//! # BRS Accounting Relay
//!
//! This crate relays an uploaded PDF, together with one of two fixed accounting
//! prompts, to a generative model and returns the text it produces. The model
//! is reached through the [`GenerativeContentProvider`] trait, with
//! [`GeminiProvider`] as the production implementation.

pub mod constants;
pub mod errors;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::GenerateError;
pub use providers::ai::{
    gemini::{GeminiConfig, GeminiProvider},
    GenerativeContentProvider,
};
pub use types::{RelayClient, RelayClientBuilder, Task};

use tracing::{debug, info};

impl RelayClient {
    /// Runs `task` against the base64-encoded PDF `document`.
    ///
    /// The task's prompt template and the document are forwarded unchanged to
    /// the configured provider. Validation of the credential and of the
    /// document happens in the provider, before any network call.
    pub async fn run(&self, task: Task, document: &str) -> Result<String, GenerateError> {
        info!(
            task = %task,
            document_len = document.len(),
            "[run] relaying document to provider"
        );

        let text = self.provider.generate(task.prompt(), document).await?;

        debug!(task = %task, text_len = text.len(), "[run] provider returned text");
        Ok(text)
    }
}
