pub mod gemini;

use crate::errors::GenerateError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for services that generate text from a prompt and an inline document.
///
/// Implementations receive the document exactly as the caller uploaded it,
/// base64-encoded, and return the generated text.
#[async_trait]
pub trait GenerativeContentProvider: Send + Sync + Debug + DynClone {
    /// Generates a response for `prompt` about the base64-encoded PDF `document`.
    async fn generate(&self, prompt: &str, document: &str) -> Result<String, GenerateError>;
}

dyn_clone::clone_trait_object!(GenerativeContentProvider);
