use crate::{
    errors::GenerateError,
    prompts::{exam_prompt, lesson_prompt},
    providers::ai::GenerativeContentProvider,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two jobs the relay can perform on an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Explain the accounting lessons contained in the document.
    Lessons,
    /// Solve the accounting exam contained in the document.
    Exam,
}

impl Task {
    /// The fixed prompt template sent upstream for this task.
    pub fn prompt(self) -> &'static str {
        match self {
            Task::Lessons => lesson_prompt(),
            Task::Exam => exam_prompt(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Task::Lessons => "lessons",
            Task::Exam => "exam",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pairs a task's prompt with a document and hands both to the provider.
pub struct RelayClient {
    pub(crate) provider: Box<dyn GenerativeContentProvider>,
}

impl fmt::Debug for RelayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayClient")
            .field("provider", &self.provider)
            .finish()
    }
}

/// A builder for creating `RelayClient` instances.
///
/// # Examples
///
/// ```
/// use brs::RelayClientBuilder;
///
/// // Building without a provider is an error.
/// assert!(RelayClientBuilder::new().build().is_err());
/// ```
#[derive(Default)]
pub struct RelayClientBuilder {
    provider: Option<Box<dyn GenerativeContentProvider>>,
}

impl RelayClientBuilder {
    /// Creates a new `RelayClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the provider that performs the upstream generation.
    pub fn provider(mut self, provider: Box<dyn GenerativeContentProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Builds the `RelayClient`.
    pub fn build(self) -> Result<RelayClient, GenerateError> {
        let provider = self.provider.ok_or(GenerateError::MissingProvider)?;
        Ok(RelayClient { provider })
    }
}
