use thiserror::Error;

/// Errors raised while relaying a document and prompt to the generative model.
///
/// The `Display` text of every variant is what callers of the HTTP API see in
/// the `error` field of the failure envelope.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("GEMINI_API_KEY is not configured on the server.")]
    MissingApiKey,
    #[error("No PDF file was sent.")]
    MissingDocument,
    #[error("No generative content provider was configured.")]
    MissingProvider,
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to Gemini API: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize Gemini API response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("Gemini API error: {status} - {body}")]
    AiApi { status: u16, body: String },
    #[error("No text was received from the model.")]
    EmptyResponse,
}
