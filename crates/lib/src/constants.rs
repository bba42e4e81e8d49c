//! # Shared Constants
//!
//! Values shared between the library and the server crate.

/// The MIME type attached to every inline document sent upstream.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// The Gemini model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";

/// The base URL of the Gemini `generateContent` family of endpoints.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Builds the `generateContent` endpoint for the given model name.
pub fn gemini_endpoint(model: &str) -> String {
    format!("{GEMINI_API_BASE}/{model}:generateContent")
}
