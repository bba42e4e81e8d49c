use crate::types::Envelope;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use brs::GenerateError;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// Every variant is rendered as the failure [`Envelope`], so callers always
/// receive `{"ok": false, "error": ...}`. The status is 500 except for bodies
/// that are not valid JSON (400) or exceed the size limit (413).
#[derive(Debug)]
pub enum AppError {
    /// Errors raised while generating text, including missing input.
    Generate(GenerateError),
    /// The request body could not be read as a JSON `GenerateRequest`.
    Rejected(JsonRejection),
}

impl From<GenerateError> for AppError {
    fn from(err: GenerateError) -> Self {
        AppError::Generate(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Generate(err) => {
                error!("GenerateError: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Rejected(rejection) => {
                warn!("Rejected request body: {}", rejection.body_text());
                // Only unparseable or oversized bodies keep the extractor's status.
                let status = match &rejection {
                    JsonRejection::JsonSyntaxError(_) | JsonRejection::BytesRejection(_) => {
                        rejection.status()
                    }
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, rejection.body_text())
            }
        };

        (status_code, Json(Envelope::failure(error_message))).into_response()
    }
}
