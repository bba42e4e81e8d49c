//! # Route Handlers
//!
//! The health-check root and the two generation endpoints. Both generation
//! handlers share `generate_for_task` and differ only in the task they select.

use crate::{
    errors::AppError,
    state::AppState,
    types::{Envelope, GenerateRequest},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use brs::Task;
use tracing::info;

pub async fn root() -> &'static str {
    "BRS backend is running."
}

/// Explains the accounting lessons in the uploaded PDF.
pub async fn lessons_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    generate_for_task(&app_state, Task::Lessons, payload).await
}

/// Solves the accounting exam in the uploaded PDF.
pub async fn exam_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    generate_for_task(&app_state, Task::Exam, payload).await
}

async fn generate_for_task(
    app_state: &AppState,
    task: Task,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    let Json(request) = payload?;
    let document = request.file_base64.as_deref().unwrap_or_default();
    info!(task = %task, document_len = document.len(), "Received generation request");

    let text = app_state.relay.run(task, document).await?;

    Ok(Json(Envelope::success(text)))
}
