//! # Server Endpoint Tests
//!
//! Integration tests for the health-check route, routing, CORS, and the
//! handling of request bodies that never reach the provider.

mod common;

use anyhow::Result;
use brs_server::types::Envelope;
use common::{read_envelope, TestApp, GEMINI_PATH};
use httpmock::Method;

#[tokio::test]
async fn test_root_endpoint() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;

    // Act
    let response = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request to /");

    // Assert
    assert!(response.status().is_success());
    assert_eq!("BRS backend is running.", response.text().await?);
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_not_found() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .post(format!("{}/api/unknown", app.address))
        .json(&serde_json::json!({ "fileBase64": "JVBERi0=" }))
        .send()
        .await?;

    assert_eq!(404, response.status().as_u16());
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_returns_failure_envelope() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;
    let upstream = app
        .mock_server
        .mock_async(|when, then| {
            when.method(Method::POST).path(GEMINI_PATH);
            then.status(200);
        })
        .await;
    // This JSON is syntactically invalid (missing closing brace).
    let malformed_body = r#"{"fileBase64": "JVBERi0=""#;

    // Act
    let response = app
        .client
        .post(format!("{}/api/lessons", app.address))
        .header("Content-Type", "application/json")
        .body(malformed_body)
        .send()
        .await?;

    // Assert
    let (status, envelope) = read_envelope(response).await?;
    assert_eq!(400, status);
    assert!(!envelope.is_ok());
    assert_eq!(0, upstream.hits_async().await);
    Ok(())
}

#[tokio::test]
async fn test_missing_content_type_returns_server_error() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .post(format!("{}/api/exam", app.address))
        .body(r#"{"fileBase64": "JVBERi0="}"#)
        .send()
        .await?;

    let (status, envelope) = read_envelope(response).await?;
    assert_eq!(500, status);
    assert!(matches!(envelope, Envelope::Failure { .. }));
    Ok(())
}

#[tokio::test]
async fn test_non_json_content_type_returns_server_error() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;
    let upstream = app
        .mock_server
        .mock_async(|when, then| {
            when.method(Method::POST).path(GEMINI_PATH);
            then.status(200);
        })
        .await;

    // Act
    let response = app
        .client
        .post(format!("{}/api/lessons", app.address))
        .header("Content-Type", "text/plain")
        .body(r#"{"fileBase64": "JVBERi0="}"#)
        .send()
        .await?;

    // Assert
    let (status, envelope) = read_envelope(response).await?;
    assert_eq!(500, status);
    assert!(!envelope.is_ok());
    assert_eq!(0, upstream.hits_async().await);
    Ok(())
}

#[tokio::test]
async fn test_non_string_file_returns_server_error() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .post_json("/api/exam", &serde_json::json!({ "fileBase64": 123 }))
        .await?;

    let (status, envelope) = read_envelope(response).await?;
    assert_eq!(500, status);
    match envelope {
        Envelope::Failure { error } => assert!(error.contains("invalid type"), "{error}"),
        other => panic!("expected a failure envelope, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_body_over_limit_is_rejected() -> Result<()> {
    // Arrange
    let app = TestApp::spawn_with_config(|config| config.body_limit_bytes = 1024).await?;
    let upstream = app
        .mock_server
        .mock_async(|when, then| {
            when.method(Method::POST).path(GEMINI_PATH);
            then.status(200);
        })
        .await;
    let oversized = "A".repeat(4096);

    // Act
    let response = app.post_document("/api/lessons", &oversized).await?;

    // Assert
    let (status, envelope) = read_envelope(response).await?;
    assert_eq!(413, status);
    assert!(!envelope.is_ok());
    assert_eq!(0, upstream.hits_async().await);
    Ok(())
}

#[tokio::test]
async fn test_cors_allows_any_origin() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .request(reqwest::Method::OPTIONS, format!("{}/api/lessons", app.address))
        .header("Origin", "https://brs.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await?;

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    Ok(())
}
