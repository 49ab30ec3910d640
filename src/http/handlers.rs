//! Axum HTTP handlers for the web server
//!
//! Provides the single smoke-test endpoint answering with a fixed JSON document.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::info;

pub const HOME_PATH: &str = "/api/home";

/// Served byte for byte; not produced by a serializer.
pub const HOME_BODY: &str = r#"{"message": "Is this working?"}"#;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Answers every method identically, OPTIONS included.
pub async fn home() -> impl IntoResponse {
    info!(path = HOME_PATH, "endpoint hit: home");

    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
            (header::CONTENT_TYPE, JSON_CONTENT_TYPE),
        ],
        HOME_BODY,
    )
}
