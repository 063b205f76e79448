#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The 500 body is analysis-shaped (it carries the three `AnalysisResult` keys
/// alongside `error`) so callers that only look for those keys still get them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => {
                let body = Json(json!({ "error": message }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                analysis_shaped_failure(e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                analysis_shaped_failure(e.to_string())
            }
        }
    }
}

fn analysis_shaped_failure(message: String) -> Response {
    let body = Json(json!({
        "error": message,
        "JD Match": "0%",
        "MissingKeywords": ["Error occurred"],
        "Profile Summary": format!("Error analyzing resume: {message}"),
    }));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
