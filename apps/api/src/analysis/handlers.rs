use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::{error, warn};

use crate::analysis::normalizer::{normalize_reply, AnalysisResult, ParseOutcome};
use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::extract::TextExtractor;
use crate::model_client::ModelClient;
use crate::state::AppState;

/// Minimum trimmed character count an extracted resume must have before it is
/// worth sending to the model. Fixed for API compatibility.
pub const MIN_EXTRACTED_CHARS: usize = 10;

const INSUFFICIENT_TEXT: &str = "Could not extract sufficient text from PDF. \
    Please check if the PDF contains selectable text.";

fn sufficient_text(text: &str) -> bool {
    text.trim().chars().count() >= MIN_EXTRACTED_CHARS
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    warn!("multipart decode failed: {e}");
    AppError::Validation("Invalid multipart form data".to_string())
}

/// POST /api/analyze
///
/// Multipart form: `resume` (PDF file) + `job_description` (text). A valid
/// request always gets a 200 with an analysis-shaped body — model-provider
/// failures and unparseable replies degrade to fallback records, they do not
/// become HTTP errors.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(bad_multipart)?;
                resume = Some((filename, data));
            }
            "job_description" => {
                job_description = Some(field.text().await.map_err(bad_multipart)?);
            }
            _ => {}
        }
    }

    // Validation order is part of the API contract.
    let (filename, data) =
        resume.ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No resume file selected".to_string()));
    }
    let job_description = job_description.unwrap_or_default();
    if job_description.is_empty() {
        return Err(AppError::Validation("No job description provided".to_string()));
    }
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation("File must be a PDF".to_string()));
    }

    let resume_text = state.extractor.extract(&data)?;
    if !sufficient_text(&resume_text) {
        return Err(AppError::Validation(INSUFFICIENT_TEXT.to_string()));
    }

    let prompt = build_analysis_prompt(&resume_text, &job_description);
    let raw = match state.model.complete(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("model call failed: {e}");
            return Ok(Json(AnalysisResult::provider_failure(&e)));
        }
    };

    let normalized = normalize_reply(&raw);
    if normalized.outcome == ParseOutcome::Fallback {
        warn!("model reply was not parseable JSON; returning fallback record");
    }
    Ok(Json(normalized.result))
}
