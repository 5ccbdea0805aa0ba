//! Axum route handlers for the resume generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeRequest, ResumeResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResumeResponse {
    pub status: &'static str,
    pub data: ResumeResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate-resume
///
/// Validates required fields, then runs the resume processor. The processor
/// itself cannot fail, so the only error responses are client errors.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResumeResponse>, AppError> {
    let request = parse_request(payload)?;

    let missing = missing_required_fields(&request);
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let request_id = Uuid::new_v4();
    let data = state
        .processor
        .process(&request)
        .instrument(info_span!("generate_resume", %request_id))
        .await;

    Ok(Json(GenerateResumeResponse {
        status: "success",
        data,
    }))
}

/// Accepts only a non-empty JSON object whose fields deserialize as strings.
fn parse_request(payload: Result<Json<Value>, JsonRejection>) -> Result<ResumeRequest, AppError> {
    let no_data = || AppError::Validation("No data provided".to_string());

    let Json(body) = payload.map_err(|e| {
        warn!("Rejected resume payload: {e}");
        no_data()
    })?;
    if body.as_object().map_or(true, |fields| fields.is_empty()) {
        return Err(no_data());
    }

    serde_json::from_value(body).map_err(|e| {
        warn!("Resume payload has the wrong shape: {e}");
        no_data()
    })
}

/// Names (wire casing) of required fields that are absent or blank.
fn missing_required_fields(request: &ResumeRequest) -> Vec<&'static str> {
    [
        ("fullName", &request.full_name),
        ("jobTitle", &request.job_title),
        ("skills", &request.skills),
        ("experience", &request.experience),
        ("jobDescription", &request.job_description),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect()
}
