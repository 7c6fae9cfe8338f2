use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::Json;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use postcare_audit::{AuditAction, AuditEvent};
use postcare_checkin::recorder::{self, CheckInSubmission};
use postcare_checkin::summary::{self, RecoverySummary};
use postcare_checkin::trend;
use postcare_core::date::{parse_day, today_utc};

use crate::error::ApiError;
use crate::middleware::auth::AuthPatient;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TodayStatus {
    pub exists: bool,
    pub date: Date,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub message: &'static str,
    pub check_in_id: Uuid,
}

#[derive(Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub date: Option<String>,
}

pub async fn today(
    State(state): State<AppState>,
    Extension(AuthPatient(patient_id)): Extension<AuthPatient>,
) -> Result<Json<TodayStatus>, ApiError> {
    let date = today_utc();
    let exists = recorder::exists(&state.store, patient_id, date).await?;
    Ok(Json(TodayStatus { exists, date }))
}

pub async fn submit(
    State(state): State<AppState>,
    Extension(AuthPatient(patient_id)): Extension<AuthPatient>,
    payload: Result<Json<CheckInSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let Json(submission) = payload?;
    let date = submission.date.clone();

    let check_in_id = recorder::submit(&state.store, patient_id, submission).await?;

    AuditEvent::new(
        AuditAction::CheckInSubmitted,
        "checkin",
        check_in_id.to_string(),
        patient_id.to_string(),
    )
    .with_details(serde_json::json!({ "date": date }))
    .emit();

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Check-in submitted successfully",
            check_in_id,
        }),
    ))
}

pub async fn summary(
    State(state): State<AppState>,
    Extension(AuthPatient(patient_id)): Extension<AuthPatient>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<RecoverySummary>, ApiError> {
    let Json(request) = payload?;
    let raw = request
        .date
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Date is required".to_string()))?;
    let date = parse_day(&raw).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let classification = trend::classify(&state.store, patient_id, date).await?;
    let rendered = summary::summarize(
        &classification.trends,
        &classification.signals,
        &mut rand::thread_rng(),
    );

    AuditEvent::new(
        AuditAction::CheckInSummaryViewed,
        "checkin",
        date.to_string(),
        patient_id.to_string(),
    )
    .emit();

    Ok(Json(rendered))
}
