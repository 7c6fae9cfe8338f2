use axum::extract::rejection::PathRejection;
use axum::extract::{Extension, Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use postcare_audit::{AuditAction, AuditEvent};
use postcare_checkin::dashboard::{
    self, DISCLAIMER, DashboardEntry, PatientDetail, PatientListEntry,
};

use crate::error::ApiError;
use crate::middleware::auth::AuthDoctor;
use crate::state::AppState;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub disclaimer: &'static str,
    pub patients: Vec<DashboardEntry>,
}

#[derive(Serialize)]
pub struct PatientsResponse {
    pub patients: Vec<PatientListEntry>,
    pub disclaimer: &'static str,
}

#[derive(Serialize)]
pub struct PatientSummaryResponse {
    #[serde(flatten)]
    pub detail: PatientDetail,
    pub disclaimer: &'static str,
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(AuthDoctor(doctor_id)): Extension<AuthDoctor>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let patients = dashboard::build_dashboard(&state.store, doctor_id, jiff::Timestamp::now()).await?;

    AuditEvent::new(
        AuditAction::DashboardViewed,
        "dashboard",
        doctor_id.to_string(),
        doctor_id.to_string(),
    )
    .with_details(serde_json::json!({ "patients": patients.len() }))
    .emit();

    Ok(Json(DashboardResponse {
        disclaimer: DISCLAIMER,
        patients,
    }))
}

pub async fn list_patients(
    State(state): State<AppState>,
    Extension(AuthDoctor(doctor_id)): Extension<AuthDoctor>,
) -> Result<Json<PatientsResponse>, ApiError> {
    let patients = dashboard::list_patients(&state.store, doctor_id).await?;

    AuditEvent::new(
        AuditAction::PatientListViewed,
        "patient",
        "*",
        doctor_id.to_string(),
    )
    .emit();

    Ok(Json(PatientsResponse {
        patients: patients.iter().map(PatientListEntry::from).collect(),
        disclaimer: DISCLAIMER,
    }))
}

pub async fn get_patient_summary(
    State(state): State<AppState>,
    Extension(AuthDoctor(doctor_id)): Extension<AuthDoctor>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<PatientSummaryResponse>, ApiError> {
    let Path(patient_id) = path?;
    let detail =
        dashboard::patient_detail(&state.store, doctor_id, patient_id, jiff::Timestamp::now())
            .await?;

    AuditEvent::new(
        AuditAction::PatientSummaryViewed,
        "patient",
        patient_id.to_string(),
        doctor_id.to_string(),
    )
    .emit();

    Ok(Json(PatientSummaryResponse {
        detail,
        disclaimer: DISCLAIMER,
    }))
}
