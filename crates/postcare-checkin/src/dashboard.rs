//! Doctor dashboard recovery classification.
//!
//! A coarse activity heuristic over report and medicine volume. It does not
//! look at check-ins, and nothing it produces is a clinical judgement; every
//! response carries [`DISCLAIMER`].

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use postcare_core::models::medicine::Medicine;
use postcare_core::models::patient::Patient;
use postcare_core::models::report::Report;
use postcare_storage::DocumentStore;
use postcare_storage::records;

use crate::error::CheckInError;

pub const DISCLAIMER: &str =
    "This is for informational purposes only and does not constitute medical advice.";

/// Look-back window for "recent" reports and medicines.
pub const RECENT_WINDOW: SignedDuration = SignedDuration::from_hours(7 * 24);

/// One report per day over [`RECENT_WINDOW`].
pub const EXPECTED_RECENT_REPORTS: usize = 7;

const IMPROVING_ABOVE: usize = 5;
const STABLE_ABOVE: usize = 2;
const LOW_ACTIVITY_BELOW: usize = 3;
const MEDICATION_BELOW: usize = 5;

/// Cap on reports and medicines returned with a patient's detail view.
pub const DETAIL_LIMIT: usize = 10;

/// Ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum RecoveryTrend {
    NeedsAttention,
    Stable,
    Improving,
}

impl RecoveryTrend {
    pub fn label(&self) -> &'static str {
        match self {
            RecoveryTrend::NeedsAttention => "needs_attention",
            RecoveryTrend::Stable => "stable",
            RecoveryTrend::Improving => "improving",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskFlag {
    #[serde(rename = "Low reporting activity")]
    LowReportingActivity,
    #[serde(rename = "Irregular medication adherence")]
    IrregularMedicationAdherence,
}

/// The classifier's view of one patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryAssessment {
    pub trend: RecoveryTrend,
    pub missed_check_ins: usize,
    pub risk_flags: Vec<RiskFlag>,
    pub total_reports: usize,
}

impl RecoveryAssessment {
    /// Sentence shown on the dashboard row.
    pub fn ai_summary(&self) -> String {
        format!(
            "Patient has {} reports and is {}.",
            self.total_reports,
            self.trend.label()
        )
    }

    /// Sentence shown on the patient detail view.
    pub fn detail_summary(&self, username: &str) -> String {
        format!(
            "Patient {username} shows {} recovery trend based on {} reports.",
            self.trend.label(),
            self.total_reports
        )
    }
}

/// Everything the classifier reads for one patient.
#[derive(Debug, Clone, Default)]
pub struct PatientRecords {
    pub reports: Vec<Report>,
    pub medicines: Vec<Medicine>,
}

impl PatientRecords {
    /// Load a patient's reports and medicines.
    ///
    /// A failed read is logged and treated as an empty list, so one bad
    /// document does not take down the whole dashboard.
    pub async fn load(store: &DocumentStore, patient_id: Uuid) -> Self {
        let reports = records::list_reports(store, patient_id)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(patient_id = %patient_id, error = %e, "failed to load reports");
                Vec::new()
            });
        let medicines = records::list_medicines(store, patient_id)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(patient_id = %patient_id, error = %e, "failed to load medicines");
                Vec::new()
            });

        Self { reports, medicines }
    }
}

fn trend_for(recent_reports: usize) -> RecoveryTrend {
    if recent_reports > IMPROVING_ABOVE {
        RecoveryTrend::Improving
    } else if recent_reports > STABLE_ABOVE {
        RecoveryTrend::Stable
    } else {
        RecoveryTrend::NeedsAttention
    }
}

/// Classify a patient from their records as of `now`.
///
/// A record is recent when its `createdAt` is strictly after `now - 7 days`.
pub fn classify_records(records: &PatientRecords, now: Timestamp) -> RecoveryAssessment {
    let since = now - RECENT_WINDOW;
    let recent_reports = records
        .reports
        .iter()
        .filter(|r| r.created_at > since)
        .count();
    let recent_medicines = records
        .medicines
        .iter()
        .filter(|m| m.created_at > since)
        .count();

    let mut risk_flags = Vec::new();
    if records.reports.len() < LOW_ACTIVITY_BELOW {
        risk_flags.push(RiskFlag::LowReportingActivity);
    }
    if recent_medicines < MEDICATION_BELOW {
        risk_flags.push(RiskFlag::IrregularMedicationAdherence);
    }

    RecoveryAssessment {
        trend: trend_for(recent_reports),
        missed_check_ins: EXPECTED_RECENT_REPORTS.saturating_sub(recent_reports),
        risk_flags,
        total_reports: records.reports.len(),
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardEntry {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub trend: RecoveryTrend,
    pub missed_check_ins: usize,
    pub risk_flags: Vec<RiskFlag>,
    pub ai_summary: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientListEntry {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<&Patient> for PatientListEntry {
    fn from(p: &Patient) -> Self {
        Self {
            id: p.id,
            username: p.username.clone(),
            email: p.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct PatientContact {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientDetail {
    pub patient: PatientContact,
    pub trend: RecoveryTrend,
    pub missed_check_ins: usize,
    pub risk_flags: Vec<RiskFlag>,
    pub ai_summary: String,
    pub reports: Vec<DetailReport>,
    pub medicines: Vec<DetailMedicine>,
}

/// A report as the doctor dashboard renders it.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DetailReport {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub created_at: Timestamp,
    pub content: String,
    pub image: String,
}

impl From<Report> for DetailReport {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            title: or_default(r.title, "Patient Report"),
            created_at: r.created_at,
            content: or_default(r.description, "No content available"),
            image: r.image,
        }
    }
}

/// A medicine reminder as the doctor dashboard renders it.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DetailMedicine {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub times: Vec<String>,
    pub created_at: Timestamp,
    pub notes: String,
}

impl From<Medicine> for DetailMedicine {
    fn from(m: Medicine) -> Self {
        let times = if m.times.is_empty() {
            vec!["As needed".to_string()]
        } else {
            m.times
        };
        Self {
            id: m.id,
            name: or_default(m.name, "Unknown Medicine"),
            times,
            created_at: m.created_at,
            notes: m.notes.unwrap_or_default(),
        }
    }
}

fn or_default(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// The doctor's patients, in store key order.
pub async fn list_patients(
    store: &DocumentStore,
    doctor_id: Uuid,
) -> Result<Vec<Patient>, CheckInError> {
    let patients = records::list_patients(store).await?;
    Ok(patients
        .into_iter()
        .filter(|p| p.doctor_id == Some(doctor_id))
        .collect())
}

/// One dashboard row per patient assigned to `doctor_id`.
pub async fn build_dashboard(
    store: &DocumentStore,
    doctor_id: Uuid,
    now: Timestamp,
) -> Result<Vec<DashboardEntry>, CheckInError> {
    let patients = list_patients(store, doctor_id).await?;

    let mut entries = Vec::with_capacity(patients.len());
    for patient in patients {
        let patient_records = PatientRecords::load(store, patient.id).await;
        let assessment = classify_records(&patient_records, now);
        entries.push(DashboardEntry {
            id: patient.id,
            ai_summary: assessment.ai_summary(),
            username: patient.username,
            email: patient.email,
            trend: assessment.trend,
            missed_check_ins: assessment.missed_check_ins,
            risk_flags: assessment.risk_flags,
        });
    }

    tracing::debug!(doctor_id = %doctor_id, patients = entries.len(), "built dashboard");
    Ok(entries)
}

/// Detail view of one patient. Patients not assigned to `doctor_id` are
/// reported as not found.
pub async fn patient_detail(
    store: &DocumentStore,
    doctor_id: Uuid,
    patient_id: Uuid,
    now: Timestamp,
) -> Result<PatientDetail, CheckInError> {
    let patient = records::find_patient(store, patient_id)
        .await?
        .filter(|p| p.doctor_id == Some(doctor_id))
        .ok_or_else(|| CheckInError::NotFound("Patient not found".to_string()))?;

    let patient_records = PatientRecords::load(store, patient.id).await;
    let assessment = classify_records(&patient_records, now);

    let PatientRecords {
        mut reports,
        mut medicines,
    } = patient_records;
    reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    reports.truncate(DETAIL_LIMIT);
    medicines.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    medicines.truncate(DETAIL_LIMIT);

    Ok(PatientDetail {
        ai_summary: assessment.detail_summary(&patient.username),
        patient: PatientContact {
            username: patient.username,
            email: patient.email,
        },
        trend: assessment.trend,
        missed_check_ins: assessment.missed_check_ins,
        risk_flags: assessment.risk_flags,
        reports: reports.into_iter().map(DetailReport::from).collect(),
        medicines: medicines.into_iter().map(DetailMedicine::from).collect(),
    })
}
