//! Check-in recording: validates a submission, reduces its answers to
//! [`ComputedSignals`], and persists it once per (patient, day).

use jiff::civil::Date;
use serde::Deserialize;
use ts_rs::TS;
use uuid::Uuid;

use postcare_core::date::parse_day;
use postcare_core::models::checkin::{Answer, CheckIn, ComputedSignals};
use postcare_storage::DocumentStore;
use postcare_storage::error::StorageError;
use postcare_storage::records;

use crate::error::CheckInError;

/// Question ids that feed the computed signals.
pub mod question {
    pub const PAIN_LEVEL: &str = "pain_level";
    pub const MOBILITY_COMFORT: &str = "mobility_comfort";
    pub const EMOTIONAL_STATE: &str = "emotional_state";
    pub const MEDICATION_ADHERENCE: &str = "medication_adherence";
}

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;

/// A check-in as submitted by the mobile client. Both fields are optional at
/// the parsing stage so that a missing field is reported as a validation
/// failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckInSubmission {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub answers: Option<Vec<Answer>>,
}

/// Reduce answers to signals.
///
/// Answers are visited in order and a later answer for the same question
/// overwrites an earlier one. Values of the wrong JSON type are ignored, and
/// any signal without an answer keeps its default of `0` / `false`.
pub fn reduce_signals(answers: &[Answer]) -> ComputedSignals {
    let mut signals = ComputedSignals::default();

    for answer in answers {
        match answer.question_id.as_str() {
            question::PAIN_LEVEL => {
                if let Some(v) = answer.value.as_f64() {
                    signals.pain_score = v;
                }
            }
            question::MOBILITY_COMFORT => {
                if let Some(v) = answer.value.as_f64() {
                    signals.mobility_score = v;
                }
            }
            question::EMOTIONAL_STATE => {
                if let Some(v) = answer.value.as_f64() {
                    signals.mood_score = v;
                }
            }
            question::MEDICATION_ADHERENCE => {
                if let Some(v) = answer.value.as_bool() {
                    signals.medication_adherence = v;
                }
            }
            _ => {}
        }
    }

    signals
}

fn check_score(name: &str, value: f64) -> Result<(), CheckInError> {
    if (SCORE_MIN..=SCORE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(CheckInError::Validation(format!(
            "{name} {value} is outside range [{SCORE_MIN}, {SCORE_MAX}]"
        )))
    }
}

/// Validate a submission and build the check-in document to store.
pub fn build_checkin(
    patient_id: Uuid,
    submission: CheckInSubmission,
    now: jiff::Timestamp,
) -> Result<CheckIn, CheckInError> {
    let raw_date = submission
        .date
        .filter(|d| !d.is_empty())
        .ok_or_else(|| CheckInError::Validation("date is required".to_string()))?;
    let date = parse_day(&raw_date)?;

    let answers = submission
        .answers
        .filter(|a| !a.is_empty())
        .ok_or_else(|| CheckInError::Validation("answers must be a non-empty list".to_string()))?;

    let computed_signals = reduce_signals(&answers);
    check_score("painScore", computed_signals.pain_score)?;
    check_score("mobilityScore", computed_signals.mobility_score)?;
    check_score("moodScore", computed_signals.mood_score)?;

    Ok(CheckIn {
        id: Uuid::new_v4(),
        patient_id,
        date,
        answers,
        computed_signals,
        created_at: now,
    })
}

/// Record a patient's check-in. Returns the new check-in id.
///
/// Uniqueness per (patient, date) is enforced by the store's create-if-absent
/// write, not by a prior lookup, so two racing submissions cannot both land.
pub async fn submit(
    store: &DocumentStore,
    patient_id: Uuid,
    submission: CheckInSubmission,
) -> Result<Uuid, CheckInError> {
    let checkin = build_checkin(patient_id, submission, jiff::Timestamp::now())?;

    match records::create_checkin(store, &checkin).await {
        Ok(()) => {
            tracing::info!(
                patient_id = %patient_id,
                date = %checkin.date,
                checkin_id = %checkin.id,
                "check-in recorded"
            );
            Ok(checkin.id)
        }
        Err(StorageError::AlreadyExists { .. }) => Err(CheckInError::Conflict { date: checkin.date }),
        Err(e) => Err(e.into()),
    }
}

/// Whether the patient has already checked in on `date`.
pub async fn exists(
    store: &DocumentStore,
    patient_id: Uuid,
    date: Date,
) -> Result<bool, CheckInError> {
    Ok(records::find_checkin(store, patient_id, date).await?.is_some())
}
