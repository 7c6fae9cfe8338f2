//! Day-over-day trend classification.
//!
//! Scores are compared with "higher is better" for every metric, pain
//! included. On a scale where a higher pain answer means more pain, the pain
//! labels read inverted.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use postcare_core::models::checkin::ComputedSignals;
use postcare_storage::DocumentStore;
use postcare_storage::records;

use crate::error::CheckInError;

/// Trend tag for a comparative metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    /// No check-in on the previous day.
    FirstEntry,
    Improved,
    Worse,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MedicationTrend {
    Adherent,
    NonAdherent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Trends {
    pub pain_trend: Trend,
    pub mobility_trend: Trend,
    pub mood_trend: Trend,
    pub medication_trend: MedicationTrend,
}

/// A classified day: the day's own signals plus its trends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub date: Date,
    pub signals: ComputedSignals,
    pub trends: Trends,
}

pub fn compare(current: f64, previous: Option<f64>) -> Trend {
    match previous {
        None => Trend::FirstEntry,
        Some(prev) if current > prev => Trend::Improved,
        Some(prev) if current < prev => Trend::Worse,
        Some(_) => Trend::Stable,
    }
}

/// Classify today's signals against the previous day's, if any.
///
/// Medication adherence is not comparative: it reflects today's answer only.
pub fn classify_signals(today: &ComputedSignals, yesterday: Option<&ComputedSignals>) -> Trends {
    Trends {
        pain_trend: compare(today.pain_score, yesterday.map(|y| y.pain_score)),
        mobility_trend: compare(today.mobility_score, yesterday.map(|y| y.mobility_score)),
        mood_trend: compare(today.mood_score, yesterday.map(|y| y.mood_score)),
        medication_trend: if today.medication_adherence {
            MedicationTrend::Adherent
        } else {
            MedicationTrend::NonAdherent
        },
    }
}

/// Load the check-ins for `date` and the day before, and classify.
///
/// Fails with `NotFound` if there is no check-in on `date`. A missing
/// previous day is normal and yields `first_entry` tags.
pub async fn classify(
    store: &DocumentStore,
    patient_id: Uuid,
    date: Date,
) -> Result<Classification, CheckInError> {
    let today = records::find_checkin(store, patient_id, date)
        .await?
        .ok_or_else(|| CheckInError::NotFound("Check-in not found".to_string()))?;

    let yesterday = match date.yesterday() {
        Ok(prev) => records::find_checkin(store, patient_id, prev).await?,
        Err(_) => None,
    };

    let trends = classify_signals(
        &today.computed_signals,
        yesterday.as_ref().map(|c| &c.computed_signals),
    );

    tracing::debug!(
        patient_id = %patient_id,
        date = %date,
        has_previous = yesterday.is_some(),
        "classified check-in trends"
    );

    Ok(Classification {
        date,
        signals: today.computed_signals,
        trends,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(pain: f64, mobility: f64, mood: f64, adherent: bool) -> ComputedSignals {
        ComputedSignals {
            pain_score: pain,
            mobility_score: mobility,
            mood_score: mood,
            medication_adherence: adherent,
        }
    }

    #[test]
    fn compare_rules() {
        assert_eq!(compare(5.0, None), Trend::FirstEntry);
        assert_eq!(compare(5.0, Some(3.0)), Trend::Improved);
        assert_eq!(compare(3.0, Some(5.0)), Trend::Worse);
        assert_eq!(compare(4.0, Some(4.0)), Trend::Stable);
    }

    #[test]
    fn first_entry_for_every_comparative_metric() {
        let trends = classify_signals(&signals(1.0, 2.0, 3.0, true), None);
        assert_eq!(trends.pain_trend, Trend::FirstEntry);
        assert_eq!(trends.mobility_trend, Trend::FirstEntry);
        assert_eq!(trends.mood_trend, Trend::FirstEntry);
        assert_eq!(trends.medication_trend, MedicationTrend::Adherent);
    }

    #[test]
    fn medication_ignores_previous_day() {
        let yesterday = signals(0.0, 0.0, 0.0, true);
        let trends = classify_signals(&signals(0.0, 0.0, 0.0, false), Some(&yesterday));
        assert_eq!(trends.medication_trend, MedicationTrend::NonAdherent);

        let trends = classify_signals(&signals(0.0, 0.0, 0.0, true), None);
        assert_eq!(trends.medication_trend, MedicationTrend::Adherent);
    }

    #[test]
    fn metrics_are_independent() {
        let yesterday = signals(6.0, 5.0, 5.0, false);
        let trends = classify_signals(&signals(4.0, 6.0, 5.0, true), Some(&yesterday));
        assert_eq!(trends.pain_trend, Trend::Worse);
        assert_eq!(trends.mobility_trend, Trend::Improved);
        assert_eq!(trends.mood_trend, Trend::Stable);
    }

    #[test]
    fn tags_serialize_snake_case() {
        let trends = classify_signals(&signals(1.0, 1.0, 1.0, false), None);
        let json = serde_json::to_value(trends).unwrap();
        assert_eq!(json["painTrend"], "first_entry");
        assert_eq!(json["medicationTrend"], "non_adherent");
    }
}
