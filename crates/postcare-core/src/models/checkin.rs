use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A patient's daily check-in. At most one exists per (patient, date).
///
/// Field names are camelCase on the wire and in storage; the mobile client
/// and any existing documents depend on this shape.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckIn {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub date: jiff::civil::Date,
    pub answers: Vec<Answer>,
    pub computed_signals: ComputedSignals,
    pub created_at: jiff::Timestamp,
}

/// One answer from the check-in questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    #[serde(default)]
    pub answer_type: AnswerType,
    pub value: serde_json::Value,
    #[serde(default)]
    pub raw_text: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerType {
    #[default]
    Choice,
    Text,
    Voice,
}

/// Signals reduced from the free-form answers of a check-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ComputedSignals {
    /// 0–10.
    pub pain_score: f64,
    /// 0–10.
    pub mobility_score: f64,
    /// 0–10.
    pub mood_score: f64,
    pub medication_adherence: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_type_defaults_to_choice() {
        let answer: Answer =
            serde_json::from_str(r#"{"questionId":"pain_level","value":4}"#).unwrap();
        assert_eq!(answer.answer_type, AnswerType::Choice);
        assert_eq!(answer.raw_text, None);
    }

    #[test]
    fn checkin_serializes_with_camel_case_fields() {
        let checkin = CheckIn {
            id: Uuid::nil(),
            patient_id: Uuid::nil(),
            date: jiff::civil::Date::new(2024, 1, 2).unwrap(),
            answers: vec![],
            computed_signals: ComputedSignals::default(),
            created_at: jiff::Timestamp::UNIX_EPOCH,
        };

        let json = serde_json::to_value(&checkin).unwrap();
        assert_eq!(json["date"], "2024-01-02");
        assert!(json.get("patientId").is_some());
        assert_eq!(json["computedSignals"]["medicationAdherence"], false);
        assert_eq!(json["computedSignals"]["painScore"], 0.0);
    }
}
