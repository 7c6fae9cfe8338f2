use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A medicine reminder. `times` holds the reminder times of day as entered by
/// the patient (e.g. `"08:00"`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Medicine {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub name: String,
    pub times: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
}
