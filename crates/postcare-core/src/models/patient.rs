use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A patient account, as written by the accounts service.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// The doctor responsible for this patient, if one has been assigned.
    #[serde(default)]
    pub doctor_id: Option<Uuid>,
    pub created_at: jiff::Timestamp,
}
