use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// An image-backed medical report uploaded by a patient.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Report {
    pub id: Uuid,
    pub patient_id: Uuid,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// URL of the uploaded image.
    pub image: String,
    pub created_at: jiff::Timestamp,
}

fn default_title() -> String {
    "Untitled Report".to_string()
}

fn default_description() -> String {
    "No description provided".to_string()
}
