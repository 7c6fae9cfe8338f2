//! Document key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of documents in the postcare bucket.

use jiff::civil::Date;
use uuid::Uuid;

pub const PATIENTS_PREFIX: &str = "patients/";

pub fn patient(id: Uuid) -> String {
    format!("patients/{id}.json")
}

/// One key per (patient, calendar day). Check-in uniqueness is enforced by
/// create-if-absent writes against this key.
pub fn checkin(patient_id: Uuid, date: Date) -> String {
    format!("checkins/{patient_id}/{date}.json")
}

pub fn report(patient_id: Uuid, id: Uuid) -> String {
    format!("reports/{patient_id}/{id}.json")
}

pub fn reports_prefix(patient_id: Uuid) -> String {
    format!("reports/{patient_id}/")
}

pub fn medicine(patient_id: Uuid, id: Uuid) -> String {
    format!("medicines/{patient_id}/{id}.json")
}

pub fn medicines_prefix(patient_id: Uuid) -> String {
    format!("medicines/{patient_id}/")
}
