//! Typed access to the postcare document layout.

use jiff::civil::Date;
use uuid::Uuid;

use postcare_core::doc_keys;
use postcare_core::models::checkin::CheckIn;
use postcare_core::models::medicine::Medicine;
use postcare_core::models::patient::Patient;
use postcare_core::models::report::Report;

use crate::documents;
use crate::error::StorageError;
use crate::store::DocumentStore;

pub async fn find_checkin(
    store: &DocumentStore,
    patient_id: Uuid,
    date: Date,
) -> Result<Option<CheckIn>, StorageError> {
    documents::find_json(store, &doc_keys::checkin(patient_id, date)).await
}

/// Persist a new check-in. Fails with `StorageError::AlreadyExists` if the
/// patient already has one for that date.
pub async fn create_checkin(store: &DocumentStore, checkin: &CheckIn) -> Result<(), StorageError> {
    let key = doc_keys::checkin(checkin.patient_id, checkin.date);
    documents::create_json(store, &key, checkin).await
}

pub async fn find_patient(
    store: &DocumentStore,
    id: Uuid,
) -> Result<Option<Patient>, StorageError> {
    documents::find_json(store, &doc_keys::patient(id)).await
}

pub async fn list_patients(store: &DocumentStore) -> Result<Vec<Patient>, StorageError> {
    documents::load_all_json(store, doc_keys::PATIENTS_PREFIX).await
}

pub async fn list_reports(
    store: &DocumentStore,
    patient_id: Uuid,
) -> Result<Vec<Report>, StorageError> {
    documents::load_all_json(store, &doc_keys::reports_prefix(patient_id)).await
}

pub async fn list_medicines(
    store: &DocumentStore,
    patient_id: Uuid,
) -> Result<Vec<Medicine>, StorageError> {
    documents::load_all_json(store, &doc_keys::medicines_prefix(patient_id)).await
}

pub async fn save_patient(store: &DocumentStore, patient: &Patient) -> Result<(), StorageError> {
    documents::save_json(store, &doc_keys::patient(patient.id), patient).await
}

pub async fn save_report(store: &DocumentStore, report: &Report) -> Result<(), StorageError> {
    documents::save_json(store, &doc_keys::report(report.patient_id, report.id), report).await
}

pub async fn save_medicine(store: &DocumentStore, medicine: &Medicine) -> Result<(), StorageError> {
    documents::save_json(
        store,
        &doc_keys::medicine(medicine.patient_id, medicine.id),
        medicine,
    )
    .await
}
