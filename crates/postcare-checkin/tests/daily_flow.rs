use jiff::civil::date;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use uuid::Uuid;

use postcare_checkin::CheckInError;
use postcare_checkin::recorder::{self, CheckInSubmission};
use postcare_checkin::summary::{self, REASSURANCE_QUOTES};
use postcare_checkin::trend::{self, MedicationTrend, Trend};
use postcare_storage::DocumentStore;

fn submission(body: serde_json::Value) -> CheckInSubmission {
    serde_json::from_value(body).unwrap()
}

#[tokio::test]
async fn second_day_is_compared_with_the_first() {
    let store = DocumentStore::in_memory();
    let patient_id = Uuid::new_v4();

    recorder::submit(
        &store,
        patient_id,
        submission(json!({
            "date": "2024-01-01",
            "answers": [
                { "questionId": "pain_level", "value": 6 },
                { "questionId": "mobility_comfort", "value": 5 },
                { "questionId": "medication_adherence", "value": false }
            ]
        })),
    )
    .await
    .unwrap();

    recorder::submit(
        &store,
        patient_id,
        submission(json!({
            "date": "2024-01-02",
            "answers": [
                { "questionId": "pain_level", "value": 4 },
                { "questionId": "mobility_comfort", "value": 6 },
                { "questionId": "medication_adherence", "value": true }
            ]
        })),
    )
    .await
    .unwrap();

    let classification = trend::classify(&store, patient_id, date(2024, 1, 2)).await.unwrap();
    assert_eq!(classification.trends.pain_trend, Trend::Worse);
    assert_eq!(classification.trends.mobility_trend, Trend::Improved);
    assert_eq!(classification.trends.medication_trend, MedicationTrend::Adherent);

    let mut rng = StdRng::seed_from_u64(2024);
    let rendered = summary::summarize(&classification.trends, &classification.signals, &mut rng);
    assert_eq!(
        rendered.summary,
        "Your pain level is slightly higher than yesterday. \
         Your mobility has improved, which is great progress."
    );
    assert_eq!(rendered.summary.matches(". ").count() + 1, 2);
    assert!(REASSURANCE_QUOTES.contains(&rendered.reassurance.as_str()));
}

#[tokio::test]
async fn first_day_has_no_comparison() {
    let store = DocumentStore::in_memory();
    let patient_id = Uuid::new_v4();

    recorder::submit(
        &store,
        patient_id,
        submission(json!({
            "date": "2024-01-02",
            "answers": [{ "questionId": "pain_level", "answerType": "choice", "value": 3 }]
        })),
    )
    .await
    .unwrap();

    let classification = trend::classify(&store, patient_id, date(2024, 1, 2)).await.unwrap();
    assert_eq!(classification.trends.pain_trend, Trend::FirstEntry);
    assert_eq!(classification.trends.mood_trend, Trend::FirstEntry);
    assert_eq!(classification.trends.medication_trend, MedicationTrend::NonAdherent);
}

#[tokio::test]
async fn gap_day_counts_as_first_entry() {
    let store = DocumentStore::in_memory();
    let patient_id = Uuid::new_v4();

    for day in ["2024-01-01", "2024-01-03"] {
        recorder::submit(
            &store,
            patient_id,
            submission(json!({
                "date": day,
                "answers": [{ "questionId": "pain_level", "value": 5 }]
            })),
        )
        .await
        .unwrap();
    }

    let classification = trend::classify(&store, patient_id, date(2024, 1, 3)).await.unwrap();
    assert_eq!(classification.trends.pain_trend, Trend::FirstEntry);
}

#[tokio::test]
async fn classify_without_checkin_is_not_found() {
    let store = DocumentStore::in_memory();
    let err = trend::classify(&store, Uuid::new_v4(), date(2024, 1, 2))
        .await
        .unwrap_err();
    assert!(matches!(err, CheckInError::NotFound(_)));
}

#[tokio::test]
async fn concurrent_submissions_store_exactly_one() {
    let store = DocumentStore::in_memory();
    let patient_id = Uuid::new_v4();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            recorder::submit(
                &store,
                patient_id,
                submission(json!({
                    "date": "2024-01-02",
                    "answers": [{ "questionId": "pain_level", "value": 2 }]
                })),
            )
            .await
        }));
    }

    let mut stored = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => stored += 1,
            Err(CheckInError::Conflict { .. }) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(stored, 1);
    assert_eq!(conflicts, 7);
}
