//! Templated recovery summary.
//!
//! A fixed sentence per (metric, trend) plus one reassurance line. There is no
//! text generation here; the only non-determinism is the reassurance pick,
//! which draws from a caller-supplied random source.

use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use postcare_core::models::checkin::ComputedSignals;

use crate::trend::{Trend, Trends};

/// Number of sentences emitted in [`RecoverySummary::summary`].
pub const SUMMARY_SENTENCES: usize = 2;

pub const REASSURANCE_QUOTES: [&str; 5] = [
    "Every small step in your recovery is progress. Keep going!",
    "Your body is healing every day. Be patient and kind to yourself.",
    "Recovery takes time, but you're moving in the right direction.",
    "Listen to your body and celebrate each improvement, no matter how small.",
    "You're stronger than you think. Each day brings you closer to better health.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecoverySummary {
    pub summary: String,
    pub reassurance: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    Pain,
    Mobility,
    Mood,
}

fn metric_sentence(metric: Metric, trend: Trend, score: f64) -> String {
    match (metric, trend) {
        (Metric::Pain, Trend::FirstEntry) => format!("Your pain level is currently {score}/10."),
        (Metric::Pain, Trend::Improved) => {
            "Your pain level has improved compared to yesterday.".to_string()
        }
        (Metric::Pain, Trend::Worse) => "Your pain level is slightly higher than yesterday.".to_string(),
        (Metric::Pain, Trend::Stable) => {
            "Your pain level remains stable compared to yesterday.".to_string()
        }

        (Metric::Mobility, Trend::FirstEntry) => {
            format!("Your mobility comfort is currently {score}/10.")
        }
        (Metric::Mobility, Trend::Improved) => {
            "Your mobility has improved, which is great progress.".to_string()
        }
        (Metric::Mobility, Trend::Worse) => "Your mobility comfort is slightly lower today.".to_string(),
        (Metric::Mobility, Trend::Stable) => {
            "Your mobility remains consistent with yesterday.".to_string()
        }

        (Metric::Mood, Trend::FirstEntry) => format!("Your mood is currently {score}/10."),
        (Metric::Mood, Trend::Improved) => "Your mood has lifted compared to yesterday.".to_string(),
        (Metric::Mood, Trend::Worse) => "Your mood is a little lower than yesterday.".to_string(),
        (Metric::Mood, Trend::Stable) => "Your mood remains steady compared to yesterday.".to_string(),
    }
}

fn medication_sentence(adherent: bool) -> String {
    if adherent {
        "You're doing well with your medication adherence.".to_string()
    } else {
        "Remember to follow your medication schedule as prescribed.".to_string()
    }
}

/// All summary sentences in order: pain, mobility, mood, medication.
pub fn sentences(trends: &Trends, signals: &ComputedSignals) -> Vec<String> {
    vec![
        metric_sentence(Metric::Pain, trends.pain_trend, signals.pain_score),
        metric_sentence(Metric::Mobility, trends.mobility_trend, signals.mobility_score),
        metric_sentence(Metric::Mood, trends.mood_trend, signals.mood_score),
        medication_sentence(signals.medication_adherence),
    ]
}

/// Pick one of [`REASSURANCE_QUOTES`] uniformly.
pub fn pick_reassurance<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    REASSURANCE_QUOTES[rng.gen_range(0..REASSURANCE_QUOTES.len())]
}

/// Render the patient-facing summary. Only the first
/// [`SUMMARY_SENTENCES`] sentences are emitted.
pub fn summarize<R: Rng + ?Sized>(
    trends: &Trends,
    signals: &ComputedSignals,
    rng: &mut R,
) -> RecoverySummary {
    let summary = sentences(trends, signals)
        .into_iter()
        .take(SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ");

    RecoverySummary {
        summary,
        reassurance: pick_reassurance(rng).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::trend::{MedicationTrend, classify_signals};

    fn signals(pain: f64, mobility: f64) -> ComputedSignals {
        ComputedSignals {
            pain_score: pain,
            mobility_score: mobility,
            mood_score: 5.0,
            medication_adherence: true,
        }
    }

    fn trends(pain: Trend, mobility: Trend) -> Trends {
        Trends {
            pain_trend: pain,
            mobility_trend: mobility,
            mood_trend: Trend::Stable,
            medication_trend: MedicationTrend::Adherent,
        }
    }

    #[test]
    fn first_entry_embeds_current_scores() {
        let s = signals(4.0, 6.0);
        let summary = summarize(&classify_signals(&s, None), &s, &mut StepRng::new(0, 1));
        assert_eq!(
            summary.summary,
            "Your pain level is currently 4/10. Your mobility comfort is currently 6/10."
        );
    }

    #[test]
    fn fractional_scores_keep_their_fraction() {
        let s = signals(4.5, 6.0);
        let summary = summarize(&classify_signals(&s, None), &s, &mut StepRng::new(0, 1));
        assert!(summary.summary.starts_with("Your pain level is currently 4.5/10."));
    }

    #[test]
    fn comparative_sentences() {
        let s = signals(0.0, 0.0);
        let summary = summarize(&trends(Trend::Worse, Trend::Improved), &s, &mut StepRng::new(0, 1));
        assert_eq!(
            summary.summary,
            "Your pain level is slightly higher than yesterday. \
             Your mobility has improved, which is great progress."
        );

        let summary = summarize(&trends(Trend::Stable, Trend::Worse), &s, &mut StepRng::new(0, 1));
        assert_eq!(
            summary.summary,
            "Your pain level remains stable compared to yesterday. \
             Your mobility comfort is slightly lower today."
        );
    }

    #[test]
    fn only_pain_and_mobility_are_emitted() {
        let s = signals(3.0, 3.0);
        let t = trends(Trend::Improved, Trend::Stable);

        let all = sentences(&t, &s);
        assert_eq!(all.len(), 4);
        assert_eq!(all[3], "You're doing well with your medication adherence.");

        let summary = summarize(&t, &s, &mut StepRng::new(0, 1));
        assert_eq!(summary.summary, all[..SUMMARY_SENTENCES].join(" "));
        assert!(!summary.summary.contains("mood"));
        assert!(!summary.summary.contains("medication"));
    }

    #[test]
    fn medication_reminder_when_not_adherent() {
        let mut s = signals(3.0, 3.0);
        s.medication_adherence = false;
        let all = sentences(&trends(Trend::Stable, Trend::Stable), &s);
        assert_eq!(all[3], "Remember to follow your medication schedule as prescribed.");
    }

    #[test]
    fn summary_is_deterministic_for_fixed_inputs() {
        let s = signals(2.0, 7.0);
        let t = trends(Trend::Improved, Trend::Worse);
        let mut rng = StdRng::seed_from_u64(7);

        let first = summarize(&t, &s, &mut rng);
        for _ in 0..20 {
            assert_eq!(summarize(&t, &s, &mut rng).summary, first.summary);
        }
    }

    #[test]
    fn reassurance_is_always_a_known_quote() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let quote = pick_reassurance(&mut rng);
            assert!(REASSURANCE_QUOTES.contains(&quote));
        }
    }

    #[test]
    fn every_quote_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; REASSURANCE_QUOTES.len()];
        for _ in 0..500 {
            let quote = pick_reassurance(&mut rng);
            let idx = REASSURANCE_QUOTES.iter().position(|q| *q == quote).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
