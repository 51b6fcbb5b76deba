//! Condition matching: score every known condition against the reported
//! symptoms, keep the plausible ones, rank them.

use tracing::debug;

use crate::knowledge::KnowledgeBase;
use crate::models::MatchResult;

/// Conditions sharing only one symptom out of five or more are noise.
const MATCH_THRESHOLD: f64 = 0.2;

/// At most this many candidates are returned.
const MAX_CANDIDATES: usize = 5;

/// Score and rank conditions for a reported symptom set.
///
/// The score is |reported ∩ condition.symptoms| / |condition.symptoms|,
/// rounded to two decimals for display. Candidates at or below the threshold
/// are dropped; the rest sort descending by score with ties keeping the
/// knowledge-base insertion order (stable sort).
///
/// An empty symptom set returns an empty ranking — "insufficient
/// information", never "healthy". A score of 1.0 means every listed symptom
/// was reported, not that the diagnosis is certain.
pub fn rank(symptoms: &[String], kb: &KnowledgeBase) -> Vec<MatchResult> {
    if symptoms.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for condition in &kb.conditions {
        let matched = condition
            .symptoms
            .iter()
            .filter(|s| symptoms.contains(s))
            .count();
        if matched == 0 {
            continue;
        }

        let score = matched as f64 / condition.symptoms.len() as f64;
        if score <= MATCH_THRESHOLD {
            continue;
        }

        candidates.push(MatchResult {
            name: condition.name.clone(),
            match_score: round2(score),
            description: condition.description.clone(),
            severity: condition.severity,
            urgency: condition.urgency,
            common_in: condition.common_in.clone(),
            recovery: condition.recovery.clone(),
        });
    }

    candidates.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    candidates.truncate(MAX_CANDIDATES);

    debug!(
        reported = symptoms.len(),
        candidates = candidates.len(),
        "condition ranking complete"
    );
    candidates
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::builtin()
    }

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn runny_nose_and_sneezing_rank_common_cold() {
        let results = rank(&terms(&["runny nose", "sneezing"]), &kb());
        assert_eq!(results[0].name, "Common Cold");
        assert_eq!(results[0].match_score, 0.33);
    }

    #[test]
    fn empty_symptom_set_ranks_nothing() {
        assert!(rank(&[], &kb()).is_empty());
    }

    #[test]
    fn scores_stay_within_bounds() {
        let results = rank(
            &terms(&["fever", "cough", "headache", "fatigue", "nausea", "sore throat"]),
            &kb(),
        );
        assert!(!results.is_empty());
        for result in &results {
            assert!(result.match_score > MATCH_THRESHOLD);
            assert!(result.match_score <= 1.0);
        }
    }

    #[test]
    fn threshold_drops_weak_overlaps() {
        // "nausea" alone: 1/5 of Migraine (exactly 0.2) and 1/6 of
        // Gastroenteritis — both at or below the threshold.
        assert!(rank(&terms(&["nausea"]), &kb()).is_empty());
    }

    #[test]
    fn full_symptom_list_scores_one() {
        let strep = terms(&[
            "sore throat",
            "fever",
            "swollen tonsils",
            "difficulty swallowing",
            "white patches",
        ]);
        let results = rank(&strep, &kb());
        assert_eq!(results[0].name, "Strep Throat");
        assert_eq!(results[0].match_score, 1.0);
    }

    #[test]
    fn ties_preserve_knowledge_base_order() {
        // "cough" + "fatigue" score 2/6 for both Sinusitis and Bronchitis;
        // Sinusitis is inserted first and must stay first.
        let results = rank(&terms(&["cough", "fatigue"]), &kb());
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        let sinusitis = names.iter().position(|n| *n == "Sinusitis").unwrap();
        let bronchitis = names.iter().position(|n| *n == "Bronchitis").unwrap();
        assert!(sinusitis < bronchitis);
        assert_eq!(
            results[sinusitis].match_score,
            results[bronchitis].match_score
        );
    }

    #[test]
    fn never_returns_more_than_five() {
        // A broad symptom spread touching many conditions.
        let broad = terms(&[
            "fever",
            "cough",
            "fatigue",
            "headache",
            "sore throat",
            "nausea",
            "diarrhea",
            "vomiting",
            "loss of appetite",
            "burning sensation",
            "frequent urination",
            "anxiety",
            "insomnia",
            "sneezing",
            "runny nose",
            "congestion",
            "wheezing",
            "shortness of breath",
            "chills",
            "sweating",
        ]);
        let results = rank(&broad, &kb());
        assert!(results.len() <= 5);

        // Descending order.
        for pair in results.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }
}
