//! Static triage knowledge: the condition table, the symptom vocabulary, and
//! a small medication reference backing treatment inquiries.
//!
//! The knowledge base is built once at startup and shared immutably (the
//! engine takes it behind an `Arc`); nothing mutates it afterwards.

use serde::{Deserialize, Serialize};

use crate::models::{Severity, Urgency};

// ═══════════════════════════════════════════════════════════
// Records
// ═══════════════════════════════════════════════════════════

/// One known condition with its defining symptoms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionRecord {
    pub name: String,
    pub symptoms: Vec<String>,
    pub description: String,
    pub severity: Severity,
    pub urgency: Urgency,
    pub common_in: Vec<String>,
    pub recovery: String,
}

/// Reference entry for a medication the treatment path can describe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub name: String,
    /// Brand names and informal spellings matched against patient messages.
    pub aliases: Vec<String>,
    pub dosage_notes: String,
    pub side_effects: Vec<String>,
    pub precautions: Vec<String>,
    pub interactions: Vec<String>,
}

/// Loaded triage knowledge. Condition order is meaningful: ties in match
/// score preserve this insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub conditions: Vec<ConditionRecord>,
    pub symptom_vocabulary: Vec<String>,
    pub medications: Vec<MedicationEntry>,
}

/// Errors from knowledge base loading.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Knowledge parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Knowledge validation failed: {0}")]
    Validation(String),
}

impl KnowledgeBase {
    /// Load a knowledge base from JSON, validating the parts the matcher
    /// relies on.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeError> {
        let kb: KnowledgeBase = serde_json::from_str(json)?;
        if kb.conditions.is_empty() {
            return Err(KnowledgeError::Validation("no conditions".into()));
        }
        if kb.symptom_vocabulary.is_empty() {
            return Err(KnowledgeError::Validation(
                "empty symptom vocabulary".into(),
            ));
        }
        for condition in &kb.conditions {
            if condition.symptoms.is_empty() {
                return Err(KnowledgeError::Validation(format!(
                    "condition '{}' lists no symptoms",
                    condition.name
                )));
            }
        }
        Ok(kb)
    }

    /// Look up a condition by display name, case-insensitive.
    pub fn condition(&self, name: &str) -> Option<&ConditionRecord> {
        let lower = name.to_lowercase();
        self.conditions
            .iter()
            .find(|c| c.name.to_lowercase() == lower)
    }

    /// Look up a medication by name or alias, case-insensitive.
    pub fn medication(&self, term: &str) -> Option<&MedicationEntry> {
        let lower = term.to_lowercase();
        self.medications.iter().find(|m| {
            m.name.to_lowercase() == lower || m.aliases.iter().any(|a| a.to_lowercase() == lower)
        })
    }

    /// The built-in knowledge table.
    pub fn builtin() -> Self {
        Self {
            conditions: builtin_conditions(),
            symptom_vocabulary: SYMPTOM_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            medications: builtin_medications(),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Built-in data
// ═══════════════════════════════════════════════════════════

/// Recognized symptom terms. Matching is a case-insensitive contiguous
/// substring check, so multi-word terms only match as exact phrases.
const SYMPTOM_VOCABULARY: &[&str] = &[
    "fever",
    "cough",
    "headache",
    "fatigue",
    "nausea",
    "vomiting",
    "diarrhea",
    "constipation",
    "chest pain",
    "shortness of breath",
    "dizziness",
    "back pain",
    "joint pain",
    "rash",
    "sore throat",
    "runny nose",
    "sneezing",
    "abdominal pain",
    "loss of appetite",
    "weight loss",
    "insomnia",
    "anxiety",
    "depression",
    "palpitations",
    "chills",
    "sweating",
    "muscle pain",
    "blurred vision",
    "ear pain",
    "congestion",
    "wheezing",
    "heartburn",
    "indigestion",
    "bloating",
    "burning sensation",
    "frequent urination",
    "swelling",
];

fn builtin_conditions() -> Vec<ConditionRecord> {
    fn record(
        name: &str,
        symptoms: &[&str],
        description: &str,
        severity: Severity,
        urgency: Urgency,
        common_in: &[&str],
        recovery: &str,
    ) -> ConditionRecord {
        ConditionRecord {
            name: name.into(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            description: description.into(),
            severity,
            urgency,
            common_in: common_in.iter().map(|s| s.to_string()).collect(),
            recovery: recovery.into(),
        }
    }

    vec![
        record(
            "Common Cold",
            &["runny nose", "sneezing", "cough", "sore throat", "mild fever", "congestion"],
            "Viral infection of the upper respiratory tract",
            Severity::Mild,
            Urgency::Low,
            &["all ages", "seasonal"],
            "7-10 days",
        ),
        record(
            "Influenza",
            &["high fever", "body aches", "fatigue", "dry cough", "headache", "chills", "sweating"],
            "Viral infection affecting respiratory system",
            Severity::Moderate,
            Urgency::Medium,
            &["all ages", "winter season"],
            "1-2 weeks",
        ),
        record(
            "Migraine",
            &["severe headache", "nausea", "sensitivity to light", "sensitivity to sound", "aura"],
            "Neurological condition causing severe headaches",
            Severity::Moderate,
            Urgency::Medium,
            &["adults", "more common in women"],
            "4-72 hours",
        ),
        record(
            "Gastroenteritis",
            &["diarrhea", "vomiting", "stomach pain", "nausea", "fever", "loss of appetite"],
            "Inflammation of stomach and intestines (stomach flu)",
            Severity::Moderate,
            Urgency::Medium,
            &["all ages"],
            "2-5 days",
        ),
        record(
            "Sinusitis",
            &["facial pain", "nasal congestion", "headache", "cough", "post-nasal drip", "fatigue"],
            "Inflammation of the sinuses",
            Severity::Mild,
            Urgency::Low,
            &["adults"],
            "2-4 weeks",
        ),
        record(
            "Bronchitis",
            &["cough", "mucus production", "fatigue", "shortness of breath", "chest discomfort", "wheezing"],
            "Inflammation of the bronchial tubes",
            Severity::Moderate,
            Urgency::Medium,
            &["smokers", "elderly"],
            "3-4 weeks",
        ),
        record(
            "Strep Throat",
            &["sore throat", "fever", "swollen tonsils", "difficulty swallowing", "white patches"],
            "Bacterial infection of the throat",
            Severity::Moderate,
            Urgency::Medium,
            &["children", "young adults"],
            "3-7 days with antibiotics",
        ),
        record(
            "Urinary Tract Infection",
            &["burning sensation", "frequent urination", "cloudy urine", "pelvic pain", "fever"],
            "Infection in any part of urinary system",
            Severity::Moderate,
            Urgency::Medium,
            &["women"],
            "3-7 days with antibiotics",
        ),
        record(
            "Anxiety Disorder",
            &["anxiety", "restlessness", "panic attacks", "insomnia", "muscle tension"],
            "Mental health condition with excessive anxiety",
            Severity::Moderate,
            Urgency::Medium,
            &["all ages"],
            "Varies with treatment",
        ),
    ]
}

fn builtin_medications() -> Vec<MedicationEntry> {
    fn entry(
        name: &str,
        aliases: &[&str],
        dosage_notes: &str,
        side_effects: &[&str],
        precautions: &[&str],
        interactions: &[&str],
    ) -> MedicationEntry {
        MedicationEntry {
            name: name.into(),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
            dosage_notes: dosage_notes.into(),
            side_effects: side_effects.iter().map(|s| s.to_string()).collect(),
            precautions: precautions.iter().map(|s| s.to_string()).collect(),
            interactions: interactions.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        entry(
            "acetaminophen",
            &["tylenol", "paracetamol"],
            "Typical adult dose 500-1000mg every 4-6 hours, not exceeding 3000mg per day",
            &["nausea", "rash"],
            &["Avoid with liver disease", "Do not combine with alcohol"],
            &["warfarin", "other acetaminophen-containing products"],
        ),
        entry(
            "ibuprofen",
            &["advil", "motrin"],
            "Typical adult dose 200-400mg every 4-6 hours with food",
            &["stomach upset", "heartburn", "dizziness"],
            &["Avoid with stomach ulcers or kidney disease", "Take with food"],
            &["aspirin", "blood pressure medications", "blood thinners"],
        ),
        entry(
            "aspirin",
            &["asa"],
            "Typical adult dose 325-650mg every 4 hours as needed",
            &["stomach irritation", "increased bleeding risk"],
            &["Not for children with viral illness", "Avoid before surgery"],
            &["ibuprofen", "anticoagulants", "methotrexate"],
        ),
        entry(
            "loratadine",
            &["claritin"],
            "Typical adult dose 10mg once daily",
            &["headache", "dry mouth", "drowsiness (uncommon)"],
            &["Check with a doctor if pregnant or nursing"],
            &["ketoconazole", "erythromycin"],
        ),
        entry(
            "amoxicillin",
            &["amoxil"],
            "Prescription antibiotic; dose and duration set by the prescriber",
            &["diarrhea", "nausea", "rash"],
            &["Complete the full course", "Tell your doctor about penicillin allergies"],
            &["methotrexate", "oral contraceptives (reduced effect possible)"],
        ),
    ]
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_nine_conditions() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.conditions.len(), 9);
        assert_eq!(kb.conditions[0].name, "Common Cold");
        assert_eq!(kb.conditions[8].name, "Anxiety Disorder");
    }

    #[test]
    fn vocabulary_has_no_duplicates() {
        let kb = KnowledgeBase::builtin();
        let mut seen = std::collections::HashSet::new();
        for term in &kb.symptom_vocabulary {
            assert!(seen.insert(term.clone()), "duplicate term: {term}");
        }
    }

    #[test]
    fn condition_lookup_is_case_insensitive() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.condition("common cold").is_some());
        assert!(kb.condition("MIGRAINE").is_some());
        assert!(kb.condition("dragon pox").is_none());
    }

    #[test]
    fn medication_lookup_resolves_aliases() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.medication("Tylenol").unwrap().name, "acetaminophen");
        assert_eq!(kb.medication("advil").unwrap().name, "ibuprofen");
        assert!(kb.medication("unobtainium").is_none());
    }

    #[test]
    fn common_cold_lists_six_symptoms() {
        // The match-score denominator for Common Cold is 6; two reported
        // symptoms score 2/6 ≈ 0.33.
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.condition("Common Cold").unwrap().symptoms.len(), 6);
    }

    #[test]
    fn json_round_trip() {
        let kb = KnowledgeBase::builtin();
        let json = serde_json::to_string(&kb).unwrap();
        let loaded = KnowledgeBase::from_json(&json).unwrap();
        assert_eq!(loaded.conditions.len(), kb.conditions.len());
        assert_eq!(loaded.symptom_vocabulary, kb.symptom_vocabulary);
    }

    #[test]
    fn from_json_rejects_empty_tables() {
        let err = KnowledgeBase::from_json(
            r#"{"conditions": [], "symptom_vocabulary": ["fever"], "medications": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, KnowledgeError::Validation(_)));

        assert!(KnowledgeBase::from_json("not json").is_err());
    }
}
