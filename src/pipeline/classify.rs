//! Intent classification over ordered keyword rules.
//!
//! Emergency keywords are checked unconditionally first: a message containing
//! both "headache" and "can't breathe" is always an emergency. After that,
//! the first matching rule wins. Checks are lowercase substring matches
//! against the whole message (not tokenized), so partial-word collisions
//! ("shipment" contains "hi") are possible — a known, accepted imprecision.

use crate::models::Intent;

const EMERGENCY_KEYWORDS: &[&str] = &[
    "emergency",
    "911",
    "heart attack",
    "stroke",
    "bleeding",
    "unconscious",
    "can't breathe",
];

const TREATMENT_KEYWORDS: &[&str] = &["treatment", "medicine", "medication", "prescription", "drug"];

const REPORT_KEYWORDS: &[&str] = &["report", "summary", "record", "download", "document"];

const GRATITUDE_KEYWORDS: &[&str] = &["thank", "thanks", "appreciate", "grateful"];

const GREETING_KEYWORDS: &[&str] = &["hi", "hello", "hey", "greetings", "morning", "afternoon"];

const PERSONAL_GREETING_KEYWORDS: &[&str] = &["how are you", "how do you do"];

const FAREWELL_KEYWORDS: &[&str] = &["bye", "goodbye", "see you", "farewell"];

const PAIN_KEYWORDS: &[&str] = &["pain", "hurt", "ache", "uncomfortable"];

/// Classify a patient message. `has_symptoms` is whether the extractor found
/// recognized symptom terms; it outranks every rule except the emergency one.
pub fn classify(text: &str, has_symptoms: bool) -> Intent {
    let lower = text.to_lowercase();

    if contains_any(&lower, EMERGENCY_KEYWORDS) {
        return Intent::Emergency;
    }
    if has_symptoms {
        return Intent::SymptomReport;
    }
    if contains_any(&lower, TREATMENT_KEYWORDS) {
        return Intent::TreatmentInquiry;
    }
    if contains_any(&lower, REPORT_KEYWORDS) {
        return Intent::ReportRequest;
    }
    if contains_any(&lower, GRATITUDE_KEYWORDS) {
        return Intent::Gratitude;
    }
    if contains_any(&lower, GREETING_KEYWORDS) {
        return Intent::Greeting;
    }
    if contains_any(&lower, PERSONAL_GREETING_KEYWORDS) {
        return Intent::PersonalGreeting;
    }
    if contains_any(&lower, FAREWELL_KEYWORDS) {
        return Intent::Goodbye;
    }
    if contains_any(&lower, PAIN_KEYWORDS) {
        return Intent::Pain;
    }

    Intent::Generic
}

/// True when any keyword rule other than the symptom one would claim this
/// (already lowercased) message. Gates the extractor's history carry-forward
/// so a "thank you" after a diagnosis is not re-read as a symptom report.
pub fn has_non_symptom_pattern(lower: &str) -> bool {
    [
        EMERGENCY_KEYWORDS,
        TREATMENT_KEYWORDS,
        REPORT_KEYWORDS,
        GRATITUDE_KEYWORDS,
        GREETING_KEYWORDS,
        PERSONAL_GREETING_KEYWORDS,
        FAREWELL_KEYWORDS,
        PAIN_KEYWORDS,
    ]
    .iter()
    .any(|set| contains_any(lower, set))
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
