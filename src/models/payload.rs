use serde::{Deserialize, Serialize};

use super::enums::{Intent, Severity, Urgency};

// ═══════════════════════════════════════════════════════════
// Match results
// ═══════════════════════════════════════════════════════════

/// One ranked condition candidate, denormalized for display.
///
/// `match_score` is the fraction of the condition's listed symptoms that were
/// reported, in [0, 1] and rounded to two decimals. A score of 1.0 means every
/// listed symptom was reported — it never means the condition is certain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub match_score: f64,
    pub description: String,
    pub severity: Severity,
    pub urgency: Urgency,
    pub common_in: Vec<String>,
    pub recovery: String,
}

// ═══════════════════════════════════════════════════════════
// Per-intent data blocks
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomReportData {
    pub symptoms: Vec<String>,
    /// Top 5 candidates, best match first.
    pub possible_conditions: Vec<MatchResult>,
    /// Name of the best match, absent when nothing cleared the threshold.
    pub suggested_diagnosis: Option<String>,
    pub urgency_level: Urgency,
    pub severity: Severity,
    pub recommended_actions: Vec<String>,
    pub recommended_tests: Vec<String>,
    pub treatment_recommendations: Vec<String>,
    pub follow_up_advice: String,
    pub self_care_tips: Vec<String>,
    pub symptom_tracking_advice: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationInfo {
    pub name: String,
    pub dosage_notes: String,
    pub side_effects: Vec<String>,
    pub precautions: Vec<String>,
    pub interactions: Vec<String>,
}

/// Treatment inquiries resolve to exactly one of three shapes, depending on
/// what the message named: medications, a known condition, or neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreatmentData {
    Medications {
        medications: Vec<MedicationInfo>,
        safety_notes: Vec<String>,
        when_to_consult: Vec<String>,
    },
    Condition {
        condition: String,
        treatments: Vec<String>,
        lifestyle: Vec<String>,
    },
    General {
        general_advice: Vec<String>,
        when_to_seek_help: Vec<String>,
        home_remedies: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub can_generate: bool,
    pub included_sections: Vec<String>,
    pub estimated_time: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyData {
    pub is_emergency: bool,
    pub emergency_number: String,
    pub additional_contacts: Vec<EmergencyContact>,
    pub immediate_actions: Vec<String>,
}

/// Small continuity flags carried by the conversational intents
/// (gratitude, greetings, goodbye, pain, generic).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationalData {
    /// Condition referenced from an earlier symptom report, if any.
    pub referenced_condition: Option<String>,
    /// Whether the greeting recognized a longer-running session.
    pub return_visit: bool,
    pub follow_up_available: bool,
}

// ═══════════════════════════════════════════════════════════
// Payload
// ═══════════════════════════════════════════════════════════

/// Structured data block, shaped by intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseData {
    SymptomReport(SymptomReportData),
    Treatment(TreatmentData),
    Report(ReportData),
    Emergency(EmergencyData),
    Conversational(ConversationalData),
    /// Degraded path: no data survived the failure.
    Empty,
}

/// One complete engine reply: intent tag, prose, structured data, and the
/// bookkeeping every payload carries (elapsed seconds, persona identifier).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub intent: Intent,
    pub message: String,
    pub data: ResponseData,
    /// Elapsed seconds, rounded to three decimals. Recomputed on cache hits.
    pub processing_time: f64,
    pub persona: String,
}

impl ResponsePayload {
    /// Equality ignoring `processing_time`, which varies per call.
    pub fn same_content(&self, other: &Self) -> bool {
        self.intent == other.intent
            && self.message == other.message
            && self.data == other.data
            && self.persona == other.persona
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> ResponsePayload {
        ResponsePayload {
            intent: Intent::Emergency,
            message: "Call for help now.".into(),
            data: ResponseData::Emergency(EmergencyData {
                is_emergency: true,
                emergency_number: "911".into(),
                additional_contacts: vec![EmergencyContact {
                    name: "Poison Control".into(),
                    number: "1-800-222-1222".into(),
                }],
                immediate_actions: vec!["Call emergency services".into()],
            }),
            processing_time: 0.042,
            persona: "Dr. Smith".into(),
        }
    }

    #[test]
    fn payload_serializes_with_intent_tag() {
        let json = serde_json::to_string(&sample_payload()).unwrap();
        assert!(json.contains("\"intent\":\"emergency\""));
        assert!(json.contains("\"emergency_number\":\"911\""));
        assert!(json.contains("\"processing_time\":0.042"));
    }

    #[test]
    fn same_content_ignores_processing_time() {
        let a = sample_payload();
        let mut b = sample_payload();
        b.processing_time = 9.999;
        assert!(a.same_content(&b));

        b.message = "different".into();
        assert!(!a.same_content(&b));
    }

    #[test]
    fn treatment_data_tags_its_shape() {
        let data = TreatmentData::General {
            general_advice: vec!["Rest".into()],
            when_to_seek_help: vec![],
            home_remedies: vec![],
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"kind\":\"general\""));
    }
}
