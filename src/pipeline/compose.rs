//! Response composition: one builder per intent, each producing the prose
//! message plus the structured data block for that intent.

use tracing::debug;

use super::templates::ResponseTemplates;
use super::{advice, matcher, EngineError};
use crate::knowledge::KnowledgeBase;
use crate::models::{
    ConversationalData, EmergencyContact, EmergencyData, Intent, MedicationInfo, PatientProfile,
    ReportData, ResponseData, ResponsePayload, Severity, SymptomReportData, TreatmentData,
    Urgency,
};
use crate::session::Session;

/// How many medications a single treatment inquiry will describe.
const MAX_MEDICATIONS: usize = 4;

pub struct Composer<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> Composer<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Build the payload for a classified intent. `processing_time` is left
    /// at zero; the orchestrator stamps it.
    pub fn compose(
        &self,
        intent: Intent,
        message: &str,
        symptoms: &[String],
        session: &Session,
        profile: &PatientProfile,
    ) -> Result<ResponsePayload, EngineError> {
        let (text, data) = match intent {
            Intent::Emergency => self.emergency(profile),
            Intent::SymptomReport => self.symptom_report(symptoms, profile),
            Intent::TreatmentInquiry => self.treatment_inquiry(message, profile)?,
            Intent::ReportRequest => self.report_request(profile),
            Intent::Gratitude => self.gratitude(session, profile),
            Intent::Greeting => self.greeting(session, profile),
            Intent::PersonalGreeting => self.personal_greeting(session, profile),
            Intent::Goodbye => self.goodbye(session, profile),
            Intent::Pain => self.pain(profile),
            Intent::Generic => self.generic(profile),
            Intent::Error => return Err(EngineError::Uncomposable("error".into())),
        };

        Ok(ResponsePayload {
            intent,
            message: text,
            data,
            processing_time: 0.0,
            persona: session.persona().name.to_string(),
        })
    }

    // ── Symptom report ───────────────────────────────────

    fn symptom_report(
        &self,
        symptoms: &[String],
        profile: &PatientProfile,
    ) -> (String, ResponseData) {
        let candidates = matcher::rank(symptoms, self.kb);
        let top = candidates.first();

        // Overall urgency/severity: the worst among the candidates, with the
        // original's "medium"/"moderate" defaults when nothing matched.
        let urgency = candidates
            .iter()
            .map(|c| c.urgency)
            .max()
            .unwrap_or(Urgency::Medium);
        let severity = candidates
            .iter()
            .map(|c| c.severity)
            .max()
            .unwrap_or(Severity::Moderate);

        let text = ResponseTemplates::symptom_report(profile, symptoms, top);
        let data = SymptomReportData {
            symptoms: symptoms.to_vec(),
            suggested_diagnosis: top.map(|c| c.name.clone()),
            urgency_level: urgency,
            severity,
            recommended_actions: advice::recommended_actions(urgency),
            recommended_tests: advice::recommended_tests(symptoms),
            treatment_recommendations: advice::treatment_recommendations(symptoms),
            follow_up_advice: advice::follow_up_advice(urgency),
            self_care_tips: advice::self_care_tips(symptoms),
            symptom_tracking_advice: advice::symptom_tracking_advice(symptoms),
            possible_conditions: candidates,
        };
        (text, ResponseData::SymptomReport(data))
    }

    // ── Treatment inquiry ────────────────────────────────

    fn treatment_inquiry(
        &self,
        message: &str,
        profile: &PatientProfile,
    ) -> Result<(String, ResponseData), EngineError> {
        let lower = message.to_lowercase();

        let medications = self.mentioned_medications(&lower);
        if !medications.is_empty() {
            let text = ResponseTemplates::treatment_medications(profile, &medications);
            return Ok((
                text,
                ResponseData::Treatment(TreatmentData::Medications {
                    medications,
                    safety_notes: advice::medication_safety_notes(),
                    when_to_consult: advice::when_to_consult_doctor(),
                }),
            ));
        }

        if let Some(name) = self.mentioned_condition(&lower) {
            let condition = self
                .kb
                .condition(&name)
                .ok_or_else(|| EngineError::UnknownCondition(name.clone()))?;
            let (treatments, lifestyle) = advice::condition_treatments(&condition.name);
            let text = ResponseTemplates::treatment_condition(profile, &condition.name);
            return Ok((
                text,
                ResponseData::Treatment(TreatmentData::Condition {
                    condition: condition.name.clone(),
                    treatments,
                    lifestyle,
                }),
            ));
        }

        let text = ResponseTemplates::treatment_general(profile);
        Ok((
            text,
            ResponseData::Treatment(TreatmentData::General {
                general_advice: advice::general_treatment_advice(),
                when_to_seek_help: advice::when_to_seek_help(),
                home_remedies: advice::home_remedies(),
            }),
        ))
    }

    fn mentioned_medications(&self, lower: &str) -> Vec<MedicationInfo> {
        let mut found = Vec::new();
        for entry in &self.kb.medications {
            let mentioned = lower.contains(&entry.name.to_lowercase())
                || entry.aliases.iter().any(|a| lower.contains(&a.to_lowercase()));
            if mentioned {
                found.push(MedicationInfo {
                    name: entry.name.clone(),
                    dosage_notes: entry.dosage_notes.clone(),
                    side_effects: entry.side_effects.clone(),
                    precautions: entry.precautions.clone(),
                    interactions: entry.interactions.clone(),
                });
                if found.len() == MAX_MEDICATIONS {
                    break;
                }
            }
        }
        found
    }

    fn mentioned_condition(&self, lower: &str) -> Option<String> {
        self.kb
            .conditions
            .iter()
            .map(|c| c.name.clone())
            .find(|name| lower.contains(&name.to_lowercase()))
    }

    // ── Report request ───────────────────────────────────

    fn report_request(&self, profile: &PatientProfile) -> (String, ResponseData) {
        let text = ResponseTemplates::report_request(profile);
        let data = ReportData {
            can_generate: true,
            included_sections: [
                "Patient Information & History",
                "Detailed Symptom Analysis",
                "Possible Diagnoses with Confidence Levels",
                "Personalized Treatment Plan",
                "Recommended Medical Tests",
                "Follow-up Instructions",
                "Emergency Contact Information",
                "Doctor's Summary Notes",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            estimated_time: "15-30 seconds".into(),
            format: "PDF (Printable & Shareable)".into(),
        };
        (text, ResponseData::Report(data))
    }

    // ── Emergency ────────────────────────────────────────

    fn emergency(&self, profile: &PatientProfile) -> (String, ResponseData) {
        let text = ResponseTemplates::emergency(profile);
        let data = EmergencyData {
            is_emergency: true,
            emergency_number: "911".into(),
            additional_contacts: vec![
                EmergencyContact {
                    name: "Poison Control".into(),
                    number: "1-800-222-1222".into(),
                },
                EmergencyContact {
                    name: "Suicide Prevention Lifeline".into(),
                    number: "988".into(),
                },
                EmergencyContact {
                    name: "Crisis Text Line".into(),
                    number: "Text HOME to 741741".into(),
                },
            ],
            immediate_actions: [
                "Call emergency services",
                "Do not drive yourself",
                "Stay on the line with operator",
                "Unlock door if alone",
                "Sit or lie down if feeling faint",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        };
        (text, ResponseData::Emergency(data))
    }

    // ── Conversational intents ───────────────────────────

    fn gratitude(&self, session: &Session, profile: &PatientProfile) -> (String, ResponseData) {
        let persona = session.persona();
        let referenced = session
            .last_symptom_report()
            .and_then(|report| report.suggested_diagnosis);

        let text = match &referenced {
            Some(condition) => {
                debug!(condition = condition.as_str(), "gratitude references prior report");
                ResponseTemplates::gratitude_with_condition(profile, &persona, condition)
            }
            None => ResponseTemplates::gratitude(profile, &persona),
        };
        let data = ConversationalData {
            referenced_condition: referenced,
            return_visit: false,
            follow_up_available: true,
        };
        (text, ResponseData::Conversational(data))
    }

    fn greeting(&self, session: &Session, profile: &PatientProfile) -> (String, ResponseData) {
        let persona = session.persona();
        // The original treated a longer history as a return visit mid-session.
        let return_visit = session.history_len() > 5;
        let text = if return_visit {
            ResponseTemplates::greeting_return(profile, &persona)
        } else {
            ResponseTemplates::greeting(profile, &persona)
        };
        let data = ConversationalData {
            referenced_condition: None,
            return_visit,
            follow_up_available: true,
        };
        (text, ResponseData::Conversational(data))
    }

    fn personal_greeting(
        &self,
        session: &Session,
        profile: &PatientProfile,
    ) -> (String, ResponseData) {
        let persona = session.persona();
        let variants = ResponseTemplates::personal_greeting_variants(profile, &persona);
        let pick = session.pick_index(variants.len());
        let text = variants[pick].clone();
        (
            text,
            ResponseData::Conversational(ConversationalData {
                follow_up_available: true,
                ..Default::default()
            }),
        )
    }

    fn goodbye(&self, session: &Session, profile: &PatientProfile) -> (String, ResponseData) {
        let text = ResponseTemplates::goodbye(profile, &session.persona());
        (
            text,
            ResponseData::Conversational(ConversationalData::default()),
        )
    }

    fn pain(&self, profile: &PatientProfile) -> (String, ResponseData) {
        let text = ResponseTemplates::pain(profile);
        (
            text,
            ResponseData::Conversational(ConversationalData {
                follow_up_available: true,
                ..Default::default()
            }),
        )
    }

    fn generic(&self, profile: &PatientProfile) -> (String, ResponseData) {
        let text = ResponseTemplates::generic(profile);
        (
            text,
            ResponseData::Conversational(ConversationalData {
                follow_up_available: true,
                ..Default::default()
            }),
        )
    }
}
