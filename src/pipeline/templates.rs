//! Prose templates, one per intent, all phrased through the session persona.
//! Wording around condition matches stays tentative: a high match score is
//! an overlap of reported symptoms, never a confirmed diagnosis, and the
//! text must not imply otherwise.

use crate::models::{MatchResult, MedicationInfo, PatientProfile};
use crate::session::Persona;

pub struct ResponseTemplates;

impl ResponseTemplates {
    /// Personalized session opener, varying with the hour of day (0-23).
    pub fn welcome(profile: &PatientProfile, persona: &Persona, hour: u32) -> String {
        let time_greeting = match hour {
            0..=11 => "Good morning",
            12..=16 => "Good afternoon",
            _ => "Good evening",
        };
        let name = profile.display_name();
        let age = profile.age_display();
        let gender = profile.gender_display();
        let intro = if age.is_empty() && gender.is_empty() {
            String::new()
        } else {
            format!("I see you're {age} years old, {gender}. ")
        };

        format!(
            "{time_greeting} {name}! {}\n\n\
             I'm {}, your medical assistant. {intro}I'm here to listen and help you feel better.\n\n\
             Please tell me what symptoms you're experiencing, when they started, \
             and anything that makes them better or worse. Take your time — \
             what would you like to share first?",
            persona.emoji, persona.name,
        )
    }

    pub fn symptom_report(
        profile: &PatientProfile,
        symptoms: &[String],
        top: Option<&MatchResult>,
    ) -> String {
        let name = profile.display_name();
        let listed = symptoms.join(", ");
        match top {
            Some(best) => format!(
                "Thank you for describing that, {name}. Based on {listed}, the closest \
                 match in what I know is {} — {}. That's a pattern match, not a diagnosis: \
                 only a clinician who examines you can confirm it. Typical recovery is {}. \
                 I've put together some suggestions below.",
                best.name,
                best.description.to_lowercase(),
                best.recovery,
            ),
            None => format!(
                "Thank you for telling me, {name}. I noted {listed}, but I don't have \
                 enough information yet to point to a likely condition — that is not the \
                 same as being in the clear. Could you tell me more about how it feels \
                 and when it started?"
            ),
        }
    }

    pub fn treatment_medications(profile: &PatientProfile, medications: &[MedicationInfo]) -> String {
        let names: Vec<&str> = medications.iter().map(|m| m.name.as_str()).collect();
        format!(
            "Here's what I can share about {}, {}. This is general reference \
             information — your pharmacist or doctor should have the final word on \
             what's right for you. The details, including side effects and \
             precautions, are listed below.",
            names.join(", "),
            profile.display_name(),
        )
    }

    pub fn treatment_condition(profile: &PatientProfile, condition: &str) -> String {
        format!(
            "Good question, {}. Here's how {} is usually approached. Keep in mind \
             this is general guidance; the right treatment depends on a proper \
             assessment.",
            profile.display_name(),
            condition.to_lowercase(),
        )
    }

    pub fn treatment_general(profile: &PatientProfile) -> String {
        format!(
            "Happy to help with treatment questions, {}. Without a specific \
             medication or condition to look up, here is some general guidance — \
             and please loop in a doctor or pharmacist before starting anything new.",
            profile.display_name(),
        )
    }

    pub fn report_request(profile: &PatientProfile) -> String {
        format!(
            "I'd be happy to prepare a consultation report for you, {}. It will \
             cover your reported symptoms, the conditions we discussed with their \
             match levels, suggested tests, and follow-up notes for your healthcare \
             provider. It's a summary of our conversation, not a medical record.",
            profile.display_name(),
        )
    }

    pub fn emergency(profile: &PatientProfile) -> String {
        format!(
            "🚨 {}, this sounds like it could be a MEDICAL EMERGENCY.\n\n\
             CALL 911 or your local emergency number RIGHT NOW. Do not drive \
             yourself. Stay on the line with the operator and follow their \
             instructions. If you're alone, unlock your door and sit or lie down \
             while you wait.\n\n\
             I'm an assistant and cannot provide emergency care — professional help \
             is what you need right now. Please call immediately.",
            profile.display_name(),
        )
    }

    pub fn gratitude_with_condition(
        profile: &PatientProfile,
        persona: &Persona,
        condition: &str,
    ) -> String {
        format!(
            "You're very welcome, {}! {} I'm glad I could help you understand more \
             about {}. Be kind to yourself as you recover, follow the suggestions we \
             discussed, and come back any time if symptoms change. Is there anything \
             else on your mind today?",
            profile.display_name(),
            persona.emoji,
            condition.to_lowercase(),
        )
    }

    pub fn gratitude(profile: &PatientProfile, persona: &Persona) -> String {
        format!(
            "You're most welcome, {}! {} Taking care of your health is one of the \
             best things you can do for yourself. I'm here whenever you want to \
             discuss new symptoms, clarify anything, or just check in. What else can \
             I help with today?",
            profile.display_name(),
            persona.emoji,
        )
    }

    pub fn greeting_return(profile: &PatientProfile, persona: &Persona) -> String {
        format!(
            "Welcome back, {}! {} How are you feeling since we last spoke — better, \
             the same, or worse? Did you get a chance to try any of the suggestions \
             we discussed? I'm here to pick up wherever you'd like.",
            profile.display_name(),
            persona.emoji,
        )
    }

    pub fn greeting(profile: &PatientProfile, persona: &Persona) -> String {
        format!(
            "{} {}! {} Nice to continue our conversation. How are you feeling right \
             now? If anything has changed since before, or something new is on your \
             mind, I'm listening.",
            persona.greeting,
            profile.display_name(),
            persona.emoji,
        )
    }

    /// The three personal-greeting phrasings; the session picks one.
    pub fn personal_greeting_variants(
        profile: &PatientProfile,
        persona: &Persona,
    ) -> [String; 3] {
        let name = profile.display_name();
        let emoji = persona.emoji;
        [
            format!(
                "I'm doing well, thank you for asking! {emoji} Just here ready to \
                 help you, {name}. How are you feeling today?"
            ),
            format!(
                "Thanks for asking! I'm here and fully operational, ready to assist \
                 with your health concerns. How about you, {name} — how are you \
                 feeling right now?"
            ),
            format!(
                "I'm doing great, focused on helping you feel better! {emoji} How \
                 has your day been so far, {name}, in terms of how you're feeling?"
            ),
        ]
    }

    pub fn goodbye(profile: &PatientProfile, persona: &Persona) -> String {
        format!(
            "Goodbye, {}! {} It was a pleasure speaking with you. Take good care of \
             yourself, follow through on what we discussed, and don't hesitate to \
             return if symptoms change. Feel better soon! 🌟",
            profile.display_name(),
            persona.emoji,
        )
    }

    pub fn pain(profile: &PatientProfile) -> String {
        format!(
            "I hear you're in pain, {}, and I'm sorry — pain is your body asking \
             for attention, and you're right to address it. While we talk: find a \
             comfortable position, breathe slowly, and avoid movements that make it \
             worse. To help me understand, where is the pain, what does it feel \
             like (sharp, dull, throbbing, burning), and how strong is it from 1 \
             to 10?",
            profile.display_name(),
        )
    }

    pub fn generic(profile: &PatientProfile) -> String {
        format!(
            "Thanks for sharing that, {}. I want to make sure I understand — could \
             you tell me a bit more? If you're experiencing any symptoms, describe \
             them in your own words and I'll see what I can find.",
            profile.display_name(),
        )
    }

    /// Fixed-shape degraded reply used when something inside the engine fails.
    pub fn degraded(profile: &PatientProfile) -> String {
        format!(
            "I'm sorry, {} — something went wrong on my side while handling that. \
             Nothing you said caused it. Could you try rephrasing? If you have \
             urgent symptoms, please contact a healthcare provider directly.",
            profile.display_name(),
        )
    }
}
