//! Deterministic advice lookups. Everything here is a fixed table keyed by
//! urgency level or symptom term — no scoring, no randomness — so the same
//! inputs always produce the same advice.

use crate::models::Urgency;

/// Recommended actions for an overall urgency level.
pub fn recommended_actions(urgency: Urgency) -> Vec<String> {
    let actions: &[&str] = match urgency {
        Urgency::High => &[
            "Contact a healthcare provider today",
            "Avoid strenuous activity until you have been seen",
            "Have someone stay with you if symptoms escalate",
        ],
        Urgency::Medium => &[
            "Schedule a medical appointment within the next few days",
            "Rest and stay hydrated",
            "Monitor your symptoms for any change",
        ],
        Urgency::Low => &[
            "Self-care at home is usually sufficient",
            "Rest, fluids, and over-the-counter relief as needed",
            "See a doctor if symptoms persist beyond two weeks",
        ],
    };
    to_strings(actions)
}

/// Follow-up timing for an overall urgency level.
pub fn follow_up_advice(urgency: Urgency) -> String {
    match urgency {
        Urgency::High => {
            "Please follow up with a healthcare provider within 24 hours, sooner if symptoms worsen."
        }
        Urgency::Medium => {
            "Check in with a doctor within 2-3 days if symptoms have not started improving."
        }
        Urgency::Low => {
            "Follow up only if symptoms last longer than expected or new ones appear."
        }
    }
    .to_string()
}

/// Tests worth discussing with a clinician, derived from reported symptoms.
pub fn recommended_tests(symptoms: &[String]) -> Vec<String> {
    const TABLE: &[(&str, &str)] = &[
        ("fever", "Complete blood count (CBC)"),
        ("chills", "Complete blood count (CBC)"),
        ("cough", "Chest X-ray"),
        ("shortness of breath", "Chest X-ray"),
        ("wheezing", "Chest X-ray"),
        ("headache", "Blood pressure measurement"),
        ("blurred vision", "Blood pressure measurement"),
        ("dizziness", "Blood pressure measurement"),
        ("sore throat", "Rapid strep test"),
        ("burning sensation", "Urinalysis"),
        ("frequent urination", "Urinalysis"),
        ("diarrhea", "Stool analysis and electrolyte panel"),
        ("vomiting", "Stool analysis and electrolyte panel"),
        ("fatigue", "Thyroid function panel"),
        ("weight loss", "Thyroid function panel"),
        ("chest pain", "Electrocardiogram (ECG)"),
        ("palpitations", "Electrocardiogram (ECG)"),
        ("anxiety", "Mental health screening questionnaire"),
        ("insomnia", "Mental health screening questionnaire"),
        ("depression", "Mental health screening questionnaire"),
    ];

    let mut tests = Vec::new();
    for (symptom, test) in TABLE {
        if symptoms.iter().any(|s| s == symptom) && !tests.contains(&test.to_string()) {
            tests.push(test.to_string());
        }
    }
    if tests.is_empty() {
        tests.push("Routine physical examination".to_string());
    }
    tests
}

/// Self-care tips, derived from reported symptoms with general fallbacks.
pub fn self_care_tips(symptoms: &[String]) -> Vec<String> {
    const TABLE: &[(&str, &str)] = &[
        ("fever", "Keep cool and drink plenty of fluids"),
        ("cough", "Warm drinks with honey can ease a cough"),
        ("sore throat", "Gargle with warm salt water"),
        ("congestion", "Steam inhalation can relieve congestion"),
        ("runny nose", "Steam inhalation can relieve congestion"),
        ("nausea", "Small, bland meals are easier to keep down"),
        ("diarrhea", "Oral rehydration is the priority"),
        ("vomiting", "Oral rehydration is the priority"),
        ("headache", "Rest in a quiet, dim room"),
        ("insomnia", "Keep a consistent sleep schedule and avoid screens late"),
        ("anxiety", "Slow breathing exercises can take the edge off"),
    ];

    let mut tips = Vec::new();
    for (symptom, tip) in TABLE {
        if symptoms.iter().any(|s| s == symptom) && !tips.contains(&tip.to_string()) {
            tips.push(tip.to_string());
        }
    }
    if tips.is_empty() {
        tips.push("Prioritize rest, hydration, and regular meals".to_string());
    }
    tips
}

/// General, non-prescriptive treatment suggestions for the reported set.
pub fn treatment_recommendations(symptoms: &[String]) -> Vec<String> {
    let mut recs = vec![
        "Rest and adequate hydration support recovery for most conditions".to_string(),
    ];
    if symptoms.iter().any(|s| s == "fever" || s == "headache" || s == "muscle pain") {
        recs.push(
            "Over-the-counter pain and fever relief may help; follow package directions"
                .to_string(),
        );
    }
    if symptoms.iter().any(|s| s == "congestion" || s == "runny nose" || s == "sneezing") {
        recs.push("Saline rinses or decongestants can ease nasal symptoms".to_string());
    }
    recs.push(
        "Discuss any new medication with a pharmacist or doctor before starting".to_string(),
    );
    recs
}

/// What to track until the next check-in.
pub fn symptom_tracking_advice(symptoms: &[String]) -> Vec<String> {
    let mut advice = vec![
        "Note when each symptom started and whether it is improving or worsening".to_string(),
    ];
    if symptoms.iter().any(|s| s == "fever" || s == "chills") {
        advice.push("Take your temperature twice a day and write it down".to_string());
    }
    if symptoms.len() > 1 {
        advice.push("Track which symptoms appear together — patterns help a doctor".to_string());
    }
    advice
}

// ── Treatment-inquiry blocks ─────────────────────────────

pub fn medication_safety_notes() -> Vec<String> {
    to_strings(&[
        "This is general reference information, not a prescription",
        "Always read the label and follow dosing directions",
        "Tell your doctor or pharmacist about every medication you already take",
    ])
}

pub fn when_to_consult_doctor() -> Vec<String> {
    to_strings(&[
        "Before combining medications",
        "If you are pregnant, nursing, or managing a chronic condition",
        "If symptoms persist or worsen despite treatment",
    ])
}

pub fn general_treatment_advice() -> Vec<String> {
    to_strings(&[
        "Most mild illnesses respond to rest, fluids, and time",
        "Treat the symptoms that bother you most rather than everything at once",
        "Keep a list of what you take and when, to share with your doctor",
    ])
}

pub fn when_to_seek_help() -> Vec<String> {
    to_strings(&[
        "Symptoms that worsen rapidly or last beyond two weeks",
        "High fever that does not respond to medication",
        "Difficulty breathing, chest pain, or confusion — call emergency services",
    ])
}

pub fn home_remedies() -> Vec<String> {
    to_strings(&[
        "Warm fluids, honey, and rest for coughs and sore throats",
        "A cool compress for headaches",
        "Bland food (bananas, rice, toast) for an unsettled stomach",
    ])
}

/// Condition-specific treatment and lifestyle notes, keyed by display name.
pub fn condition_treatments(condition: &str) -> (Vec<String>, Vec<String>) {
    match condition.to_lowercase().as_str() {
        "common cold" => (
            to_strings(&[
                "Rest and fluids; the infection clears on its own",
                "Decongestants or saline rinses for a blocked nose",
            ]),
            to_strings(&["Wash hands often to avoid spreading it"]),
        ),
        "influenza" => (
            to_strings(&[
                "Rest, fluids, and fever control",
                "Antiviral medication may help if started early — ask a doctor",
            ]),
            to_strings(&["Stay home until fever-free for 24 hours"]),
        ),
        "migraine" => (
            to_strings(&[
                "Rest in a dark, quiet room at onset",
                "Pain relief works best taken early in the attack",
            ]),
            to_strings(&["Keep a trigger diary (sleep, food, stress)"]),
        ),
        "gastroenteritis" => (
            to_strings(&[
                "Oral rehydration is the main treatment",
                "Reintroduce bland food gradually",
            ]),
            to_strings(&["Strict hand hygiene while symptomatic"]),
        ),
        "strep throat" | "urinary tract infection" => (
            to_strings(&[
                "Usually treated with prescription antibiotics — see a doctor",
                "Complete the full antibiotic course once started",
            ]),
            to_strings(&["Plenty of fluids while recovering"]),
        ),
        "anxiety disorder" => (
            to_strings(&[
                "Talking therapies are a first-line treatment",
                "A doctor can discuss whether medication is appropriate",
            ]),
            to_strings(&["Regular exercise and sleep routines help"]),
        ),
        _ => (
            to_strings(&["Treatment depends on a clinical assessment — please see a doctor"]),
            to_strings(&["Rest and monitor your symptoms meanwhile"]),
        ),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
