//! Per-conversation state: the persona chosen at session start, the
//! append-only turn history, and the bounded response cache.
//!
//! Key properties:
//! - Persona is picked once from a fixed set and never changes mid-session
//! - History is append-only and consulted only for continuity heuristics
//! - Cache evicts oldest-inserted first (insertion order, not access order)
//! - Cache and history sit behind a `Mutex`, so a session shared across
//!   threads has no data race — the only concurrency contract here
//! - All randomness (persona, phrasing picks, delay jitter) draws from one
//!   seeded generator, so tests can assert exact outputs

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::{Intent, ResponseData, ResponsePayload, SymptomReportData};

// ═══════════════════════════════════════════════════════════
// Persona
// ═══════════════════════════════════════════════════════════

/// Fixed display identity used in all templated prose for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub name: &'static str,
    pub tone: &'static str,
    pub emoji: &'static str,
    pub greeting: &'static str,
}

/// The assistant personas a session can be assigned.
pub const PERSONAS: [Persona; 3] = [
    Persona {
        name: "Dr. Smith",
        tone: "warm",
        emoji: "👨‍⚕️",
        greeting: "Hello there",
    },
    Persona {
        name: "Dr. Johnson",
        tone: "professional",
        emoji: "👩‍⚕️",
        greeting: "Good day",
    },
    Persona {
        name: "Dr. Patel",
        tone: "friendly",
        emoji: "🩺",
        greeting: "Hi there",
    },
];

// ═══════════════════════════════════════════════════════════
// Turns
// ═══════════════════════════════════════════════════════════

/// One processed message and the payload it produced. Append-only,
/// never mutated retroactively.
#[derive(Debug, Clone)]
pub struct ConversationTurn {
    pub id: Uuid,
    pub message: String,
    pub payload: ResponsePayload,
    pub created_at: NaiveDateTime,
}

// ═══════════════════════════════════════════════════════════
// Response cache
// ═══════════════════════════════════════════════════════════

/// Bounded response cache, evicting oldest-inserted first.
///
/// Known gap, preserved deliberately: the key truncates the normalized
/// message to its first 50 characters, so two long messages sharing a
/// 50-character prefix (same patient name) collide and the second returns
/// the first's payload. Scores themselves are recomputed whenever
/// extraction runs; only this prefix collision can serve a stale diagnosis.
#[derive(Debug)]
pub struct ResponseCache {
    capacity: usize,
    order: VecDeque<String>,
    entries: HashMap<String, ResponsePayload>,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::new(),
            entries: HashMap::new(),
        }
    }

    /// Cache key: first 50 characters of the lowercased, trimmed message,
    /// joined with the patient's display name.
    pub fn key(message: &str, patient_name: &str) -> String {
        let normalized = message.to_lowercase();
        let prefix: String = normalized.trim().chars().take(50).collect();
        format!("{prefix}_{patient_name}")
    }

    pub fn get(&self, key: &str) -> Option<ResponsePayload> {
        self.entries.get(key).cloned()
    }

    pub fn insert(&mut self, key: String, payload: ResponsePayload) {
        if !self.entries.contains_key(&key) {
            self.order.push_back(key.clone());
        }
        self.entries.insert(key, payload);
        while self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════
// Session
// ═══════════════════════════════════════════════════════════

struct SessionState {
    history: Vec<ConversationTurn>,
    cache: ResponseCache,
    rng: StdRng,
}

/// One ongoing interaction: persona, history, and cache.
///
/// State is private to the session; nothing is shared across sessions.
pub struct Session {
    id: Uuid,
    started_at: NaiveDateTime,
    persona: Persona,
    state: Mutex<SessionState>,
}

impl Session {
    /// Create a session, choosing the persona from the seeded generator.
    /// The same seed always yields the same persona and phrasing picks.
    pub fn new(config: &EngineConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let persona = PERSONAS[rng.gen_range(0..PERSONAS.len())];
        Self {
            id: Uuid::new_v4(),
            started_at: Local::now().naive_local(),
            persona,
            state: Mutex::new(SessionState {
                history: Vec::new(),
                cache: ResponseCache::new(config.cache_capacity),
                rng,
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> NaiveDateTime {
        self.started_at
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    fn state(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── History ──────────────────────────────────────────

    pub fn history_len(&self) -> usize {
        self.state().history.len()
    }

    /// Append a processed turn. History is never rewritten.
    pub fn record_turn(&self, message: &str, payload: ResponsePayload) {
        let mut state = self.state();
        state.history.push(ConversationTurn {
            id: Uuid::new_v4(),
            message: message.to_string(),
            payload,
            created_at: Local::now().naive_local(),
        });
    }

    /// The most recent symptom-report data, scanning newest-first.
    pub fn last_symptom_report(&self) -> Option<SymptomReportData> {
        let state = self.state();
        state.history.iter().rev().find_map(|turn| {
            match (&turn.payload.intent, &turn.payload.data) {
                (Intent::SymptomReport, ResponseData::SymptomReport(data)) => Some(data.clone()),
                _ => None,
            }
        })
    }

    /// Symptoms from the immediately preceding turn, if it was a symptom
    /// report. Feeds the extractor's best-effort carry-forward.
    pub fn previous_turn_symptoms(&self) -> Option<Vec<String>> {
        let state = self.state();
        match state.history.last().map(|turn| &turn.payload) {
            Some(ResponsePayload {
                intent: Intent::SymptomReport,
                data: ResponseData::SymptomReport(data),
                ..
            }) => Some(data.symptoms.clone()),
            _ => None,
        }
    }

    // ── Cache ────────────────────────────────────────────

    pub fn cache_get(&self, key: &str) -> Option<ResponsePayload> {
        self.state().cache.get(key)
    }

    pub fn cache_insert(&self, key: String, payload: ResponsePayload) {
        self.state().cache.insert(key, payload);
    }

    pub fn cache_len(&self) -> usize {
        self.state().cache.len()
    }

    // ── Seeded randomness ────────────────────────────────

    /// Pick an index in `0..len` from the session generator.
    pub fn pick_index(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.state().rng.gen_range(0..len)
    }

    /// Sample a delay duration in `min..=max` milliseconds.
    pub fn sample_delay_ms(&self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        self.state().rng.gen_range(min..=max)
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConversationalData;

    fn payload(intent: Intent, message: &str) -> ResponsePayload {
        ResponsePayload {
            intent,
            message: message.into(),
            data: ResponseData::Conversational(ConversationalData::default()),
            processing_time: 0.0,
            persona: "Dr. Smith".into(),
        }
    }

    fn symptom_payload(symptoms: &[&str], diagnosis: &str) -> ResponsePayload {
        ResponsePayload {
            intent: Intent::SymptomReport,
            message: "noted".into(),
            data: ResponseData::SymptomReport(SymptomReportData {
                symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
                possible_conditions: vec![],
                suggested_diagnosis: Some(diagnosis.into()),
                urgency_level: crate::models::Urgency::Medium,
                severity: crate::models::Severity::Moderate,
                recommended_actions: vec![],
                recommended_tests: vec![],
                treatment_recommendations: vec![],
                follow_up_advice: String::new(),
                self_care_tips: vec![],
                symptom_tracking_advice: vec![],
            }),
            processing_time: 0.0,
            persona: "Dr. Smith".into(),
        }
    }

    #[test]
    fn same_seed_yields_same_persona() {
        let config = EngineConfig::for_tests();
        let a = Session::new(&config, 7);
        let b = Session::new(&config, 7);
        assert_eq!(a.persona(), b.persona());
    }

    #[test]
    fn persona_is_stable_for_session_lifetime() {
        let session = Session::new(&EngineConfig::for_tests(), 1);
        let chosen = session.persona();
        session.record_turn("hi", payload(Intent::Greeting, "hello"));
        assert_eq!(session.persona(), chosen);
    }

    #[test]
    fn history_appends_in_order() {
        let session = Session::new(&EngineConfig::for_tests(), 1);
        session.record_turn("first", payload(Intent::Generic, "a"));
        session.record_turn("second", payload(Intent::Generic, "b"));
        assert_eq!(session.history_len(), 2);
    }

    #[test]
    fn last_symptom_report_scans_newest_first() {
        let session = Session::new(&EngineConfig::for_tests(), 1);
        session.record_turn("headache", symptom_payload(&["headache"], "Sinusitis"));
        session.record_turn("nausea", symptom_payload(&["nausea"], "Migraine"));
        session.record_turn("thanks", payload(Intent::Gratitude, "welcome"));

        let report = session.last_symptom_report().unwrap();
        assert_eq!(report.suggested_diagnosis.as_deref(), Some("Migraine"));
    }

    #[test]
    fn previous_turn_symptoms_only_sees_immediate_predecessor() {
        let session = Session::new(&EngineConfig::for_tests(), 1);
        session.record_turn("fever", symptom_payload(&["fever"], "Influenza"));
        assert_eq!(
            session.previous_turn_symptoms(),
            Some(vec!["fever".to_string()])
        );

        session.record_turn("thanks", payload(Intent::Gratitude, "welcome"));
        assert_eq!(session.previous_turn_symptoms(), None);
    }

    #[test]
    fn cache_key_truncates_to_fifty_chars() {
        let long = "a".repeat(80);
        let key = ResponseCache::key(&long, "Amina");
        assert_eq!(key, format!("{}_Amina", "a".repeat(50)));
    }

    #[test]
    fn cache_key_normalizes_case_and_whitespace() {
        assert_eq!(
            ResponseCache::key("  I Have a FEVER  ", "Bo"),
            "i have a fever_Bo"
        );
    }

    #[test]
    fn cache_key_prefix_conflates_long_messages() {
        // Documented gap: distinct messages sharing a 50-char prefix collide.
        let prefix = "my symptoms started two weeks ago and since then i";
        let a = ResponseCache::key(&format!("{prefix} feel worse"), "Bo");
        let b = ResponseCache::key(&format!("{prefix} feel better"), "Bo");
        assert_eq!(a, b);
    }

    #[test]
    fn cache_evicts_oldest_inserted_at_capacity() {
        let mut cache = ResponseCache::new(100);
        for i in 0..101 {
            cache.insert(format!("key-{i}"), payload(Intent::Generic, "m"));
        }
        assert_eq!(cache.len(), 100);
        assert!(cache.get("key-0").is_none(), "earliest entry evicted");
        assert!(cache.get("key-1").is_some());
        assert!(cache.get("key-100").is_some());
    }

    #[test]
    fn cache_overwrite_does_not_grow() {
        let mut cache = ResponseCache::new(100);
        cache.insert("k".into(), payload(Intent::Generic, "one"));
        cache.insert("k".into(), payload(Intent::Generic, "two"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("k").unwrap().message, "two");
    }

    #[test]
    fn session_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }

    #[test]
    fn pick_index_is_deterministic_per_seed() {
        let config = EngineConfig::for_tests();
        let a = Session::new(&config, 42);
        let b = Session::new(&config, 42);
        assert_eq!(a.pick_index(3), b.pick_index(3));
        assert_eq!(a.pick_index(3), b.pick_index(3));
    }

    #[test]
    fn sample_delay_stays_in_bounds() {
        let session = Session::new(&EngineConfig::for_tests(), 9);
        for _ in 0..50 {
            let ms = session.sample_delay_ms(100, 300);
            assert!((100..=300).contains(&ms));
        }
        assert_eq!(session.sample_delay_ms(200, 200), 200);
    }
}
