//! The engine entry point: classify, match, compose, cache — and never let
//! an internal failure escape as an error.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Local, Timelike};
use tracing::{debug, warn};

use super::compose::Composer;
use super::templates::ResponseTemplates;
use super::{classify, extract, EngineError};
use crate::config::EngineConfig;
use crate::knowledge::KnowledgeBase;
use crate::models::{Intent, PatientProfile, ResponseData, ResponsePayload};
use crate::session::{ResponseCache, Session};

/// The triage dialogue engine. Holds the immutable knowledge base (shared,
/// never mutated after construction) and the engine configuration. All
/// per-conversation state lives in the [`Session`] passed to [`process`].
///
/// [`process`]: Engine::process
pub struct Engine {
    knowledge: Arc<KnowledgeBase>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(knowledge: Arc<KnowledgeBase>, config: EngineConfig) -> Self {
        Self { knowledge, config }
    }

    /// Engine over the built-in knowledge table.
    pub fn with_builtin_knowledge(config: EngineConfig) -> Self {
        Self::new(Arc::new(KnowledgeBase::builtin()), config)
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Personalized opener for a fresh session (not a processed turn).
    pub fn welcome_message(&self, profile: &PatientProfile, session: &Session) -> String {
        let hour = Local::now().hour();
        ResponseTemplates::welcome(profile, &session.persona(), hour)
    }

    /// Process one patient message, always returning a payload.
    ///
    /// Flow: cache probe → extract → classify (emergency short-circuits the
    /// delay and the cache) → thinking pause → compose → record turn →
    /// cache insert. Internal failures become a fixed-shape degraded payload;
    /// callers never see an error.
    pub fn process(
        &self,
        message: &str,
        profile: &PatientProfile,
        session: &Session,
    ) -> ResponsePayload {
        let start = Instant::now();
        let key = ResponseCache::key(message, profile.display_name());

        if let Some(mut hit) = session.cache_get(&key) {
            debug!(session = %session.id(), "response cache hit");
            hit.processing_time = round3(start.elapsed());
            return hit;
        }

        let mut payload = match self.respond(message, profile, session) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, "composition failed, returning degraded payload");
                degraded_payload(profile, session)
            }
        };

        payload.processing_time = round3(start.elapsed());
        session.record_turn(message, payload.clone());
        if payload.intent != Intent::Emergency && payload.intent != Intent::Error {
            session.cache_insert(key, payload.clone());
        }
        payload
    }

    fn respond(
        &self,
        message: &str,
        profile: &PatientProfile,
        session: &Session,
    ) -> Result<ResponsePayload, EngineError> {
        let symptoms = extract::extract(message, session, &self.knowledge);
        let intent = classify::classify(message, !symptoms.is_empty());
        debug!(
            intent = intent.as_str(),
            symptom_count = symptoms.len(),
            "message classified"
        );

        if intent != Intent::Emergency {
            self.thinking_pause(session);
        }

        Composer::new(&self.knowledge).compose(intent, message, &symptoms, session, profile)
    }

    /// Short pause before non-cached, non-emergency replies. Deliberate
    /// perceived-latency behavior, disabled when the config says so.
    fn thinking_pause(&self, session: &Session) {
        if let Some((min, max)) = self.config.thinking_delay_ms {
            let ms = session.sample_delay_ms(min, max);
            std::thread::sleep(Duration::from_millis(ms));
        }
    }
}

/// Fixed-shape reply for internal failures: apologetic prose, empty data.
fn degraded_payload(profile: &PatientProfile, session: &Session) -> ResponsePayload {
    ResponsePayload {
        intent: Intent::Error,
        message: ResponseTemplates::degraded(profile),
        data: ResponseData::Empty,
        processing_time: 0.0,
        persona: session.persona().name.to_string(),
    }
}

fn round3(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).round() / 1000.0
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
