//! Rule-driven triage dialogue engine.
//!
//! Turns free-text patient messages into structured, intent-tagged responses:
//! symptom extraction over a fixed vocabulary, condition matching by symptom
//! overlap, keyword intent dispatch with emergencies checked first, and
//! templated prose phrased through a per-session persona.
//!
//! Key properties:
//! - Deterministic core: same message, same session state, same structured
//!   output (prose varies only with the session's seeded persona and picks)
//! - Emergencies bypass the response cache and the thinking delay
//! - Condition matches are symptom-overlap scores, never diagnoses
//! - The engine never returns an error to callers; internal failures become
//!   a fixed-shape degraded payload
//!
//! ```no_run
//! use medichat::{Engine, EngineConfig, PatientProfile, Session};
//!
//! let engine = Engine::with_builtin_knowledge(EngineConfig::default());
//! let session = Session::new(&EngineConfig::default(), rand::random());
//! let profile = PatientProfile::new("Amina", 34, "Female");
//!
//! println!("{}", engine.welcome_message(&profile, &session));
//! let reply = engine.process("I have a runny nose and sneezing", &profile, &session);
//! println!("{}", reply.message);
//! ```

pub mod config;
pub mod knowledge;
pub mod models;
pub mod pipeline;
pub mod session;

pub use config::EngineConfig;
pub use knowledge::{ConditionRecord, KnowledgeBase, KnowledgeError, MedicationEntry};
pub use models::{
    Intent, MatchResult, PatientProfile, ResponseData, ResponsePayload, Severity, Urgency,
};
pub use pipeline::orchestrator::Engine;
pub use pipeline::EngineError;
pub use session::{Persona, Session, PERSONAS};
