pub mod advice;
pub mod classify;
pub mod compose;
pub mod extract;
pub mod matcher;
pub mod orchestrator;
pub mod templates;

use thiserror::Error;

use crate::knowledge::KnowledgeError;

/// Internal pipeline failures. None of these escape the engine: the
/// `process` boundary converts them into a degraded payload.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),

    #[error("Unknown condition referenced: {0}")]
    UnknownCondition(String),

    #[error("No composer for intent '{0}'")]
    Uncomposable(String),
}
