//! Symptom extraction from free text.
//!
//! Each vocabulary term counts as present when it occurs as a contiguous
//! substring of the lowercased message; multi-word terms ("runny nose") only
//! match as exact phrases. There is no stemming, spelling correction, or
//! negation handling — "no fever" still extracts "fever". These are known
//! limitations, kept deliberately.

use tracing::debug;

use super::classify;
use crate::knowledge::KnowledgeBase;
use crate::session::Session;

/// Extract recognized symptom terms, in vocabulary order.
///
/// Best-effort continuity: when the message itself yields nothing, matches no
/// other intent keyword, and the immediately preceding turn was a symptom
/// report, that turn's symptoms are carried forward so short follow-ups like
/// "it's worse today" keep their context. A heuristic, not a guarantee.
pub fn extract(raw_text: &str, session: &Session, kb: &KnowledgeBase) -> Vec<String> {
    let lower = raw_text.to_lowercase();
    let normalized = lower.trim();

    let found = extract_terms(normalized, kb);
    if !found.is_empty() {
        return found;
    }

    if !classify::has_non_symptom_pattern(normalized) {
        if let Some(previous) = session.previous_turn_symptoms() {
            debug!(
                count = previous.len(),
                "no symptoms in message, carrying forward prior turn"
            );
            return previous;
        }
    }

    found
}

/// Vocabulary scan over already-normalized text. Returns an ordered set:
/// vocabulary order, no duplicates. An empty result is not an error.
pub fn extract_terms(normalized: &str, kb: &KnowledgeBase) -> Vec<String> {
    kb.symptom_vocabulary
        .iter()
        .filter(|term| normalized.contains(term.as_str()))
        .cloned()
        .collect()
}
