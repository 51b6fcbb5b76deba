//! Engine configuration.
//!
//! The thinking delay exists for perceived realism: a short pause before
//! non-cached, non-emergency replies. It is part of the product behavior,
//! not an implementation accident, and must be disable-able for tests.

use serde::Serialize;

/// Tunable engine behavior.
#[derive(Debug, Clone, Serialize)]
pub struct EngineConfig {
    /// Uniform thinking-delay bounds in milliseconds, `None` to skip the
    /// pause entirely. Never applied to emergencies or cache hits.
    pub thinking_delay_ms: Option<(u64, u64)>,
    /// Response cache capacity per session; oldest-inserted entry is evicted
    /// once the cache grows past this.
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: Some((100, 300)),
            cache_capacity: 100,
        }
    }
}

impl EngineConfig {
    /// Config for tests: no artificial delay.
    pub fn for_tests() -> Self {
        Self {
            thinking_delay_ms: None,
            ..Self::default()
        }
    }
}
