//! Engine construction options (spec §4.1, §6).

use std::sync::Arc;

use rand::Rng;
use squadron_settings::EngineSettings;

/// Samples a mock-path completion delay, in milliseconds, within `[min, max]`.
///
/// The default is [`UniformDelaySampler`]; tests typically override this
/// with a sampler that returns a fixed value so timers resolve immediately.
pub trait DelaySampler: Send + Sync {
    /// Sample a delay in `[min_ms, max_ms]`. Must always return a finite,
    /// non-negative value (spec §4.1).
    fn sample(&self, min_ms: u64, max_ms: u64) -> u64;
}

/// Default sampler: uniform random delay in `[min_ms, max_ms]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformDelaySampler;

impl DelaySampler for UniformDelaySampler {
    fn sample(&self, min_ms: u64, max_ms: u64) -> u64 {
        if min_ms >= max_ms {
            return min_ms;
        }
        rand::rng().random_range(min_ms..=max_ms)
    }
}

/// Construction options for [`crate::RunEngine`].
#[derive(Clone)]
pub struct EngineConfig {
    /// Lower bound for the mock-path delay sampler.
    pub min_delay_ms: u64,
    /// Upper bound for the mock-path delay sampler.
    pub max_delay_ms: u64,
    /// Probability in `[0, 1]` that the initial mock run lands in
    /// `awaiting` instead of `completed`. Always treated as `0` on resume.
    pub mock_question_probability: f64,
    /// Pluggable delay sampler; overrides the default uniform sampler.
    pub delay_sampler: Arc<dyn DelaySampler>,
    /// Forces every agent's realistic-vs-generic mock generation mode,
    /// overriding per-agent auto-detection. `None` leaves auto-detection
    /// in effect.
    pub force_realistic_generation: Option<bool>,
}

impl EngineConfig {
    /// Build engine configuration from loaded [`EngineSettings`] plus a
    /// realistic-generation override sourced from `MockLlmSettings`.
    #[must_use]
    pub fn from_settings(settings: &EngineSettings, force_realistic_generation: Option<bool>) -> Self {
        Self {
            min_delay_ms: settings.min_delay_ms,
            max_delay_ms: settings.max_delay_ms,
            mock_question_probability: settings.mock_question_probability,
            delay_sampler: Arc::new(UniformDelaySampler),
            force_realistic_generation,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_settings(&EngineSettings::default(), None)
    }
}

impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("min_delay_ms", &self.min_delay_ms)
            .field("max_delay_ms", &self.max_delay_ms)
            .field("mock_question_probability", &self.mock_question_probability)
            .field("force_realistic_generation", &self.force_realistic_generation)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
