//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and implement
//! [`Default`] with production default values; `#[serde(default)]` lets a
//! partial settings file override only the fields it mentions.

use serde::{Deserialize, Serialize};

/// Root settings type for the run engine and the mock content engine.
///
/// Loaded from `~/.squadron/settings.json` with defaults applied for
/// missing fields, then overridden by `SQUADRON_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadronSettings {
    /// Settings format version, bumped on breaking schema changes.
    #[serde(default = "default_version")]
    pub version: String,
    /// Run engine scheduling settings.
    #[serde(default)]
    pub engine: EngineSettings,
    /// Mock content generation settings.
    #[serde(default)]
    pub mock_llm: MockLlmSettings,
}

impl Default for SquadronSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            engine: EngineSettings::default(),
            mock_llm: MockLlmSettings::default(),
        }
    }
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Scheduling settings for the run engine's mock execution path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// Minimum simulated execution delay, in milliseconds.
    pub min_delay_ms: u64,
    /// Maximum simulated execution delay, in milliseconds.
    pub max_delay_ms: u64,
    /// Probability (0.0–1.0) that a mock run ends in `awaiting` rather than
    /// `completed`.
    pub mock_question_probability: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            min_delay_ms: 2_000,
            max_delay_ms: 6_000,
            mock_question_probability: 0.3,
        }
    }
}

/// Settings for the mock content engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MockLlmSettings {
    /// When set, forces every agent's realistic-vs-generic mode to this
    /// value, overriding per-agent auto-detection (goal/persona presence).
    /// `None` (the default) leaves auto-detection in effect.
    pub force_realistic_generation: Option<bool>,
}

impl Default for MockLlmSettings {
    fn default() -> Self {
        Self {
            force_realistic_generation: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
