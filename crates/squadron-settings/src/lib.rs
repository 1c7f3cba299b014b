//! # squadron-settings
//!
//! Layered configuration for the run engine and mock content engine.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`SquadronSettings::default()`]
//! 2. **User file** — `~/.squadron/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `SQUADRON_*` overrides (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use squadron_settings::get_settings;
//!
//! let settings = get_settings();
//! println!("min delay: {}ms", settings.engine.min_delay_ms);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::{EngineSettings, MockLlmSettings, SquadronSettings};

use std::sync::OnceLock;

/// Global settings singleton.
static SETTINGS: OnceLock<SquadronSettings> = OnceLock::new();

/// Get the global settings instance.
///
/// On first call, loads settings from `~/.squadron/settings.json` with env
/// var overrides. On subsequent calls, returns the cached value. If loading
/// fails, returns compiled defaults.
pub fn get_settings() -> &'static SquadronSettings {
    SETTINGS.get_or_init(|| load_settings().unwrap_or_default())
}

/// Initialize the global settings with a specific value.
///
/// # Errors
///
/// Returns the provided settings back if the global was already initialized.
#[allow(clippy::result_large_err)]
pub fn init_settings(settings: SquadronSettings) -> std::result::Result<(), SquadronSettings> {
    SETTINGS.set(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _settings = SquadronSettings::default();
        let _path = settings_path();
    }

    #[test]
    fn deep_merge_re_exported() {
        let a = serde_json::json!({"x": 1});
        let b = serde_json::json!({"y": 2});
        let merged = deep_merge(a, b);
        assert_eq!(merged["x"], 1);
        assert_eq!(merged["y"], 2);
    }
}
