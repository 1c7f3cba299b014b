//! Error hierarchy for the Squadron run engine.
//!
//! Provides a structured error type system built on [`thiserror`]:
//!
//! - [`SquadronError`]: top-level enum covering all error domains
//! - [`EngineError`]: run lifecycle failures — unknown run id, bad status
//!   transition. These are programmer errors (see spec §7): they are never
//!   caught internally, only propagated to the caller.
//! - [`ContentError`]: reserved for the mock content engine. The classifier
//!   and template generator are total functions by design (§4.2, §8), so
//!   this enum has no reachable variant in normal operation; it exists for
//!   API symmetry with the rest of the hierarchy and so callers can match on
//!   a single error type across crates.

use thiserror::Error;

use crate::run::RunStatus;

/// Top-level error type for the Squadron run engine.
#[derive(Debug, Error)]
pub enum SquadronError {
    /// Run lifecycle error.
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// Content generation error (unreachable in normal operation).
    #[error("{0}")]
    Content(#[from] ContentError),
}

/// Errors raised by the run engine's lifecycle operations.
///
/// Both variants indicate a caller bug (unknown id, or calling `start_run`/
/// `resume_run` on a run in the wrong state) and must never be swallowed by
/// production code — see spec §7, "Programmer error".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No run exists with the given id.
    #[error("run not found: {0}")]
    RunNotFound(String),

    /// The run was not in the status the operation requires.
    #[error("expected status '{expected}', found '{actual}'")]
    UnexpectedStatus {
        /// Status the operation requires.
        expected: RunStatus,
        /// Status the run was actually in.
        actual: RunStatus,
    },
}

/// Errors from the mock content engine.
///
/// Uninhabited in normal operation — classifiers always fall back to
/// `general`/`neutral` and every template is a non-empty string, so nothing
/// in `squadron-content` or `squadron-mock` actually constructs this.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A template bucket referenced an out-of-range index.
    ///
    /// Caught by the bucket-validity property tests in `squadron-content`;
    /// should never occur at runtime.
    #[error("template index {index} out of range for topic with {len} templates")]
    InvalidTemplateIndex {
        /// The out-of-range index.
        index: usize,
        /// Number of templates available for the topic.
        len: usize,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
