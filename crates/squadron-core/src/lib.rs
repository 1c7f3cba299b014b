//! # squadron-core
//!
//! Foundation types for the Squadron run engine: branded IDs, the [`Run`]
//! data model, the error hierarchy, and structured logging setup.
//!
//! This crate provides the shared vocabulary that `squadron-events`,
//! `squadron-content`, `squadron-mock`, and `squadron-engine` all depend on.

#![deny(unsafe_code)]

pub mod errors;
pub mod ids;
pub mod logging;
pub mod run;

pub use errors::{EngineError, SquadronError};
pub use ids::{AgentId, RunId};
pub use run::{AgentConfigSnapshot, Outcome, Run, RunStatus, now_ms};
