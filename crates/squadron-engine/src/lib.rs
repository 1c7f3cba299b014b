//! # squadron-engine
//!
//! The in-process, event-driven scheduler that owns the lifecycle of agent
//! "runs": the state machine, the mock execution path, the pluggable
//! executor contract, and the embedded event bus (spec §4.1).
//!
//! Scheduling model is single-threaded-cooperative in spirit (spec §5): the
//! only suspension points on any one run are the mock-path delay timer and
//! the awaited executor future. Concurrent runs never share state beyond
//! the run map and the subscriber table, both guarded by short-lived locks
//! that are never held across an `.await`.

#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod executor;

pub use config::{DelaySampler, EngineConfig, UniformDelaySampler};
pub use engine::RunEngine;
pub use executor::{Executor, ExecutorOutcome};
