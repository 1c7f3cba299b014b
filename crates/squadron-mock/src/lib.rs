//! # squadron-mock
//!
//! A stateful, per-agent wrapper over [`squadron_content`] (spec §4.2): caches
//! the agent's persona-style classification once at construction and decides,
//! once, whether this agent uses the realistic persona-tuned generator or the
//! topic-agnostic generic fallback.

#![deny(unsafe_code)]

mod service;

pub use service::MockLlmService;
