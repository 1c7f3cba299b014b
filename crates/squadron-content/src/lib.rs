//! # squadron-content
//!
//! Pure, deterministic content generation for the mock LLM engine
//! (spec §4.2): a topic classifier, a persona-style classifier, a static
//! template library, and the generator that composes them into realistic
//! result/question strings.
//!
//! Nothing here talks to an agent, a run, or the event bus — this crate has
//! no notion of state beyond its static template data, so it can be
//! property-tested exhaustively (spec §8).

#![deny(unsafe_code)]

mod generator;
mod generic;
mod persona;
mod templates;
mod topic;

pub use generator::{generate_question, generate_result, normalize_pick_index};
pub use generic::{generate_generic_question, generate_generic_result};
pub use persona::{PersonaStyle, detect_persona_style};
pub use templates::{question_bucket, question_template_count, result_bucket, result_template_count};
pub use topic::{Topic, detect_topic};
