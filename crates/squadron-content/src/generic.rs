//! Topic-agnostic fallback generation (spec §4.2) used when an agent has
//! neither a goal nor a persona set — plain, generic completions instead of
//! the persona-tuned template library.

use rand::Rng;

const GENERIC_RESULTS: &[&str] = &[
    "{name} completed the task: \"{task}\".",
    "{name} the {role} has finished \"{task}\".",
    "Task \"{task}\" is done; {name} reports no issues.",
    "{name} wrapped up \"{task}\" successfully.",
];

const GENERIC_QUESTIONS: &[&str] = &[
    "{name} needs more information before finishing \"{task}\". Can you clarify?",
    "{name} the {role} has a question about \"{task}\" before continuing.",
    "Before completing \"{task}\", {name} would like some guidance.",
];

fn render(template: &str, name: &str, role: &str, task: &str) -> String {
    template
        .replace("{name}", name)
        .replace("{role}", role)
        .replace("{task}", task)
}

/// Generate a plain, persona-agnostic completion result.
///
/// Used when realistic generation is not requested (spec §4.2: an agent
/// with no `goal` and no `persona` falls back to this path).
#[must_use]
pub fn generate_generic_result(name: &str, role: &str, task: &str) -> String {
    let idx = rand::rng().random_range(0..GENERIC_RESULTS.len());
    render(GENERIC_RESULTS[idx], name, role, task)
}

/// Generate a plain, persona-agnostic clarifying question.
#[must_use]
pub fn generate_generic_question(name: &str, role: &str, task: &str) -> String {
    let idx = rand::rng().random_range(0..GENERIC_QUESTIONS.len());
    render(GENERIC_QUESTIONS[idx], name, role, task)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
