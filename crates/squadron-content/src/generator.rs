//! Composes the topic classifier, the persona-style classifier, and the
//! template library into the realistic result/question text the mock LLM
//! engine returns (spec §4.2).

use rand::Rng;

use crate::persona::detect_persona_style;
use crate::templates::{question_bucket, render_question, render_result, result_bucket};
use crate::topic::detect_topic;

/// Normalize an arbitrary pick index into `[0, n)`.
///
/// `i` may be negative (e.g. a caller-supplied seed derived from a hash);
/// this wraps it into range the way a mathematical modulo would, rather
/// than panicking or truncating (spec §4.2).
///
/// # Panics
///
/// Panics if `n == 0` — callers only invoke this against a non-empty
/// template bucket.
#[must_use]
pub fn normalize_pick_index(i: i64, n: usize) -> usize {
    assert!(n > 0, "cannot normalize a pick index into an empty bucket");
    let n = i64::try_from(n).expect("template bucket length fits in i64");
    (((i % n) + n) % n) as usize
}

fn random_pick() -> i64 {
    rand::rng().random_range(0..i64::MAX)
}

/// Append the verbatim goal as a trailing sentence if `text` doesn't
/// already contain it (spec §4.2 goal-injection postcondition).
fn inject_goal(text: String, goal: Option<&str>) -> String {
    match goal {
        Some(goal) if !goal.is_empty() && !text.contains(goal) => {
            format!("{text} The goal remains: \"{goal}\".")
        }
        _ => text,
    }
}

/// Generate a realistic completion result for a run (spec §4.2, §8).
///
/// Classifies `task` by topic and `persona` by style, selects a template
/// from the resulting bucket (deterministically if `pick_index` is given,
/// otherwise at random), and ensures `goal` appears verbatim in the output.
#[must_use]
pub fn generate_result(
    name: &str,
    role: &str,
    task: &str,
    goal: Option<&str>,
    persona: Option<&str>,
    pick_index: Option<i64>,
) -> String {
    let topic = detect_topic(task);
    let style = detect_persona_style(persona);
    let bucket = result_bucket(topic, style);
    let raw = pick_index.unwrap_or_else(random_pick);
    let template_index = bucket[normalize_pick_index(raw, bucket.len())];
    let text = render_result(topic, template_index, name, role, task);
    inject_goal(text, goal)
}

/// Generate a realistic clarifying question for a run (spec §4.2, §8).
///
/// Mirrors [`generate_result`] but draws from the question template
/// library instead of the result library.
#[must_use]
pub fn generate_question(
    name: &str,
    role: &str,
    task: &str,
    goal: Option<&str>,
    persona: Option<&str>,
    pick_index: Option<i64>,
) -> String {
    let topic = detect_topic(task);
    let style = detect_persona_style(persona);
    let bucket = question_bucket(topic, style);
    let raw = pick_index.unwrap_or_else(random_pick);
    let template_index = bucket[normalize_pick_index(raw, bucket.len())];
    let text = render_question(topic, template_index, name, role, task);
    inject_goal(text, goal)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_pick_index_wraps_positive() {
        assert_eq!(normalize_pick_index(0, 3), 0);
        assert_eq!(normalize_pick_index(2, 3), 2);
        assert_eq!(normalize_pick_index(3, 3), 0);
        assert_eq!(normalize_pick_index(7, 3), 1);
    }

    #[test]
    fn normalize_pick_index_wraps_negative() {
        assert_eq!(normalize_pick_index(-1, 3), 2);
        assert_eq!(normalize_pick_index(-3, 3), 0);
        assert_eq!(normalize_pick_index(-4, 3), 2);
    }

    #[test]
    fn generate_result_is_deterministic_for_a_given_pick_index() {
        let a = generate_result("Alice", "Explorer", "Map the north sector", None, None, Some(0));
        let b = generate_result("Alice", "Explorer", "Map the north sector", None, None, Some(0));
        assert_eq!(a, b);
    }

    #[test]
    fn generate_result_contains_goal_verbatim() {
        let text = generate_result(
            "Alice",
            "Explorer",
            "Map the north sector",
            Some("find the lost relic"),
            None,
            Some(0),
        );
        assert!(text.contains("find the lost relic"));
    }

    #[test]
    fn generate_result_does_not_duplicate_goal_already_present() {
        let text = generate_result(
            "Alice",
            "Explorer",
            "find the lost relic in the north sector",
            Some("find the lost relic"),
            None,
            Some(0),
        );
        assert_eq!(text.matches("find the lost relic").count(), 1);
    }

    #[test]
    fn generate_result_scenario_alice_bold_exploration() {
        let text = generate_result(
            "Alice",
            "Explorer",
            "Map the unexplored frontier",
            None,
            Some("bold and daring"),
            Some(0),
        );
        assert!(text.contains("Mapping operation complete"));
    }

    #[test]
    fn generate_result_scenario_bob_methodical_exploration() {
        let text = generate_result(
            "Bob",
            "Explorer",
            "Map the unexplored frontier",
            None,
            Some("methodical and precise"),
            Some(0),
        );
        assert!(text.contains("field report"));
    }

    #[test]
    fn generate_question_contains_goal_verbatim() {
        let text = generate_question(
            "Alice",
            "Explorer",
            "Map the north sector",
            Some("find the lost relic"),
            None,
            Some(0),
        );
        assert!(text.contains("find the lost relic"));
    }

    #[test]
    fn generate_question_without_pick_index_still_total() {
        let text = generate_question("Alice", "Explorer", "Map the north sector", None, None, None);
        assert!(!text.is_empty());
    }
}
