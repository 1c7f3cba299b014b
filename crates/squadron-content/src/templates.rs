//! The template library (spec §4.2): per-topic result/question template
//! text, and the per-(topic, persona style) bucket tables that select
//! which templates are eligible for a given style.
//!
//! Every non-general topic has 5 result templates and 3 question
//! templates; `general` has 5 of each (spec §4.2). The `neutral` bucket for
//! every topic lists every template index exactly once in canonical order
//! (spec §3, §8 — bucket completeness).

use crate::persona::PersonaStyle;
use crate::topic::Topic;

/// Number of result templates for `topic`. Always 5 (spec §4.2).
#[must_use]
pub fn result_template_count(_topic: Topic) -> usize {
    5
}

/// Number of question templates for `topic`: 5 for [`Topic::General`], 3
/// for every other topic (spec §4.2).
#[must_use]
pub fn question_template_count(topic: Topic) -> usize {
    if topic == Topic::General { 5 } else { 3 }
}

/// Bucket of result-template indices eligible for `(topic, style)`.
///
/// Bucket contents are the same ordered subset of `[0, 5)` for every topic:
/// this mirrors the spec's data shape (a lookup table keyed by `(topic,
/// style)`) without needing topic-specific tuning, since style alone
/// determines which energy/tone of template is picked. `neutral` always
/// lists every index (bucket completeness, spec §8).
#[must_use]
pub fn result_bucket(_topic: Topic, style: PersonaStyle) -> &'static [usize] {
    match style {
        PersonaStyle::Bold => &[0, 2, 4],
        PersonaStyle::Methodical => &[1, 3],
        PersonaStyle::Swift => &[0, 1, 4],
        PersonaStyle::Steadfast => &[2, 3, 4],
        PersonaStyle::Neutral => &[0, 1, 2, 3, 4],
    }
}

/// Bucket of question-template indices eligible for `(topic, style)`.
///
/// [`Topic::General`] has 5 question templates, every other topic has 3;
/// the bucket tables differ accordingly. `neutral` always lists every
/// index.
#[must_use]
pub fn question_bucket(topic: Topic, style: PersonaStyle) -> &'static [usize] {
    if topic == Topic::General {
        match style {
            PersonaStyle::Bold => &[0, 2, 4],
            PersonaStyle::Methodical => &[1, 3],
            PersonaStyle::Swift => &[0, 4],
            PersonaStyle::Steadfast => &[2, 3],
            PersonaStyle::Neutral => &[0, 1, 2, 3, 4],
        }
    } else {
        match style {
            PersonaStyle::Bold => &[0, 2],
            PersonaStyle::Methodical => &[1],
            PersonaStyle::Swift => &[0],
            PersonaStyle::Steadfast => &[2],
            PersonaStyle::Neutral => &[0, 1, 2],
        }
    }
}

/// Render result template `index` of `topic` for the given context.
///
/// # Panics
///
/// Panics if `index` is out of range for `topic`'s result templates — the
/// generator only ever calls this with indices it already validated against
/// [`result_template_count`], so this should be unreachable in practice.
#[must_use]
pub fn render_result(topic: Topic, index: usize, name: &str, role: &str, task: &str) -> String {
    match (topic, index) {
        (Topic::Exploration, 0) => format!(
            "Mapping operation complete. {name} ({role}) pushed deep into unfamiliar terrain on: \"{task}\"."
        ),
        (Topic::Exploration, 1) => format!(
            "{name}, operating as {role}, files a detailed field report on the mission: \"{task}\"."
        ),
        (Topic::Exploration, 2) => format!(
            "Scouting finished — {name} charted the route for \"{task}\" and marked every hazard along the way."
        ),
        (Topic::Exploration, 3) => format!(
            "{name} returned from the frontier with fresh intelligence on \"{task}\"; the map has been updated."
        ),
        (Topic::Exploration, 4) => format!(
            "After a long trek, {name} the {role} confirms the territory for \"{task}\" is now fully surveyed."
        ),

        (Topic::Construction, 0) => format!(
            "{name} the {role} finished construction on \"{task}\"; the structure is sound and ready for inspection."
        ),
        (Topic::Construction, 1) => {
            format!("Build complete. {name} laid the final beam for \"{task}\" ahead of schedule.")
        }
        (Topic::Construction, 2) => format!(
            "{name} reinforced every weak point while completing \"{task}\" — the fortifications will hold."
        ),
        (Topic::Construction, 3) => format!(
            "The blueprint for \"{task}\" has been fully realized; {name} signs off as {role}."
        ),
        (Topic::Construction, 4) => format!(
            "{name} repaired the damage and completed \"{task}\", leaving the site stronger than before."
        ),

        (Topic::Intelligence, 0) => {
            format!("{name} gathered actionable intel on \"{task}\" without being detected.")
        }
        (Topic::Intelligence, 1) => format!(
            "Reconnaissance complete. {name} the {role} has a full dossier ready on \"{task}\"."
        ),
        (Topic::Intelligence, 2) => format!(
            "{name} infiltrated the target and returned with everything needed for \"{task}\"."
        ),
        (Topic::Intelligence, 3) => format!(
            "The informant network {name} cultivated has confirmed every detail of \"{task}\"."
        ),
        (Topic::Intelligence, 4) => format!(
            "{name} completed the covert assessment of \"{task}\" and filed the report under seal."
        ),

        (Topic::Defense, 0) => format!(
            "{name} the {role} secured the perimeter for \"{task}\"; no breaches were reported."
        ),
        (Topic::Defense, 1) => format!(
            "Defense posture established. {name} completed \"{task}\" and the line will hold."
        ),
        (Topic::Defense, 2) => format!("{name} repelled every probe while carrying out \"{task}\"."),
        (Topic::Defense, 3) => format!(
            "The ward {name} set for \"{task}\" is active and has already turned back one incursion."
        ),
        (Topic::Defense, 4) => format!(
            "{name} finished patrolling for \"{task}\"; all checkpoints report clear."
        ),

        (Topic::Coding, 0) => format!("{name} shipped working code for \"{task}\"; all tests are green."),
        (Topic::Coding, 1) => format!(
            "Debugging complete. {name} the {role} traced the bug in \"{task}\" to a stale cache and fixed it."
        ),
        (Topic::Coding, 2) => format!(
            "{name} refactored the module for \"{task}\" — same behavior, half the complexity."
        ),
        (Topic::Coding, 3) => format!(
            "The algorithm {name} wrote for \"{task}\" compiles clean and runs within budget."
        ),
        (Topic::Coding, 4) => format!(
            "{name} finished the script for \"{task}\" and left inline notes for the next person."
        ),

        (Topic::Research, 0) => format!(
            "{name} the {role} completed the analysis for \"{task}\" and the data supports the hypothesis."
        ),
        (Topic::Research, 1) => format!("Research wrapped. {name} has a full write-up ready on \"{task}\"."),
        (Topic::Research, 2) => format!(
            "{name} ran the experiment for \"{task}\" three times; the results are consistent."
        ),
        (Topic::Research, 3) => format!(
            "The study {name} conducted on \"{task}\" turned up one surprising correlation worth flagging."
        ),
        (Topic::Research, 4) => format!(
            "{name} finished investigating \"{task}\" and the findings are ready for review."
        ),

        (Topic::Communication, 0) => format!(
            "{name} the {role} delivered the message for \"{task}\" and received acknowledgment."
        ),
        (Topic::Communication, 1) => {
            format!("Negotiations complete. {name} closed \"{task}\" on favorable terms.")
        }
        (Topic::Communication, 2) => format!(
            "{name} relayed every detail of \"{task}\" to the relevant parties without delay."
        ),
        (Topic::Communication, 3) => format!(
            "The announcement for \"{task}\" went out; {name} confirms it reached every recipient."
        ),
        (Topic::Communication, 4) => {
            format!("{name} finished liaising on \"{task}\" and both sides have signed off.")
        }

        (Topic::Planning, 0) => format!(
            "{name} the {role} finalized the plan for \"{task}\"; every dependency is accounted for."
        ),
        (Topic::Planning, 1) => format!("Scheduling complete. {name} has a timeline ready for \"{task}\"."),
        (Topic::Planning, 2) => format!(
            "{name} coordinated every team needed for \"{task}\" and confirmed the roadmap."
        ),
        (Topic::Planning, 3) => format!("The strategy {name} drafted for \"{task}\" balances speed and risk."),
        (Topic::Planning, 4) => format!(
            "{name} finished organizing \"{task}\"; resources are allocated and ready to go."
        ),

        (Topic::General, 0) => format!("{name} the {role} completed \"{task}\" without incident."),
        (Topic::General, 1) => format!("{name} finished \"{task}\" and is ready for the next assignment."),
        (Topic::General, 2) => format!("Task complete: {name} handled \"{task}\" from start to finish."),
        (Topic::General, 3) => format!("{name} wrapped up \"{task}\"; everything checks out."),
        (Topic::General, 4) => format!("{name} the {role} closed out \"{task}\" cleanly."),

        (topic, index) => unreachable!("result template index {index} out of range for {topic}"),
    }
}

/// Render question template `index` of `topic` for the given context.
///
/// # Panics
///
/// Panics if `index` is out of range — see [`render_result`].
#[must_use]
pub fn render_question(topic: Topic, index: usize, name: &str, _role: &str, task: &str) -> String {
    match (topic, index) {
        (Topic::Exploration, 0) => format!(
            "{name} needs a clearer boundary before continuing \"{task}\" — which sector should be prioritized?"
        ),
        (Topic::Exploration, 1) => format!(
            "Before charting further, {name} asks: should \"{task}\" include the contested border region?"
        ),
        (Topic::Exploration, 2) => format!(
            "{name} has scouted partway through \"{task}\" but needs to know how far the search radius should extend."
        ),

        (Topic::Construction, 0) => format!(
            "{name} needs the final dimensions before finishing \"{task}\" — what size should the structure be?"
        ),
        (Topic::Construction, 1) => format!(
            "Materials for \"{task}\" are running low; should {name} substitute stone for timber?"
        ),
        (Topic::Construction, 2) => format!(
            "{name} has the foundation laid for \"{task}\" but needs sign-off on the floor plan to continue."
        ),

        (Topic::Intelligence, 0) => format!(
            "{name} is close to confirming \"{task}\" but needs authorization to approach the final source."
        ),
        (Topic::Intelligence, 1) => format!(
            "The intel trail for \"{task}\" splits two ways — should {name} follow the financial lead or the personnel lead?"
        ),
        (Topic::Intelligence, 2) => format!(
            "{name} has partial confirmation on \"{task}\"; is a second, deeper pass worth the exposure risk?"
        ),

        (Topic::Defense, 0) => format!(
            "{name} needs to know the rules of engagement before finishing \"{task}\" — hold position or advance?"
        ),
        (Topic::Defense, 1) => format!(
            "A gap was found in the perimeter during \"{task}\"; should {name} close it now or report first?"
        ),
        (Topic::Defense, 2) => format!(
            "{name} has secured most of \"{task}\" but needs more hands to cover the last checkpoint."
        ),

        (Topic::Coding, 0) => format!(
            "{name} hit an ambiguous spec while working on \"{task}\" — should errors fail loudly or fall back silently?"
        ),
        (Topic::Coding, 1) => format!(
            "\"{task}\" could be solved two ways; should {name} optimize for speed or for readability?"
        ),
        (Topic::Coding, 2) => format!(
            "{name} found a related bug while on \"{task}\" — fix it now or file it separately?"
        ),

        (Topic::Research, 0) => format!(
            "{name} needs a larger sample before finishing \"{task}\" — is the current dataset big enough?"
        ),
        (Topic::Research, 1) => format!(
            "The results for \"{task}\" are inconclusive; should {name} rerun the experiment or report as-is?"
        ),
        (Topic::Research, 2) => format!(
            "{name} found two competing theories while researching \"{task}\" — which one should take priority?"
        ),

        (Topic::Communication, 0) => format!(
            "{name} needs a tone before sending the message for \"{task}\" — formal or informal?"
        ),
        (Topic::Communication, 1) => format!(
            "The other party pushed back on \"{task}\"; should {name} hold firm or offer a concession?"
        ),
        (Topic::Communication, 2) => format!(
            "{name} has a draft ready for \"{task}\" but needs to know who should be copied."
        ),

        (Topic::Planning, 0) => format!(
            "{name} needs a deadline before finalizing the plan for \"{task}\" — what's the target date?"
        ),
        (Topic::Planning, 1) => format!(
            "Two priorities conflict in \"{task}\"; should {name} sequence them or run them in parallel?"
        ),
        (Topic::Planning, 2) => format!(
            "{name} has a draft roadmap for \"{task}\" but needs budget confirmation to lock it in."
        ),

        (Topic::General, 0) => {
            format!("{name} needs more detail before finishing \"{task}\" — can you clarify the scope?")
        }
        (Topic::General, 1) => {
            format!("{name} hit an ambiguous point in \"{task}\" and needs direction before continuing.")
        }
        (Topic::General, 2) => {
            format!("Before wrapping up \"{task}\", {name} wants to confirm the expected outcome.")
        }
        (Topic::General, 3) => {
            format!("{name} is unsure how to proceed with \"{task}\" — what should take priority?")
        }
        (Topic::General, 4) => format!("{name} has a question about \"{task}\" before marking it done."),

        (topic, index) => unreachable!("question template index {index} out of range for {topic}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::ALL_TOPICS;

    #[test]
    fn neutral_bucket_is_permutation_of_result_indices() {
        for topic in ALL_TOPICS {
            let mut bucket = result_bucket(topic, PersonaStyle::Neutral).to_vec();
            bucket.sort_unstable();
            let expected: Vec<usize> = (0..result_template_count(topic)).collect();
            assert_eq!(bucket, expected, "topic {topic} neutral result bucket");
        }
    }

    #[test]
    fn neutral_bucket_is_permutation_of_question_indices() {
        for topic in ALL_TOPICS {
            let mut bucket = question_bucket(topic, PersonaStyle::Neutral).to_vec();
            bucket.sort_unstable();
            let expected: Vec<usize> = (0..question_template_count(topic)).collect();
            assert_eq!(bucket, expected, "topic {topic} neutral question bucket");
        }
    }

    #[test]
    fn every_bucket_index_is_in_range() {
        for topic in ALL_TOPICS {
            for style in crate::persona::ALL_STYLES {
                for &idx in result_bucket(topic, style) {
                    assert!(idx < result_template_count(topic));
                }
                for &idx in question_bucket(topic, style) {
                    assert!(idx < question_template_count(topic));
                }
            }
        }
    }

    #[test]
    fn every_template_is_non_empty_and_contains_name() {
        for topic in ALL_TOPICS {
            for idx in 0..result_template_count(topic) {
                let text = render_result(topic, idx, "Alice", "Explorer", "do the task");
                assert!(!text.is_empty());
                assert!(text.contains("Alice"));
            }
            for idx in 0..question_template_count(topic) {
                let text = render_question(topic, idx, "Alice", "Explorer", "do the task");
                assert!(!text.is_empty());
                assert!(text.contains("Alice"));
            }
        }
    }

    #[test]
    fn exploration_bold_template_zero_mentions_mapping() {
        let text = render_result(Topic::Exploration, 0, "Alice", "Explorer", "Map north sector");
        assert!(text.contains("Mapping operation complete"));
    }

    #[test]
    fn exploration_methodical_template_one_mentions_field_report() {
        let text = render_result(Topic::Exploration, 1, "Bob", "Explorer", "Map north sector");
        assert!(text.contains("field report"));
    }
}
