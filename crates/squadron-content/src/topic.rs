//! Task-topic classifier (spec §4.2): 9 categories, keyword-scored.

use std::fmt;

/// A coarse domain tag derived from a task's free text.
///
/// Declaration order is the tie-break order used by [`detect_topic`] — keep
/// it stable, property tests rely on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Scouting, charting, and surveying unknown ground.
    Exploration,
    /// Building, repairing, or fortifying structures.
    Construction,
    /// Reconnaissance, surveillance, and information gathering.
    Intelligence,
    /// Guarding, fortifying, and repelling threats.
    Defense,
    /// Writing, debugging, or shipping software.
    Coding,
    /// Studying, analyzing, and experimenting.
    Research,
    /// Messaging, negotiating, and liaising between parties.
    Communication,
    /// Scheduling, organizing, and strategizing.
    Planning,
    /// Fallback when no category scores above zero.
    General,
}

/// All nine topics, in declaration/tie-break order.
pub const ALL_TOPICS: [Topic; 9] = [
    Topic::Exploration,
    Topic::Construction,
    Topic::Intelligence,
    Topic::Defense,
    Topic::Coding,
    Topic::Research,
    Topic::Communication,
    Topic::Planning,
    Topic::General,
];

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Topic::Exploration => "exploration",
            Topic::Construction => "construction",
            Topic::Intelligence => "intelligence",
            Topic::Defense => "defense",
            Topic::Coding => "coding",
            Topic::Research => "research",
            Topic::Communication => "communication",
            Topic::Planning => "planning",
            Topic::General => "general",
        };
        f.write_str(s)
    }
}

fn keywords(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Exploration => &[
            "map", "explore", "scout", "territory", "frontier", "wilderness", "chart", "terrain",
            "discover", "unexplored", "sector",
        ],
        Topic::Construction => &[
            "build", "construct", "fortify", "repair", "wall", "structure", "foundation",
            "blueprint", "erect",
        ],
        Topic::Intelligence => &[
            "spy", "intel", "surveil", "recon", "infiltrate", "informant", "covert",
            "reconnaissance",
        ],
        Topic::Defense => &[
            "defend", "guard", "protect", "shield", "fortress", "patrol", "ward", "secure",
            "perimeter",
        ],
        Topic::Coding => &[
            "code", "program", "script", "debug", "compile", "algorithm", "software", "bug",
            "function", "refactor",
        ],
        Topic::Research => &[
            "research", "study", "analyze", "investigate", "experiment", "hypothesis", "survey",
        ],
        Topic::Communication => &[
            "message", "negotiate", "diplomat", "relay", "broadcast", "announce", "parley",
            "liaise", "correspond",
        ],
        Topic::Planning => &[
            "plan", "strategy", "schedule", "organize", "coordinate", "roadmap", "prioritize",
            "allocate", "timeline",
        ],
        Topic::General => &[],
    }
}

/// Count distinct keywords of `topic` that appear as substrings of the
/// already-lowercased `text`.
fn score(topic: Topic, lowercase_text: &str) -> usize {
    keywords(topic)
        .iter()
        .filter(|kw| lowercase_text.contains(*kw))
        .count()
}

/// Classify a task's free text into one of the nine topic categories
/// (spec §4.2, §8: total function).
///
/// Lowercases `text`, counts distinct keyword matches per non-general
/// category, and returns the highest scorer; ties break by declaration
/// order. A text that scores zero everywhere classifies as [`Topic::General`].
#[must_use]
pub fn detect_topic(text: &str) -> Topic {
    let lower = text.to_lowercase();
    let mut best: Option<(Topic, usize)> = None;
    for topic in ALL_TOPICS.iter().copied().filter(|t| *t != Topic::General) {
        let s = score(topic, &lower);
        if best.is_none_or(|(_, best_s)| s > best_s) {
            best = Some((topic, s));
        }
    }
    best.filter(|(_, s)| *s > 0).map_or(Topic::General, |(t, _)| t)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exploration_task_classifies_correctly() {
        assert_eq!(
            detect_topic("Map and explore the unknown territory"),
            Topic::Exploration
        );
    }

    #[test]
    fn coding_task_classifies_correctly() {
        assert_eq!(
            detect_topic("Debug the script and refactor the function"),
            Topic::Coding
        );
    }

    #[test]
    fn no_keywords_falls_back_to_general() {
        assert_eq!(detect_topic("do the thing please"), Topic::General);
    }

    #[test]
    fn empty_text_is_general() {
        assert_eq!(detect_topic(""), Topic::General);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(detect_topic("BUILD A FORTRESS WALL"), Topic::Construction);
    }

    #[test]
    fn every_topic_is_reachable() {
        assert_eq!(detect_topic("chart the frontier"), Topic::Exploration);
        assert_eq!(detect_topic("construct a wall"), Topic::Construction);
        assert_eq!(detect_topic("run covert recon"), Topic::Intelligence);
        assert_eq!(detect_topic("guard the perimeter"), Topic::Defense);
        assert_eq!(detect_topic("compile the algorithm"), Topic::Coding);
        assert_eq!(detect_topic("analyze the survey data"), Topic::Research);
        assert_eq!(detect_topic("relay the message"), Topic::Communication);
        assert_eq!(detect_topic("schedule and prioritize"), Topic::Planning);
    }

    #[test]
    fn detect_topic_is_total() {
        for text in ["", "xyz", "map build code defend", "🚀🚀🚀"] {
            let _: Topic = detect_topic(text);
        }
    }
}
