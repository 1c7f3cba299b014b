//! Persona-style classifier (spec §4.2): 5 styles, keyword-scored.

use std::fmt;

/// A coarse stylistic tag derived from an agent's free-text persona.
///
/// Declaration order is the tie-break order used by [`detect_persona_style`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PersonaStyle {
    /// Fearless, aggressive, daring.
    Bold,
    /// Careful, precise, systematic.
    Methodical,
    /// Fast, agile, nimble.
    Swift,
    /// Steady, loyal, unwavering.
    Steadfast,
    /// Fallback when the persona is absent, empty, or scores zero everywhere.
    Neutral,
}

/// All five styles, in declaration/tie-break order.
pub const ALL_STYLES: [PersonaStyle; 5] = [
    PersonaStyle::Bold,
    PersonaStyle::Methodical,
    PersonaStyle::Swift,
    PersonaStyle::Steadfast,
    PersonaStyle::Neutral,
];

impl fmt::Display for PersonaStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PersonaStyle::Bold => "bold",
            PersonaStyle::Methodical => "methodical",
            PersonaStyle::Swift => "swift",
            PersonaStyle::Steadfast => "steadfast",
            PersonaStyle::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

fn keywords(style: PersonaStyle) -> &'static [&'static str] {
    match style {
        PersonaStyle::Bold => &["bold", "daring", "fearless", "brave", "aggressive", "reckless"],
        PersonaStyle::Methodical => &[
            "methodical",
            "careful",
            "precise",
            "meticulous",
            "systematic",
            "analytical",
            "reliable",
            "thorough",
        ],
        PersonaStyle::Swift => &["swift", "fast", "quick", "agile", "nimble", "speedy"],
        PersonaStyle::Steadfast => &[
            "steadfast",
            "steady",
            "resolute",
            "loyal",
            "unwavering",
            "stalwart",
        ],
        PersonaStyle::Neutral => &[],
    }
}

fn score(style: PersonaStyle, lowercase_text: &str) -> usize {
    keywords(style)
        .iter()
        .filter(|kw| lowercase_text.contains(*kw))
        .count()
}

/// Classify an agent's persona free text into one of the five styles
/// (spec §4.2, §8: total function). An absent or empty persona, or one that
/// scores zero everywhere, classifies as [`PersonaStyle::Neutral`].
#[must_use]
pub fn detect_persona_style(persona: Option<&str>) -> PersonaStyle {
    let Some(persona) = persona else {
        return PersonaStyle::Neutral;
    };
    if persona.trim().is_empty() {
        return PersonaStyle::Neutral;
    }

    let lower = persona.to_lowercase();
    let mut best: Option<(PersonaStyle, usize)> = None;
    for style in ALL_STYLES.iter().copied().filter(|s| *s != PersonaStyle::Neutral) {
        let s = score(style, &lower);
        if best.is_none_or(|(_, best_s)| s > best_s) {
            best = Some((style, s));
        }
    }
    best.filter(|(_, s)| *s > 0).map_or(PersonaStyle::Neutral, |(s, _)| s)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_persona_is_neutral() {
        assert_eq!(detect_persona_style(None), PersonaStyle::Neutral);
    }

    #[test]
    fn empty_persona_is_neutral() {
        assert_eq!(detect_persona_style(Some("")), PersonaStyle::Neutral);
        assert_eq!(detect_persona_style(Some("   ")), PersonaStyle::Neutral);
    }

    #[test]
    fn bold_persona_classifies_correctly() {
        assert_eq!(
            detect_persona_style(Some("Curious and bold")),
            PersonaStyle::Bold
        );
    }

    #[test]
    fn methodical_persona_classifies_correctly() {
        assert_eq!(
            detect_persona_style(Some("Methodical and reliable")),
            PersonaStyle::Methodical
        );
    }

    #[test]
    fn swift_and_steadfast_reachable() {
        assert_eq!(detect_persona_style(Some("quick and nimble")), PersonaStyle::Swift);
        assert_eq!(
            detect_persona_style(Some("steadfast and loyal")),
            PersonaStyle::Steadfast
        );
    }

    #[test]
    fn no_keyword_match_falls_back_to_neutral() {
        assert_eq!(
            detect_persona_style(Some("a tall green hat")),
            PersonaStyle::Neutral
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(detect_persona_style(Some("BOLD AND DARING")), PersonaStyle::Bold);
    }

    #[test]
    fn detect_persona_style_is_total() {
        for persona in [None, Some(""), Some("bold"), Some("xyz123")] {
            let _: PersonaStyle = detect_persona_style(persona);
        }
    }
}
