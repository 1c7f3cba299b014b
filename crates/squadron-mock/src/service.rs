//! [`MockLlmService`]: per-agent caching wrapper (spec §4.2).

use squadron_content::{
    PersonaStyle, Topic, detect_persona_style, detect_topic, generate_generic_question,
    generate_generic_result, generate_question, generate_result,
};

/// Generates mock result/question text for one agent.
///
/// Constructed once per agent; caches the persona-style classification and
/// the realistic-vs-generic mode decision so repeated calls don't
/// re-classify the same persona text.
#[derive(Debug, Clone)]
pub struct MockLlmService {
    agent_name: String,
    agent_role: String,
    goal: Option<String>,
    persona: Option<String>,
    persona_style: PersonaStyle,
    use_realistic_generation: bool,
}

impl MockLlmService {
    /// Construct a service for one agent.
    ///
    /// `use_realistic_generation` overrides the auto-detection rule (spec
    /// §4.2, §6): when `None`, realistic generation is used iff `goal` or
    /// `persona` is present.
    #[must_use]
    pub fn new(
        agent_name: impl Into<String>,
        agent_role: impl Into<String>,
        goal: Option<String>,
        persona: Option<String>,
        use_realistic_generation: Option<bool>,
    ) -> Self {
        let persona_style = detect_persona_style(persona.as_deref());
        let use_realistic_generation =
            use_realistic_generation.unwrap_or_else(|| goal.is_some() || persona.is_some());
        Self {
            agent_name: agent_name.into(),
            agent_role: agent_role.into(),
            goal,
            persona,
            persona_style,
            use_realistic_generation,
        }
    }

    /// Generate a completion result for `task`.
    ///
    /// `pick_index`, when given, selects deterministically within the
    /// matched template bucket; otherwise a bucket entry is drawn at random.
    #[must_use]
    pub fn generate_result(&self, task: &str, pick_index: Option<i64>) -> String {
        if self.use_realistic_generation {
            generate_result(
                &self.agent_name,
                &self.agent_role,
                task,
                self.goal.as_deref(),
                self.persona.as_deref(),
                pick_index,
            )
        } else {
            generate_generic_result(&self.agent_name, &self.agent_role, task)
        }
    }

    /// Generate a clarifying question for `task`.
    #[must_use]
    pub fn generate_question(&self, task: &str, pick_index: Option<i64>) -> String {
        if self.use_realistic_generation {
            generate_question(
                &self.agent_name,
                &self.agent_role,
                task,
                self.goal.as_deref(),
                self.persona.as_deref(),
                pick_index,
            )
        } else {
            generate_generic_question(&self.agent_name, &self.agent_role, task)
        }
    }

    /// Classify `task`'s topic without generating text.
    #[must_use]
    pub fn detect_topic_for(task: &str) -> Topic {
        detect_topic(task)
    }

    /// The agent's name, as supplied at construction.
    #[must_use]
    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    /// The agent's role, as supplied at construction.
    #[must_use]
    pub fn agent_role(&self) -> &str {
        &self.agent_role
    }

    /// The agent's goal, if any.
    #[must_use]
    pub fn goal(&self) -> Option<&str> {
        self.goal.as_deref()
    }

    /// The agent's persona text, if any.
    #[must_use]
    pub fn persona(&self) -> Option<&str> {
        self.persona.as_deref()
    }

    /// The persona style classified at construction time.
    #[must_use]
    pub fn persona_style(&self) -> PersonaStyle {
        self.persona_style
    }

    /// Whether this agent uses the realistic persona-tuned generator.
    #[must_use]
    pub fn use_realistic_generation(&self) -> bool {
        self.use_realistic_generation
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_goal_no_persona_uses_generic_mode() {
        let svc = MockLlmService::new("Alice", "Explorer", None, None, None);
        assert!(!svc.use_realistic_generation());
    }

    #[test]
    fn goal_present_forces_realistic_mode() {
        let svc = MockLlmService::new("Alice", "Explorer", Some("find the relic".into()), None, None);
        assert!(svc.use_realistic_generation());
    }

    #[test]
    fn persona_present_forces_realistic_mode() {
        let svc = MockLlmService::new("Alice", "Explorer", None, Some("bold".into()), None);
        assert!(svc.use_realistic_generation());
    }

    #[test]
    fn explicit_override_wins_over_auto_detection() {
        let svc = MockLlmService::new(
            "Alice",
            "Explorer",
            Some("find the relic".into()),
            None,
            Some(false),
        );
        assert!(!svc.use_realistic_generation());

        let svc = MockLlmService::new("Alice", "Explorer", None, None, Some(true));
        assert!(svc.use_realistic_generation());
    }

    #[test]
    fn persona_style_is_cached_at_construction() {
        let svc = MockLlmService::new("Alice", "Explorer", None, Some("bold and daring".into()), None);
        assert_eq!(svc.persona_style(), PersonaStyle::Bold);
    }

    #[test]
    fn generic_result_contains_agent_name() {
        let svc = MockLlmService::new("Alice", "Explorer", None, None, None);
        let text = svc.generate_result("scout the ridge", None);
        assert!(text.contains("Alice"));
    }

    #[test]
    fn realistic_result_is_deterministic_for_a_pick_index() {
        let svc = MockLlmService::new(
            "Alice",
            "Explorer",
            None,
            Some("bold and daring".into()),
            None,
        );
        let a = svc.generate_result("Map the unexplored frontier", Some(0));
        let b = svc.generate_result("Map the unexplored frontier", Some(0));
        assert_eq!(a, b);
    }

    #[test]
    fn detect_topic_for_is_a_total_static_helper() {
        assert_eq!(
            MockLlmService::detect_topic_for("build a fortress wall"),
            Topic::Construction
        );
    }
}
