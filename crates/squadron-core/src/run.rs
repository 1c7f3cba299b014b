//! The [`Run`] data model: the central record the engine owns (spec §3).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{AgentId, RunId};

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Lifecycle status of a [`Run`].
///
/// Transitions: `pending` → `running` → {`completed` | `awaiting` | `failed`};
/// `awaiting` → `running` → {`completed` | `failed`} (spec §4.1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Created but not yet started.
    Pending,
    /// Actively executing (mock delay pending, or executor future pending).
    Running,
    /// Quasi-terminal: produced a clarifying question, waiting on `resume_run`.
    Awaiting,
    /// Terminal: produced a result.
    Completed,
    /// Terminal: the executor rejected, or a mock path error occurred.
    Failed,
}

impl RunStatus {
    /// `completed` and `failed` are sinks; every other status can still
    /// transition further.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunStatus::Pending => "pending",
            RunStatus::Running => "running",
            RunStatus::Awaiting => "awaiting",
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// A frozen copy of an agent's configuration, attached to a run at creation
/// time so later edits to the live agent config never retroactively change
/// a past run's content generation or diagnostics (spec §3).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfigSnapshot {
    /// Agent id this snapshot was taken from.
    pub id: AgentId,
    /// Agent display name at snapshot time.
    pub name: String,
    /// Agent role at snapshot time.
    pub role: String,
    /// Agent goal, if one was set.
    pub goal: Option<String>,
    /// Agent persona free text, if one was set.
    pub persona: Option<String>,
    /// Monotonic version counter of the live agent config this was copied from.
    pub config_version: u32,
}

/// The outcome an [`crate::run`]'s executor resolves with.
///
/// Mirrors the tagged union from spec §6: a plain string is always a
/// result; `Question` is only valid as the resolution of the *initial*
/// `start_run` and is coerced to `Result` when returned from `resume_run`
/// (spec §4.1, to prevent infinite question/answer loops).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The task finished; the agent produced a final answer.
    Result(String),
    /// The agent needs clarification before it can finish.
    Question(String),
}

impl From<String> for Outcome {
    fn from(text: String) -> Self {
        Outcome::Result(text)
    }
}

impl From<&str> for Outcome {
    fn from(text: &str) -> Self {
        Outcome::Result(text.to_owned())
    }
}

/// One execution of a task by one agent — the unit the engine schedules.
///
/// See spec §3 for the full field table and invariants. All reads the
/// engine hands back (via `get_run`, `get_all_runs`, or event payloads) are
/// owned clones, so no external caller can mutate engine-held state through
/// a returned value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Unique, stable run id.
    pub id: RunId,
    /// Caller-supplied agent id; opaque to the engine.
    pub agent_id: AgentId,
    /// Agent display name, snapshotted at creation.
    pub agent_name: String,
    /// Agent role, snapshotted at creation.
    pub agent_role: String,
    /// The task text this run executes; never mutated after creation.
    pub task_description: String,
    /// Current lifecycle status.
    pub status: RunStatus,
    /// Creation timestamp (ms epoch).
    pub created_at: i64,
    /// First transition-to-`running` timestamp; preserved across `awaiting`
    /// → `running` (spec §3).
    pub started_at: Option<i64>,
    /// Set on entering a terminal state or `awaiting`; cleared on leaving
    /// `awaiting` (spec §3).
    pub completed_at: Option<i64>,
    /// Present iff `status == Completed`.
    pub result: Option<String>,
    /// Present once the run has entered `awaiting` at least once; preserved
    /// across resume.
    pub question: Option<String>,
    /// Set by `resume_run`; preserved through subsequent states.
    pub answer: Option<String>,
    /// Present iff `status == Failed`.
    pub error: Option<String>,
    /// Frozen agent config snapshot, if one was supplied at creation.
    pub config_snapshot: Option<AgentConfigSnapshot>,
}

impl Run {
    /// Construct a brand-new `pending` run.
    ///
    /// Intended for use by the engine that owns the run map; assigns a
    /// fresh [`RunId`] and stamps `created_at` (spec §4.1 `create_run`).
    #[must_use]
    pub fn new(
        agent_id: AgentId,
        agent_name: String,
        agent_role: String,
        task_description: String,
        config_snapshot: Option<AgentConfigSnapshot>,
    ) -> Self {
        Self {
            id: RunId::new(),
            agent_id,
            agent_name,
            agent_role,
            task_description,
            status: RunStatus::Pending,
            created_at: now_ms(),
            started_at: None,
            completed_at: None,
            result: None,
            question: None,
            answer: None,
            error: None,
            config_snapshot,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_run_is_pending() {
        let run = Run::new(
            AgentId::from("a1"),
            "Alice".into(),
            "Explorer".into(),
            "Map the sector".into(),
            None,
        );
        assert_eq!(run.status, RunStatus::Pending);
        assert!(run.started_at.is_none());
        assert!(run.completed_at.is_none());
        assert!(run.result.is_none());
    }

    #[test]
    fn terminal_statuses() {
        assert!(RunStatus::Completed.is_terminal());
        assert!(RunStatus::Failed.is_terminal());
        assert!(!RunStatus::Pending.is_terminal());
        assert!(!RunStatus::Running.is_terminal());
        assert!(!RunStatus::Awaiting.is_terminal());
    }

    #[test]
    fn status_display_matches_error_messages() {
        assert_eq!(RunStatus::Pending.to_string(), "pending");
        assert_eq!(RunStatus::Awaiting.to_string(), "awaiting");
    }

    #[test]
    fn outcome_from_string() {
        let outcome: Outcome = "done".into();
        assert_eq!(outcome, Outcome::Result("done".to_string()));
    }

    #[test]
    fn status_serde_snake_case() {
        let json = serde_json::to_string(&RunStatus::Awaiting).unwrap();
        assert_eq!(json, "\"awaiting\"");
    }
}
