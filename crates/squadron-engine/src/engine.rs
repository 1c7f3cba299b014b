//! [`RunEngine`]: owns every run, drives the state machine, emits events
//! (spec §4.1).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use rand::Rng;
use squadron_core::{AgentConfigSnapshot, AgentId, EngineError, Outcome, Run, RunId, RunStatus, now_ms};
use squadron_events::{EventBus, Topic};
use squadron_mock::MockLlmService;
use tracing::debug;

use crate::config::EngineConfig;
use crate::executor::{Executor, ExecutorOutcome};

const UNEXPECTED_ERROR_MESSAGE: &str = "Nastala neočekávaná chyba";

struct EngineState {
    runs: HashMap<RunId, Run>,
    order: Vec<RunId>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            runs: HashMap::new(),
            order: Vec::new(),
        }
    }
}

struct Inner {
    state: RwLock<EngineState>,
    bus: EventBus,
    config: EngineConfig,
}

/// Owns the run map and drives every run through its lifecycle.
///
/// Cheaply [`Clone`]-able: clones share the same underlying run map, event
/// bus, and configuration (spec §5 — the run map and subscriber table are
/// process-wide).
#[derive(Clone)]
pub struct RunEngine {
    inner: Arc<Inner>,
}

impl RunEngine {
    /// Construct a new, empty engine.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(EngineState::new()),
                bus: EventBus::new(),
                config,
            }),
        }
    }

    /// Subscribe to `topic`; returns an unsubscribe closure (spec §4.3).
    pub fn on<F>(&self, topic: Topic, handler: F) -> Box<dyn FnOnce() + Send>
    where
        F: Fn(&Run) + Send + Sync + 'static,
    {
        self.inner.bus.on(topic, handler)
    }

    /// Remove a subscription by the id returned from [`EventBus::on`].
    ///
    /// [`EventBus::on`]: squadron_events::EventBus::on
    pub fn off(&self, topic: Topic, id: squadron_events::SubscriptionId) -> bool {
        self.inner.bus.off(topic, id)
    }

    /// Create a new `pending` run; emits `run:created` synchronously (spec
    /// §4.1).
    pub fn create_run(
        &self,
        agent_id: AgentId,
        agent_name: impl Into<String>,
        agent_role: impl Into<String>,
        task_description: impl Into<String>,
        config_snapshot: Option<AgentConfigSnapshot>,
    ) -> Run {
        let run = Run::new(
            agent_id,
            agent_name.into(),
            agent_role.into(),
            task_description.into(),
            config_snapshot,
        );
        {
            let mut state = self.inner.state.write();
            state.order.push(run.id.clone());
            let _ = state.runs.insert(run.id.clone(), run.clone());
        }
        debug!(run_id = %run.id, agent_id = %run.agent_id, "run created");
        self.inner.bus.emit(Topic::RunCreated, &run);
        run
    }

    /// Transition a `pending` run to `running` and begin execution (spec
    /// §4.1).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RunNotFound`] for an unknown `run_id`, or
    /// [`EngineError::UnexpectedStatus`] if the run is not `pending`. These
    /// are programmer errors (spec §7): the run's state is unchanged.
    pub fn start_run(
        &self,
        run_id: &RunId,
        executor: Option<Arc<dyn Executor>>,
    ) -> Result<(), EngineError> {
        let snapshot = self.transition(run_id, RunStatus::Pending, |run| {
            run.status = RunStatus::Running;
            run.started_at = Some(now_ms());
        })?;

        self.inner.bus.emit(Topic::RunStarted, &snapshot);
        self.spawn_drive(run_id.clone(), executor, false);
        Ok(())
    }

    /// Resume an `awaiting` run with the user's `answer` (spec §4.1).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RunNotFound`] for an unknown `run_id`, or
    /// [`EngineError::UnexpectedStatus`] if the run is not `awaiting`.
    pub fn resume_run(
        &self,
        run_id: &RunId,
        answer: impl Into<String>,
        executor: Option<Arc<dyn Executor>>,
    ) -> Result<(), EngineError> {
        let answer = answer.into();
        let snapshot = self.transition(run_id, RunStatus::Awaiting, |run| {
            run.answer = Some(answer.clone());
            run.completed_at = None;
            run.status = RunStatus::Running;
        })?;

        self.inner.bus.emit(Topic::RunResumed, &snapshot);
        self.spawn_drive(run_id.clone(), executor, true);
        Ok(())
    }

    /// Convenience wrapper: `create_run` + `start_run`, resolving when the
    /// run reaches `completed` or `awaiting`, rejecting when it reaches
    /// `failed` (spec §4.1).
    ///
    /// # Errors
    ///
    /// Rejects with an error whose message is the run's `error` field when
    /// the run fails. Also propagates [`EngineError`] if `start_run` itself
    /// fails (which should not happen for a freshly created run).
    pub async fn run_async(
        &self,
        agent_id: AgentId,
        agent_name: impl Into<String>,
        agent_role: impl Into<String>,
        task_description: impl Into<String>,
        executor: Option<Arc<dyn Executor>>,
        config_snapshot: Option<AgentConfigSnapshot>,
    ) -> Result<Run, anyhow::Error> {
        let run = self.create_run(agent_id, agent_name, agent_role, task_description, config_snapshot);
        let run_id = run.id.clone();

        let (tx, rx) = tokio::sync::oneshot::channel::<Run>();
        let tx = Arc::new(Mutex::new(Some(tx)));

        let unsubscribers: Vec<_> = [Topic::RunCompleted, Topic::RunAwaiting, Topic::RunFailed]
            .into_iter()
            .map(|topic| {
                let target = run_id.clone();
                let tx = Arc::clone(&tx);
                self.inner.bus.on(topic, move |run: &Run| {
                    if run.id == target {
                        if let Some(sender) = tx.lock().take() {
                            let _ = sender.send(run.clone());
                        }
                    }
                })
            })
            .collect();

        self.start_run(&run_id, executor)?;

        let outcome = rx.await;
        for unsubscribe in unsubscribers {
            unsubscribe();
        }

        let final_run = outcome.map_err(|_| {
            anyhow::anyhow!("engine dropped before run {run_id} reached a terminal state")
        })?;

        if final_run.status == RunStatus::Failed {
            Err(anyhow::anyhow!(
                final_run.error.clone().unwrap_or_default()
            ))
        } else {
            Ok(final_run)
        }
    }

    /// Look up a run by id.
    #[must_use]
    pub fn get_run(&self, run_id: &RunId) -> Option<Run> {
        self.inner.state.read().runs.get(run_id).cloned()
    }

    /// All runs, in creation order.
    #[must_use]
    pub fn get_all_runs(&self) -> Vec<Run> {
        let state = self.inner.state.read();
        state.order.iter().filter_map(|id| state.runs.get(id).cloned()).collect()
    }

    /// All runs belonging to `agent_id`, in creation order.
    #[must_use]
    pub fn get_runs_by_agent(&self, agent_id: &AgentId) -> Vec<Run> {
        self.get_all_runs()
            .into_iter()
            .filter(|run| &run.agent_id == agent_id)
            .collect()
    }

    /// Apply a mutation to a run currently in `expected` status, returning a
    /// snapshot of the run after the mutation. Used by `start_run` and
    /// `resume_run` to keep the precondition check and the mutation atomic
    /// under a single write-lock acquisition.
    fn transition(
        &self,
        run_id: &RunId,
        expected: RunStatus,
        mutate: impl FnOnce(&mut Run),
    ) -> Result<Run, EngineError> {
        let mut state = self.inner.state.write();
        let run = state
            .runs
            .get_mut(run_id)
            .ok_or_else(|| EngineError::RunNotFound(run_id.to_string()))?;
        if run.status != expected {
            return Err(EngineError::UnexpectedStatus {
                expected,
                actual: run.status,
            });
        }
        mutate(run);
        Ok(run.clone())
    }

    fn spawn_drive(&self, run_id: RunId, executor: Option<Arc<dyn Executor>>, is_resume: bool) {
        let engine = self.clone();
        let _ = tokio::spawn(async move {
            engine.drive_to_terminal(run_id, executor, is_resume).await;
        });
    }

    /// Runs to completion after the synchronous `started`/`resumed`
    /// emission: either awaits the caller's executor, or runs the mock path
    /// (delay + probabilistic question/result), then applies the resulting
    /// state transition and emits the matching terminal event.
    async fn drive_to_terminal(&self, run_id: RunId, executor: Option<Arc<dyn Executor>>, is_resume: bool) {
        let outcome = match executor {
            Some(executor) => match executor.execute().await {
                Ok(ExecutorOutcome::Result(text)) => Ok(Outcome::Result(text)),
                Ok(ExecutorOutcome::Question(text)) if is_resume => Ok(Outcome::Result(text)),
                Ok(ExecutorOutcome::Question(text)) => Ok(Outcome::Question(text)),
                Err(error) => Err(error_message(&error)),
            },
            None => self.run_mock_path(&run_id, is_resume).await,
        };

        match outcome {
            Ok(Outcome::Result(text)) => self.apply_result(&run_id, text),
            Ok(Outcome::Question(text)) => self.apply_question(&run_id, text),
            Err(message) => self.apply_failure(&run_id, message),
        }
    }

    async fn run_mock_path(&self, run_id: &RunId, is_resume: bool) -> Result<Outcome, String> {
        let Some(run) = self.get_run(run_id) else {
            return Err(UNEXPECTED_ERROR_MESSAGE.to_string());
        };

        let delay_ms = self
            .inner
            .config
            .delay_sampler
            .sample(self.inner.config.min_delay_ms, self.inner.config.max_delay_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let question_probability = if is_resume {
            0.0
        } else {
            self.inner.config.mock_question_probability
        };

        let goal = run.config_snapshot.as_ref().and_then(|c| c.goal.clone());
        let persona = run.config_snapshot.as_ref().and_then(|c| c.persona.clone());
        let service = MockLlmService::new(
            run.agent_name.clone(),
            run.agent_role.clone(),
            goal,
            persona,
            self.inner.config.force_realistic_generation,
        );

        let roll: f64 = rand::rng().random();
        if roll < question_probability {
            Ok(Outcome::Question(service.generate_question(&run.task_description, None)))
        } else {
            Ok(Outcome::Result(service.generate_result(&run.task_description, None)))
        }
    }

    fn apply_result(&self, run_id: &RunId, text: String) {
        let Ok(snapshot) = self.write_terminal(run_id, |run| {
            run.status = RunStatus::Completed;
            run.completed_at = Some(now_ms());
            run.result = Some(text);
        }) else {
            return;
        };
        self.inner.bus.emit(Topic::RunCompleted, &snapshot);
    }

    fn apply_question(&self, run_id: &RunId, text: String) {
        let Ok(snapshot) = self.write_terminal(run_id, |run| {
            run.status = RunStatus::Awaiting;
            run.completed_at = Some(now_ms());
            run.question = Some(text);
        }) else {
            return;
        };
        self.inner.bus.emit(Topic::RunAwaiting, &snapshot);
    }

    fn apply_failure(&self, run_id: &RunId, message: String) {
        let message = if message.is_empty() {
            UNEXPECTED_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        let Ok(snapshot) = self.write_terminal(run_id, |run| {
            run.status = RunStatus::Failed;
            run.completed_at = Some(now_ms());
            run.error = Some(message);
        }) else {
            return;
        };
        self.inner.bus.emit(Topic::RunFailed, &snapshot);
    }

    /// Like [`Self::transition`] but without a precondition on the current
    /// status: the background task driving a run to its terminal state
    /// already knows the run is `running` (it just transitioned it there),
    /// so only existence is checked.
    fn write_terminal(&self, run_id: &RunId, mutate: impl FnOnce(&mut Run)) -> Result<Run, ()> {
        let mut state = self.inner.state.write();
        let Some(run) = state.runs.get_mut(run_id) else {
            return Err(());
        };
        mutate(run);
        Ok(run.clone())
    }
}

fn error_message(error: &anyhow::Error) -> String {
    let message = error.to_string();
    if message.is_empty() {
        UNEXPECTED_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
