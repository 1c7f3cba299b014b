//! The caller-supplied executor contract (spec §6).

use async_trait::async_trait;

/// What a caller-supplied executor produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutorOutcome {
    /// A plain successful result.
    Result(String),
    /// A clarifying question; only honored on the initial `start_run` — an
    /// executor that returns this during `resume_run` is coerced to
    /// [`ExecutorOutcome::Result`] by the engine (spec §4.1).
    Question(String),
}

impl From<String> for ExecutorOutcome {
    fn from(text: String) -> Self {
        Self::Result(text)
    }
}

impl From<&str> for ExecutorOutcome {
    fn from(text: &str) -> Self {
        Self::Result(text.to_string())
    }
}

/// A caller-supplied asynchronous task executor.
///
/// Supplied to [`crate::RunEngine::start_run`] and
/// [`crate::RunEngine::resume_run`] in place of the built-in mock path. An
/// `Err` return is treated as an executor failure: the run transitions to
/// `failed` and the error's `Display` text becomes the run's `error` field
/// (spec §4.1, §7).
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run the task to completion.
    async fn execute(&self) -> Result<ExecutorOutcome, anyhow::Error>;
}

#[async_trait]
impl<F, Fut> Executor for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: std::future::Future<Output = Result<ExecutorOutcome, anyhow::Error>> + Send,
{
    async fn execute(&self) -> Result<ExecutorOutcome, anyhow::Error> {
        self().await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_is_a_result_outcome() {
        assert_eq!(
            ExecutorOutcome::from("done".to_string()),
            ExecutorOutcome::Result("done".to_string())
        );
    }

    #[tokio::test]
    async fn a_closure_can_serve_as_an_executor() {
        let exec = || async { Ok(ExecutorOutcome::Result("ok".to_string())) };
        let outcome = exec.execute().await.unwrap();
        assert_eq!(outcome, ExecutorOutcome::Result("ok".to_string()));
    }
}
