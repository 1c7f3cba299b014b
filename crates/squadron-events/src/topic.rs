//! The six event topics a run can emit (spec §3, §4.1).

use std::fmt;

/// Topic of an event emitted by the run engine.
///
/// Every event payload is the current [`Run`](squadron_core::Run) record at
/// the instant of emission (spec §3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// A run was created (`status == pending`).
    RunCreated,
    /// A run started (`status == running`), emitted synchronously by
    /// `start_run`.
    RunStarted,
    /// A run completed (`status == completed`).
    RunCompleted,
    /// A run is awaiting an answer (`status == awaiting`).
    RunAwaiting,
    /// A run resumed (`status == running` again), emitted synchronously by
    /// `resume_run`.
    RunResumed,
    /// A run failed (`status == failed`).
    RunFailed,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Topic::RunCreated => "run:created",
            Topic::RunStarted => "run:started",
            Topic::RunCompleted => "run:completed",
            Topic::RunAwaiting => "run:awaiting",
            Topic::RunResumed => "run:resumed",
            Topic::RunFailed => "run:failed",
        };
        f.write_str(s)
    }
}
