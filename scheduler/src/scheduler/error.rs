use super::process::Pid;
use thiserror::Error;

/// Reasons a simulation request is rejected before any policy runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate PID: a process with PID {0} already exists.")]
    DuplicatePid(Pid),

    #[error("Unsupported policy '{0}'. Valid: fcfs, sjf, srtf, rr, priority")]
    UnsupportedPolicy(String),

    #[error("No processes: add at least one process before running the scheduler.")]
    EmptyProcessSet,
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
