use super::metrics::{self, Metrics};
use serde::{Deserialize, Serialize};

pub type Pid = u64;
pub type Time = u64;
pub type Priority = i64;

/// A process as submitted by the caller, before validation.
///
/// Fields are signed so that out-of-range input can be represented and
/// rejected with a descriptive error instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: i64,
    pub arrival_time: i64,
    pub burst_time: i64,
    #[serde(default)]
    pub priority: i64,
}

impl ProcessSpec {
    pub fn new(pid: i64, arrival_time: i64, burst_time: i64) -> Self {
        ProcessSpec::with_priority(pid, arrival_time, burst_time, 0)
    }

    pub fn with_priority(pid: i64, arrival_time: i64, burst_time: i64, priority: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// A process record owned by a single simulation run.
///
/// The input fields never change. `remaining_time` counts down as the
/// process executes, `start_time` is fixed on first dispatch and
/// `completion_time` once `remaining_time` reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    pid: Pid,
    arrival_time: Time,
    burst_time: Time,
    priority: Priority,
    remaining_time: Time,
    start_time: Option<Time>,
    completion_time: Option<Time>,
}

impl Process {
    pub const DEFAULT_PRIORITY: Priority = 0;

    pub fn new(pid: Pid, arrival_time: Time, burst_time: Time) -> Self {
        Process::with_priority(pid, arrival_time, burst_time, Process::DEFAULT_PRIORITY)
    }

    pub fn with_priority(pid: Pid, arrival_time: Time, burst_time: Time, priority: Priority) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Time {
        self.burst_time
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn remaining_time(&self) -> Time {
        self.remaining_time
    }

    pub fn start_time(&self) -> Option<Time> {
        self.start_time
    }

    pub fn completion_time(&self) -> Option<Time> {
        self.completion_time
    }

    pub fn has_arrived(&self, now: Time) -> bool {
        self.arrival_time <= now
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    pub fn response_time(&self) -> Option<Time> {
        self.start_time
            .map(|start| metrics::response_time(start, self.arrival_time))
    }

    pub fn turnaround_time(&self) -> Option<Time> {
        self.completion_time
            .map(|completion| metrics::turnaround_time(completion, self.arrival_time))
    }

    pub fn waiting_time(&self) -> Option<Time> {
        self.turnaround_time()
            .map(|turnaround| metrics::waiting_time(turnaround, self.burst_time))
    }

    /// Final metrics, available once the process has completed.
    pub fn metrics(&self) -> Option<Metrics> {
        match (self.start_time, self.completion_time) {
            (Some(start), Some(completion)) => Some(metrics::derive(
                self.arrival_time,
                self.burst_time,
                start,
                completion,
            )),
            _ => None,
        }
    }

    /// Marks the process as running at `now`. Only the first dispatch is recorded.
    pub(crate) fn dispatch(&mut self, now: Time) -> bool {
        debug_assert!(self.has_arrived(now), "process {} dispatched before arrival", self.pid);
        if self.start_time.is_some() {
            return false;
        }
        self.start_time = Some(now);
        true
    }

    /// Runs the process for `ticks` units ending at `end`. Returns true if it completed.
    pub(crate) fn execute(&mut self, ticks: Time, end: Time) -> bool {
        debug_assert!(ticks <= self.remaining_time, "process {} overran its burst", self.pid);
        self.remaining_time = self.remaining_time.saturating_sub(ticks);
        if self.remaining_time == 0 {
            self.completion_time = Some(end);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_process_is_unstarted() {
        let process = Process::new(1, 3, 4);
        assert_eq!(process.remaining_time(), 4);
        assert_eq!(process.start_time(), None);
        assert_eq!(process.response_time(), None);
        assert_eq!(process.waiting_time(), None);
        assert!(process.metrics().is_none());
    }

    #[test]
    fn start_time_is_only_set_on_first_dispatch() {
        let mut process = Process::new(1, 0, 4);
        assert!(process.dispatch(2));
        assert!(!process.execute(2, 4));
        assert!(!process.dispatch(6));
        assert!(process.execute(2, 8));

        assert_eq!(process.start_time(), Some(2));
        assert_eq!(process.completion_time(), Some(8));
        assert_eq!(process.response_time(), Some(2));
        assert_eq!(process.turnaround_time(), Some(8));
        assert_eq!(process.waiting_time(), Some(4));
    }
}
