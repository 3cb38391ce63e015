use super::process::{Pid, Process, Time};
use super::schedule::Schedule;
use serde::Serialize;

/// Per-process results of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub waiting: Time,
    pub turnaround: Time,
    pub completion: Time,
    pub response: Time,
}

pub fn turnaround_time(completion: Time, arrival: Time) -> Time {
    debug_assert!(completion >= arrival);
    completion - arrival
}

pub fn waiting_time(turnaround: Time, burst: Time) -> Time {
    debug_assert!(turnaround >= burst);
    turnaround - burst
}

pub fn response_time(start: Time, arrival: Time) -> Time {
    debug_assert!(start >= arrival);
    start - arrival
}

pub fn derive(arrival: Time, burst: Time, start: Time, completion: Time) -> Metrics {
    let turnaround = turnaround_time(completion, arrival);
    Metrics {
        waiting: waiting_time(turnaround, burst),
        turnaround,
        completion,
        response: response_time(start, arrival),
    }
}

/// Aggregate figures over a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub average_waiting: f64,
    pub average_turnaround: f64,
    pub average_response: f64,
    pub makespan: Time,
    pub busy_time: Time,
    pub idle_time: Time,
    pub cpu_utilisation: f64,
}

impl Summary {
    pub fn of(processes: &[Process], schedule: &Schedule) -> Self {
        let finished: Vec<Metrics> = processes.iter().filter_map(Process::metrics).collect();
        let makespan = schedule.makespan();
        let busy_time = schedule.busy_time();

        Self {
            average_waiting: average(finished.iter().map(|m| m.waiting)),
            average_turnaround: average(finished.iter().map(|m| m.turnaround)),
            average_response: average(finished.iter().map(|m| m.response)),
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilisation: if makespan == 0 {
                0.0
            } else {
                busy_time as f64 / makespan as f64
            },
        }
    }
}

/// Completion order of the pids in `processes`, earliest first.
pub fn completion_order(processes: &[Process]) -> Vec<Pid> {
    let mut finished: Vec<&Process> = processes
        .iter()
        .filter(|process| process.completion_time().is_some())
        .collect();
    finished.sort_by_key(|process| process.completion_time());
    finished.into_iter().map(Process::pid).collect()
}

fn average(values: impl Iterator<Item = Time>) -> f64 {
    let (sum, count) = values.fold((0.0, 0u64), |(sum, count), value| {
        (sum + value as f64, count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities() {
        let metrics = derive(2, 8, 8, 16);
        assert_eq!(metrics.turnaround, 14);
        assert_eq!(metrics.waiting, 6);
        assert_eq!(metrics.response, 6);
        assert_eq!(metrics.completion, 16);
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average(std::iter::empty()), 0.0);
        assert_eq!(average([1, 2, 6].into_iter()), 3.0);
    }
}
