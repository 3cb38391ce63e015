use super::{
    error::{Result, SchedulerError},
    validation::{validate, validate_quantum},
    Fcfs, Pid, Process, ProcessSpec, PriorityScheduler, RoundRobin, Schedule, Scheduler,
    ShortestJobFirst, ShortestRemainingTimeFirst, Summary, Time,
};
use log::info;
use std::fmt;

/// The scheduling policies the engine can simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sjf,
    Srtf,
    RoundRobin { quantum: Time },
    Priority,
}

impl Policy {
    /// Parses a policy label. `quantum` is only consulted for Round Robin.
    pub fn from_name(name: &str, quantum: Option<i64>) -> Result<Self> {
        match name.trim().to_lowercase().replace('_', "-").as_str() {
            "fcfs" | "fifo" | "first-come-first-served" => Ok(Self::Fcfs),
            "sjf" | "shortest-job-first" => Ok(Self::Sjf),
            "srtf" | "preemptive-sjf" | "shortest-remaining-time-first" => Ok(Self::Srtf),
            "rr" | "round-robin" | "roundrobin" => {
                let quantum = quantum.ok_or_else(|| {
                    SchedulerError::InvalidInput("Round Robin requires a time quantum".to_owned())
                })?;
                Self::round_robin(quantum)
            }
            "priority" | "prio" => Ok(Self::Priority),
            _ => Err(SchedulerError::UnsupportedPolicy(name.to_owned())),
        }
    }

    pub fn round_robin(quantum: i64) -> Result<Self> {
        Ok(Self::RoundRobin {
            quantum: validate_quantum(quantum)?,
        })
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => Fcfs::NAME,
            Self::Sjf => ShortestJobFirst::NAME,
            Self::Srtf => ShortestRemainingTimeFirst::NAME,
            Self::RoundRobin { .. } => RoundRobin::NAME,
            Self::Priority => PriorityScheduler::NAME,
        }
    }

    /// Runs the matching scheduler over already validated records.
    pub fn run(&self, processes: &mut [Process]) -> Schedule {
        match *self {
            Self::Fcfs => Fcfs.schedule(processes),
            Self::Sjf => ShortestJobFirst.schedule(processes),
            Self::Srtf => ShortestRemainingTimeFirst.schedule(processes),
            Self::RoundRobin { quantum } => RoundRobin::new(quantum).schedule(processes),
            Self::Priority => PriorityScheduler.schedule(processes),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{} (quantum {})", self.name(), quantum),
            _ => f.write_str(self.name()),
        }
    }
}

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub policy: Policy,
    pub schedule: Schedule,
    /// Records in input order, with every metric final.
    pub processes: Vec<Process>,
}

impl Simulation {
    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|process| process.pid() == pid)
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.processes, &self.schedule)
    }
}

/// Validates `specs` and simulates `policy` over a fresh copy of them.
///
/// Nothing is simulated if validation fails.
pub fn simulate(specs: &[ProcessSpec], policy: Policy) -> Result<Simulation> {
    if let Policy::RoundRobin { quantum } = policy {
        validate_quantum(quantum as i64)?;
    }
    let mut processes = validate(specs)?;
    let schedule = policy.run(&mut processes);

    info!(
        "Simulated {} over {} processes: {} intervals, makespan {}",
        policy,
        processes.len(),
        schedule.len(),
        schedule.makespan()
    );

    Ok(Simulation {
        policy,
        schedule,
        processes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_labels() {
        assert_eq!(Policy::from_name("FCFS", None), Ok(Policy::Fcfs));
        assert_eq!(Policy::from_name("preemptive_sjf", None), Ok(Policy::Srtf));
        assert_eq!(
            Policy::from_name("Round-Robin", Some(3)),
            Ok(Policy::RoundRobin { quantum: 3 })
        );
        assert_eq!(
            Policy::from_name("lottery", None),
            Err(SchedulerError::UnsupportedPolicy("lottery".to_owned()))
        );
        assert!(matches!(
            Policy::from_name("rr", None),
            Err(SchedulerError::InvalidInput(_))
        ));
        assert!(matches!(
            Policy::from_name("rr", Some(0)),
            Err(SchedulerError::InvalidInput(_))
        ));
    }
}
