use super::error::{Result, SchedulerError};
use super::process::{Pid, Process, ProcessSpec, Time};
use log::warn;
use std::collections::HashSet;

/// Checks a submitted process set and builds fresh records from it.
///
/// Every call returns new `Process` values, so no run can observe state
/// left behind by another.
pub fn validate(specs: &[ProcessSpec]) -> Result<Vec<Process>> {
    if specs.is_empty() {
        warn!("Rejected simulation request with no processes");
        return Err(SchedulerError::EmptyProcessSet);
    }

    let mut seen = HashSet::with_capacity(specs.len());
    let mut processes = Vec::with_capacity(specs.len());

    for spec in specs {
        let process = build(spec).map_err(|err| {
            warn!("Rejected process {}: {}", spec.pid, err);
            err
        })?;
        if !seen.insert(process.pid()) {
            warn!("Rejected duplicate pid {}", process.pid());
            return Err(SchedulerError::DuplicatePid(process.pid()));
        }
        processes.push(process);
    }

    if horizon(&processes).is_none() {
        warn!("Rejected process set whose total run time overflows");
        return Err(SchedulerError::InvalidInput(format!(
            "latest arrival plus total burst time exceeds {}",
            Time::MAX
        )));
    }

    Ok(processes)
}

/// Latest time any policy can reach: the last arrival followed by every burst.
fn horizon(processes: &[Process]) -> Option<Time> {
    let last_arrival = processes.iter().map(Process::arrival_time).max()?;
    processes
        .iter()
        .map(Process::burst_time)
        .try_fold(last_arrival, Time::checked_add)
}

pub fn validate_quantum(quantum: i64) -> Result<Time> {
    if quantum <= 0 {
        return Err(SchedulerError::InvalidInput(format!(
            "time quantum must be a positive integer, got {quantum}"
        )));
    }
    Ok(quantum as Time)
}

fn build(spec: &ProcessSpec) -> Result<Process> {
    let pid = Pid::try_from(spec.pid).map_err(|_| {
        SchedulerError::InvalidInput(format!("PID must be non-negative, got {}", spec.pid))
    })?;
    let arrival_time = Time::try_from(spec.arrival_time).map_err(|_| {
        SchedulerError::InvalidInput(format!(
            "arrival time of process {pid} must be non-negative, got {}",
            spec.arrival_time
        ))
    })?;
    if spec.burst_time <= 0 {
        return Err(SchedulerError::InvalidInput(format!(
            "burst time of process {pid} must be positive, got {}",
            spec.burst_time
        )));
    }

    Ok(Process::with_priority(
        pid,
        arrival_time,
        spec.burst_time as Time,
        spec.priority,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_fields() {
        let negative_arrival = [ProcessSpec::new(1, -1, 3)];
        let zero_burst = [ProcessSpec::new(1, 0, 0)];
        let negative_pid = [ProcessSpec::new(-4, 0, 2)];

        for specs in [&negative_arrival[..], &zero_burst[..], &negative_pid[..]] {
            assert!(matches!(
                validate(specs),
                Err(SchedulerError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn rejects_duplicate_pids() {
        let specs = [ProcessSpec::new(7, 0, 3), ProcessSpec::new(7, 2, 1)];
        assert_eq!(validate(&specs), Err(SchedulerError::DuplicatePid(7)));
    }

    #[test]
    fn rejects_sets_that_would_overflow_the_clock() {
        let specs = [
            ProcessSpec::new(1, 0, i64::MAX),
            ProcessSpec::new(2, 0, i64::MAX),
            ProcessSpec::new(3, 0, i64::MAX),
        ];
        assert!(matches!(
            validate(&specs),
            Err(SchedulerError::InvalidInput(_))
        ));

        let late = [ProcessSpec::new(1, i64::MAX, i64::MAX), ProcessSpec::new(2, 0, 2)];
        assert!(matches!(
            validate(&late),
            Err(SchedulerError::InvalidInput(_))
        ));

        let fits = [ProcessSpec::new(1, 0, i64::MAX), ProcessSpec::new(2, 5, 3)];
        assert_eq!(horizon(&validate(&fits).unwrap()), Some(i64::MAX as Time + 8));
    }

    #[test]
    fn rejects_empty_set_and_bad_quantum() {
        assert_eq!(validate(&[]), Err(SchedulerError::EmptyProcessSet));
        assert!(validate_quantum(0).is_err());
        assert_eq!(validate_quantum(3), Ok(3));
    }
}
