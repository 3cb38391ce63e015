use super::{arrival_order, run_to_completion, Process, Schedule, Scheduler};
use log::debug;

/// Non-preemptive shortest job first: among the arrived processes, the one
/// with the smallest burst runs to completion.
pub struct ShortestJobFirst;

impl Scheduler for ShortestJobFirst {
    const NAME: &'static str = "Shortest Job First";

    fn schedule(&self, processes: &mut [Process]) -> Schedule {
        let pending = arrival_order(processes);
        run_non_preemptive(processes, pending, Process::burst_time)
    }
}

/// Repeatedly picks the ready process with the smallest `key` and runs it to
/// completion. Ties go to whichever comes first in `pending`.
pub(super) fn run_non_preemptive<K, F>(
    processes: &mut [Process],
    mut pending: Vec<usize>,
    key: F,
) -> Schedule
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut schedule = Schedule::new();
    let mut now = 0;

    while !pending.is_empty() {
        let selected = pending
            .iter()
            .enumerate()
            .filter(|&(_, &index)| processes[index].has_arrived(now))
            .min_by_key(|&(_, &index)| key(&processes[index]))
            .map(|(position, _)| position);

        let Some(position) = selected else {
            // Nothing has arrived yet, skip ahead to the next arrival
            let next = pending
                .iter()
                .map(|&index| processes[index].arrival_time())
                .min()
                .unwrap_or(now + 1);
            debug!("CPU idle from {} to {}", now, next);
            now = next;
            continue;
        };

        let index = pending.remove(position);
        now = run_to_completion(&mut processes[index], now, &mut schedule);
    }

    schedule
}
