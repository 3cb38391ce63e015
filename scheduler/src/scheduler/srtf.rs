use super::{Process, Schedule, Scheduler};
use log::debug;

/// Preemptive shortest job first, simulated one time unit at a time.
///
/// A waiting process only takes the CPU when its remaining time is strictly
/// less than that of the running one. Waiting processes are kept in input
/// order and a preempted process rejoins at the back, so ties go to whoever
/// has been waiting in that list longest.
pub struct ShortestRemainingTimeFirst;

impl Scheduler for ShortestRemainingTimeFirst {
    const NAME: &'static str = "Shortest Remaining Time First";

    fn schedule(&self, processes: &mut [Process]) -> Schedule {
        let mut waiting: Vec<usize> = (0..processes.len()).collect();
        let mut schedule = Schedule::new();
        let mut running: Option<usize> = None;
        let mut now = 0;

        while running.is_some() || !waiting.is_empty() {
            let shortest = waiting
                .iter()
                .enumerate()
                .filter(|&(_, &index)| processes[index].has_arrived(now))
                .min_by_key(|&(_, &index)| processes[index].remaining_time())
                .map(|(position, &index)| (position, index));

            let selected = match (running, shortest) {
                (Some(current), Some((position, candidate)))
                    if processes[candidate].remaining_time() < processes[current].remaining_time() =>
                {
                    debug!(
                        "Process {} preempted by {} at {}",
                        processes[current].pid(),
                        processes[candidate].pid(),
                        now
                    );
                    waiting.remove(position);
                    waiting.push(current);
                    candidate
                }
                (Some(current), _) => current,
                (None, Some((position, candidate))) => {
                    waiting.remove(position);
                    candidate
                }
                (None, None) => {
                    let next = waiting
                        .iter()
                        .map(|&index| processes[index].arrival_time())
                        .min();
                    match next {
                        Some(next) => {
                            debug!("CPU idle from {} to {}", now, next);
                            now = next;
                            continue;
                        }
                        None => break,
                    }
                }
            };

            let process = &mut processes[selected];
            if process.dispatch(now) {
                debug!("Process {} first dispatched at {}", process.pid(), now);
            }
            schedule.record_tick(process.pid(), now);

            if process.execute(1, now + 1) {
                debug!("Process {} completed at {}", process.pid(), now + 1);
                running = None;
            } else {
                running = Some(selected);
            }
            now += 1;
        }

        schedule
    }
}
