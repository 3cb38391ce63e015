use super::{sjf::run_non_preemptive, Process, Schedule, Scheduler};

/// Non-preemptive priority scheduling. A lower value means a higher priority;
/// equal priorities run in input order.
pub struct PriorityScheduler;

impl Scheduler for PriorityScheduler {
    const NAME: &'static str = "Priority";

    fn schedule(&self, processes: &mut [Process]) -> Schedule {
        let pending = (0..processes.len()).collect();
        run_non_preemptive(processes, pending, Process::priority)
    }
}
