use super::{arrival_order, run_to_completion, Process, Schedule, Scheduler};
use log::debug;

/// Runs processes to completion in order of arrival.
pub struct Fcfs;

impl Scheduler for Fcfs {
    const NAME: &'static str = "First-Come-First-Served";

    fn schedule(&self, processes: &mut [Process]) -> Schedule {
        let mut schedule = Schedule::new();
        let mut now = 0;

        for index in arrival_order(processes) {
            let process = &mut processes[index];
            if now < process.arrival_time() {
                debug!("CPU idle from {} to {}", now, process.arrival_time());
                now = process.arrival_time();
            }
            now = run_to_completion(process, now, &mut schedule);
        }

        schedule
    }
}
