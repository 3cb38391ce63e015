mod display;
mod error;
mod export;
mod fcfs;
mod metrics;
mod policy;
mod priority;
mod process;
mod report;
mod round_robin;
mod runner;
mod schedule;
mod sjf;
mod srtf;
mod validation;

pub use display::TimelineTerminal;
pub use error::{Result, SchedulerError};
pub use export::{write_csv, CSV_HEADER};
pub use fcfs::Fcfs;
pub use metrics::{completion_order, Metrics, Summary};
pub use policy::{simulate, Policy, Simulation};
pub use priority::PriorityScheduler;
pub use process::{Pid, Priority, Process, ProcessSpec, Time};
pub use report::render;
pub use round_robin::RoundRobin;
pub use runner::TimelineRunner;
pub use schedule::{Interval, Schedule};
pub use sjf::ShortestJobFirst;
pub use srtf::ShortestRemainingTimeFirst;
pub use validation::{validate, validate_quantum};

use log::debug;

pub trait Scheduler {
    const NAME: &'static str;

    /// Simulates the policy over `processes`, filling in their computed
    /// fields, and returns the execution timeline.
    fn schedule(&self, processes: &mut [Process]) -> Schedule;
}

/// Indices of `processes` sorted by arrival time. Simultaneous arrivals keep
/// their input order.
fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&index| processes[index].arrival_time());
    order
}

/// Dispatches `process` at `now` and runs it until it finishes. Returns the
/// completion time.
fn run_to_completion(process: &mut Process, now: Time, schedule: &mut Schedule) -> Time {
    let end = now + process.remaining_time();
    process.dispatch(now);
    process.execute(process.remaining_time(), end);
    schedule.push(Interval::new(process.pid(), now, end));
    debug!("Process {} ran from {} to {}", process.pid(), now, end);
    end
}
