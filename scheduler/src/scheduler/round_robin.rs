use super::{arrival_order, Interval, Process, Schedule, Scheduler, Time};
use log::debug;
use std::{collections::VecDeque, iter::Peekable, vec};

/// Round Robin over a FIFO ready queue, one interval per dispatch.
pub struct RoundRobin {
    quantum: Time,
}

impl RoundRobin {
    pub fn new(quantum: Time) -> Self {
        debug_assert!(quantum > 0, "Round Robin needs a positive quantum");
        Self { quantum }
    }
}

impl Scheduler for RoundRobin {
    const NAME: &'static str = "Round Robin";

    fn schedule(&self, processes: &mut [Process]) -> Schedule {
        let mut arrivals = arrival_order(processes).into_iter().peekable();
        let mut queue = VecDeque::with_capacity(processes.len());
        let mut schedule = Schedule::new();
        let mut now = 0;

        admit(&mut arrivals, &mut queue, processes, now);

        loop {
            let Some(index) = queue.pop_front() else {
                match arrivals.peek().copied() {
                    Some(next) => {
                        debug!("CPU idle from {} to {}", now, processes[next].arrival_time());
                        now = now.max(processes[next].arrival_time());
                        admit(&mut arrivals, &mut queue, processes, now);
                        continue;
                    }
                    None => break,
                }
            };

            let process = &mut processes[index];
            let pid = process.pid();
            if process.dispatch(now) {
                debug!("Process {} first dispatched at {}", pid, now);
            }

            let slice = self.quantum.min(process.remaining_time());
            let end = now + slice;
            schedule.push(Interval::new(pid, now, end));
            let completed = process.execute(slice, end);
            now = end;

            // Arrivals during the slice queue up ahead of the preempted process
            admit(&mut arrivals, &mut queue, processes, now);

            if completed {
                debug!("Process {} completed at {}", pid, now);
            } else {
                queue.push_back(index);
            }
        }

        schedule
    }
}

fn admit(
    arrivals: &mut Peekable<vec::IntoIter<usize>>,
    queue: &mut VecDeque<usize>,
    processes: &[Process],
    now: Time,
) {
    while let Some(index) = arrivals.next_if(|&index| processes[index].has_arrived(now)) {
        queue.push_back(index);
    }
}
