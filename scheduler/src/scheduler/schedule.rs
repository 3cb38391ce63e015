use super::process::{Pid, Time};
use serde::Serialize;

/// `pid` held the CPU during `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub pid: Pid,
    pub start: Time,
    pub end: Time,
}

impl Interval {
    pub fn new(pid: Pid, start: Time, end: Time) -> Self {
        debug_assert!(start < end, "empty interval for process {pid}");
        Self { pid, start, end }
    }

    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    pub fn contains(&self, time: Time) -> bool {
        self.start <= time && time < self.end
    }
}

/// Execution timeline of one run, ordered by start time.
///
/// Idle periods are the gaps between intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    intervals: Vec<Interval>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, interval: Interval) {
        debug_assert!(
            self.intervals.last().map_or(true, |last| last.end <= interval.start),
            "interval {interval:?} overlaps the timeline"
        );
        self.intervals.push(interval);
    }

    /// Records one tick of `pid` at `time`, extending the last interval when
    /// the same process ran up to `time`.
    pub fn record_tick(&mut self, pid: Pid, time: Time) {
        match self.intervals.last_mut() {
            Some(last) if last.pid == pid && last.end == time => last.end = time + 1,
            _ => self.push(Interval::new(pid, time, time + 1)),
        }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Time at which the last process finished.
    pub fn makespan(&self) -> Time {
        self.intervals.last().map_or(0, |last| last.end)
    }

    pub fn busy_time(&self) -> Time {
        self.intervals.iter().map(Interval::duration).sum()
    }

    /// The process holding the CPU at `time`, if any.
    pub fn running_at(&self, time: Time) -> Option<Pid> {
        self.intervals
            .iter()
            .find(|interval| interval.contains(time))
            .map(|interval| interval.pid)
    }

    /// Pids in the order they were first dispatched.
    pub fn dispatch_order(&self) -> Vec<Pid> {
        let mut order = Vec::new();
        for interval in &self.intervals {
            if !order.contains(&interval.pid) {
                order.push(interval.pid);
            }
        }
        order
    }

    /// Merges back-to-back intervals of the same process. Only useful for
    /// display: Round Robin keeps one interval per dispatch on purpose.
    pub fn coalesced(&self) -> Schedule {
        let mut merged: Vec<Interval> = Vec::with_capacity(self.intervals.len());
        for interval in &self.intervals {
            match merged.last_mut() {
                Some(last) if last.pid == interval.pid && last.end == interval.start => {
                    last.end = interval.end
                }
                _ => merged.push(*interval),
            }
        }
        Schedule { intervals: merged }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl From<Vec<Interval>> for Schedule {
    fn from(intervals: Vec<Interval>) -> Self {
        let mut schedule = Schedule::new();
        for interval in intervals {
            schedule.push(interval);
        }
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_of_the_same_process_merge() {
        let mut schedule = Schedule::new();
        schedule.record_tick(1, 0);
        schedule.record_tick(1, 1);
        schedule.record_tick(2, 2);
        schedule.record_tick(1, 4);

        assert_eq!(
            schedule.intervals(),
            &[
                Interval::new(1, 0, 2),
                Interval::new(2, 2, 3),
                Interval::new(1, 4, 5)
            ]
        );
        assert_eq!(schedule.makespan(), 5);
        assert_eq!(schedule.busy_time(), 4);
        assert_eq!(schedule.running_at(3), None);
        assert_eq!(schedule.running_at(4), Some(1));
    }

    #[test]
    fn coalesced_only_merges_adjacent_runs() {
        let schedule = Schedule::from(vec![
            Interval::new(1, 0, 2),
            Interval::new(1, 2, 3),
            Interval::new(1, 4, 5),
            Interval::new(2, 5, 6),
        ]);

        assert_eq!(
            schedule.coalesced().intervals(),
            &[
                Interval::new(1, 0, 3),
                Interval::new(1, 4, 5),
                Interval::new(2, 5, 6)
            ]
        );
        assert_eq!(schedule.dispatch_order(), vec![1, 2]);
    }
}
