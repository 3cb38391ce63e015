use super::{display::TimelineTerminal, policy::Simulation, process::Time};
use std::{io, time::Duration};

pub enum RunnerEvent {
    Quit,
    Pause,
    Resume,
    Step,
    None,
}

/// Replays a finished simulation in the terminal, one time unit per tick.
///
/// The schedule is already computed; the runner only moves a clock over it.
pub struct TimelineRunner {
    terminal: TimelineTerminal,
    simulation: Simulation,
    clock: Time,
    paused: bool,
}

impl TimelineRunner {
    pub fn new(simulation: Simulation, tick_rate: Duration) -> Result<Self, io::Error> {
        let terminal = TimelineTerminal::new(tick_rate)?;

        Ok(Self {
            terminal,
            simulation,
            clock: 0,
            paused: false,
        })
    }

    fn advance(&mut self) {
        if self.clock < self.simulation.schedule.makespan() {
            self.clock += 1;
        }
    }

    // Returns false if the program should quit
    pub fn run(&mut self) -> io::Result<bool> {
        if !self.paused {
            self.advance();
        }
        self.terminal
            .draw(&self.simulation, self.clock, self.paused)?;

        match self.terminal.get_input() {
            RunnerEvent::Quit => return Ok(false),
            RunnerEvent::Pause if !self.paused => self.paused = true,
            RunnerEvent::Resume if self.paused => self.paused = false,
            RunnerEvent::Step if self.paused => self.advance(),
            _ => {}
        }
        Ok(true)
    }
}
