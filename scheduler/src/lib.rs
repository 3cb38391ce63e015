pub mod config;
pub mod scheduler;

pub use config::{ConfigError, SimConfig};
pub use scheduler::{
    simulate, Interval, Metrics, Policy, Process, ProcessSpec, Schedule, SchedulerError,
    Simulation, Summary,
};
