use crate::scheduler::{simulate, Policy, ProcessSpec, SchedulerError, Simulation};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

/// A simulation request as read from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default = "default_policy")]
    pub policy: String,
    #[serde(default)]
    pub quantum: Option<i64>,
    pub processes: Vec<ProcessSpec>,
    /// Where to write the CSV results table, if anywhere.
    #[serde(default)]
    pub export: Option<PathBuf>,
    #[serde(default = "default_animate")]
    pub animate: bool,
    /// Animation speed, milliseconds per simulated time unit.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_policy() -> String {
    "fcfs".to_owned()
}

fn default_animate() -> bool {
    true
}

fn default_tick_ms() -> u64 {
    200
}

impl SimConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        SimConfig::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Built-in process set used when no configuration file is given.
    pub fn demo() -> Self {
        Self {
            policy: "rr".to_owned(),
            quantum: Some(2),
            processes: vec![
                ProcessSpec::with_priority(1, 0, 5, 2),
                ProcessSpec::with_priority(2, 1, 3, 1),
                ProcessSpec::with_priority(3, 2, 8, 4),
                ProcessSpec::with_priority(4, 3, 6, 3),
                ProcessSpec::with_priority(5, 12, 2, 0),
            ],
            export: None,
            animate: default_animate(),
            tick_ms: default_tick_ms(),
        }
    }

    pub fn policy(&self) -> Result<Policy, SchedulerError> {
        Policy::from_name(&self.policy, self.quantum)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn simulate(&self) -> Result<Simulation, ConfigError> {
        Ok(simulate(&self.processes, self.policy()?)?)
    }
}
