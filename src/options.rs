use std::convert::TryFrom;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::errors::RunError;
use crate::fixture::DEFAULT_SIZES;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunOptions {
    /// Wildcard over `<experiment>/<variant>` names.
    pub include: String,
    pub sizes: Vec<usize>,
    pub warmup_iterations: u32,
    pub measurement_iterations: u32,
    /// Wall-clock length of a single warmup or measurement iteration.
    pub iteration_time_ms: u64
}

impl Default for RunOptions {
    fn default() -> RunOptions {
        RunOptions {
            include: "*".to_string(),
            sizes: DEFAULT_SIZES.to_vec(),
            warmup_iterations: 1,
            measurement_iterations: 3,
            iteration_time_ms: 1000
        }
    }
}

impl RunOptions {
    pub fn from_json_str(json: &str) -> Result<RunOptions, RunError> {
        let options: RunOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<RunOptions, RunError> {
        let mut source = String::new();
        File::open(path)?.read_to_string(&mut source)?;
        RunOptions::from_json_str(&source)
    }

    pub fn with_include<S: Into<String>>(mut self, include: S) -> RunOptions {
        self.include = include.into();
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<usize>) -> RunOptions {
        self.sizes = sizes;
        self
    }

    pub fn with_warmup_iterations(mut self, iterations: u32) -> RunOptions {
        self.warmup_iterations = iterations;
        self
    }

    pub fn with_measurement_iterations(mut self, iterations: u32) -> RunOptions {
        self.measurement_iterations = iterations;
        self
    }

    /// Stored as whole milliseconds, rounded up.
    pub fn with_iteration_time(mut self, time: Duration) -> RunOptions {
        let millis = (time.as_nanos() + 999_999) / 1_000_000;
        self.iteration_time_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self
    }

    pub fn iteration_time(&self) -> Duration {
        Duration::from_millis(self.iteration_time_ms)
    }

    pub fn validate(&self) -> Result<(), RunError> {
        if self.sizes.is_empty() {
            return Err(RunError::InvalidOption("sizes must not be empty"));
        }
        if self.measurement_iterations == 0 {
            return Err(RunError::InvalidOption("measurement_iterations must be at least 1"));
        }
        if self.iteration_time_ms == 0 {
            return Err(RunError::InvalidOption("iteration_time_ms must be at least 1"));
        }
        Pattern::new(&self.include)?;
        Ok(())
    }
}
