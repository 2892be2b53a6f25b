//! Settings for one batch of checks.
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// How long one probe may wait before it counts as timed out. The value
/// covers most healthy servers.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Concurrent probes allowed when `--max-workers` is not given.
pub const DEFAULT_MAX_WORKERS: usize = 10;

/// DTO for the configuration as the user supplied it.
///
/// Configuration does not need to be valid.
#[derive(Debug)]
pub struct PlainConfiguration {
    pub input_file: PathBuf,
    pub max_workers: usize,
}

/// Validated configuration
pub struct Configuration {
    pub input_file: PathBuf,
    pub max_workers: NonZeroUsize,
    pub probe_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Invalid number of workers: {value}. It must be a positive number")]
    InvalidMaxWorkers { value: usize },
}

impl TryFrom<PlainConfiguration> for Configuration {
    type Error = ConfigurationError;

    fn try_from(plain_config: PlainConfiguration) -> Result<Self, Self::Error> {
        let max_workers = NonZeroUsize::new(plain_config.max_workers).ok_or(ConfigurationError::InvalidMaxWorkers {
            value: plain_config.max_workers,
        })?;

        Ok(Configuration {
            input_file: plain_config.input_file,
            max_workers,
            probe_timeout: DEFAULT_TIMEOUT,
        })
    }
}
