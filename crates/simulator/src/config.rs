//! Configuration types for the simulator.

use herdcats_simulation::MAX_TURNS;
use std::path::{Path, PathBuf};

/// File holding `id,name` station rows.
pub const STATIONS_FILE: &str = "tfl_stations.csv";

/// File holding `id,id` connection rows.
pub const CONNECTIONS_FILE: &str = "tfl_connections.csv";

/// Environment variable fixing the random seed.
pub const SEED_VAR: &str = "HERDCATS_SEED";

/// Environment variable pointing at the directory holding the map files.
pub const DATA_DIR_VAR: &str = "HERDCATS_DATA_DIR";

/// Map shipped with this crate.
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Errors from reading configuration out of the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an unsigned 64-bit integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },
}

/// Configuration for a simulation run.
#[derive(Clone, Debug)]
pub struct SimulatorConfig {
    /// Number of seeker/target pairs.
    pub num_pairs: usize,

    /// Turn cap.
    pub max_turns: u64,

    /// Random seed. Drawn from entropy when unset.
    pub seed: Option<u64>,

    /// Station file.
    pub stations_path: PathBuf,

    /// Connection file.
    pub connections_path: PathBuf,
}

impl SimulatorConfig {
    /// Create a configuration for `num_pairs` pairs on the bundled map.
    pub fn new(num_pairs: usize) -> Self {
        Self {
            num_pairs,
            max_turns: MAX_TURNS,
            seed: None,
            stations_path: Path::new(DEFAULT_DATA_DIR).join(STATIONS_FILE),
            connections_path: Path::new(DEFAULT_DATA_DIR).join(CONNECTIONS_FILE),
        }
    }

    /// Set the turn cap.
    pub fn with_max_turns(mut self, max_turns: u64) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read both map files from `dir`.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.stations_path = dir.as_ref().join(STATIONS_FILE);
        self.connections_path = dir.as_ref().join(CONNECTIONS_FILE);
        self
    }

    /// Set the station file.
    pub fn with_stations_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stations_path = path.into();
        self
    }

    /// Set the connection file.
    pub fn with_connections_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.connections_path = path.into();
        self
    }

    /// Apply [`SEED_VAR`] and [`DATA_DIR_VAR`] from the process environment.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_vars(|var| std::env::var(var).ok())
    }

    /// Apply [`SEED_VAR`] and [`DATA_DIR_VAR`] through `lookup`.
    ///
    /// Unset or empty variables leave the configuration unchanged.
    pub fn with_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |var| lookup(var).filter(|value: &String| !value.trim().is_empty());

        if let Some(value) = set(SEED_VAR) {
            let seed = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed {
                    var: SEED_VAR,
                    value: value.clone(),
                })?;
            self = self.with_seed(seed);
        }
        if let Some(dir) = set(DATA_DIR_VAR) {
            self = self.with_data_dir(dir);
        }
        Ok(self)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(10)
    }
}
