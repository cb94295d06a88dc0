//! End-to-end run: load, place, simulate, report.

use crate::config::{ConfigError, SimulatorConfig};
use crate::loader::{load_network, LoadError};
use crate::metrics::{self, MetricsError};
use crate::report::{ReunionLine, Summary};
use herdcats_simulation::{PlacementError, SeededSimulation, SimulationRunner, SimulationStats};
use herdcats_types::Network;
use std::io::{self, Write};
use tracing::info;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load the map: {0}")]
    Load(#[from] LoadError),

    #[error("failed to place pairs: {0}")]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Seed the run was driven by.
    pub seed: u64,
    pub stats: SimulationStats,
    pub summary: Summary,
}

/// Runs one simulation over a loaded map.
pub struct Simulator {
    config: SimulatorConfig,
    network: Network,
}

impl Simulator {
    /// Load the map named by `config`.
    pub fn new(config: SimulatorConfig) -> Result<Self, SimulatorError> {
        let network = load_network(&config.stations_path, &config.connections_path)?;
        Ok(Self::with_network(config, network))
    }

    /// Use an already built network. The configured map paths are ignored.
    pub fn with_network(config: SimulatorConfig, network: Network) -> Self {
        Self { config, network }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run to completion, writing reunion lines and the summary to `out`.
    pub fn run<W: Write>(self, out: &mut W) -> Result<RunReport, SimulatorError> {
        let seed = self.config.seed.unwrap_or_else(|| {
            let seed = rand::random();
            info!(seed, "No seed configured, drew one from entropy");
            seed
        });
        info!(
            seed,
            pairs = self.config.num_pairs,
            max_turns = self.config.max_turns,
            "Starting simulation"
        );

        let names = self.network.clone();
        let mut sim = SeededSimulation::seeded(self.network, self.config.num_pairs, seed)?;
        let stats = SimulationRunner::new(self.config.max_turns).run_with(&mut sim, |event| {
            let line = ReunionLine {
                event,
                network: &names,
            };
            writeln!(out, "{line}")
        })?;

        let (network, pairs) = sim.into_parts();
        let summary = Summary::from_run(&network, &pairs)?;
        write!(out, "{summary}")?;
        out.flush()?;
        metrics::log_reunion_distribution(&pairs);

        Ok(RunReport {
            seed,
            stats,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herdcats_simulation::StopReason;
    use herdcats_test_helpers::{disconnected_pair_network, four_station_network, line_network};
    use herdcats_types::Turn;
    use tracing_test::traced_test;

    fn run_to_string(config: SimulatorConfig, network: Network) -> (RunReport, String) {
        let mut out = Vec::new();
        let report = Simulator::with_network(config, network)
            .run(&mut out)
            .unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_same_seed_same_output() {
        let config = SimulatorConfig::new(6).with_seed(99);

        let (_, first) = run_to_string(config.clone(), line_network(15));
        let (_, second) = run_to_string(config, line_network(15));

        assert_eq!(first, second);
        assert!(first.starts_with("Owner ") || first.starts_with("Total"));
    }

    #[test]
    fn test_output_matches_report() {
        let (report, output) =
            run_to_string(SimulatorConfig::new(3).with_seed(4), four_station_network());

        let reunion_lines = output
            .lines()
            .filter(|line| line.ends_with("station is now closed."))
            .count();
        assert_eq!(reunion_lines, report.stats.reunions);
        assert_eq!(report.summary.found, report.stats.reunions);
        assert_eq!(report.summary.total, 3);
        assert!(output.ends_with(&report.summary.to_string()));
        assert_eq!(report.seed, 4);
    }

    #[traced_test]
    #[test]
    fn test_turn_cap_is_a_normal_outcome() {
        // Nobody can ever move, so nobody is ever found.
        let config = SimulatorConfig::new(1).with_seed(1).with_max_turns(5);

        let (report, output) = run_to_string(config, disconnected_pair_network());

        assert_eq!(report.stats.stop_reason, StopReason::TurnCapReached);
        assert_eq!(report.stats.turns, Turn(5));
        assert!(output.starts_with("Total number of cats: 1\nNumber of cats found: 0\n"));
        assert!(!output.contains("Average number of movements"));
        assert!(!output.contains("least lucky"));
        assert!(logs_contain("Starting simulation"));
        assert!(logs_contain("max_turns=5"));
    }

    #[traced_test]
    #[test]
    fn test_unseeded_run_logs_its_seed() {
        let (report, _) = run_to_string(SimulatorConfig::new(1), four_station_network());

        assert!(logs_contain("drew one from entropy"));
        assert!(logs_contain(&format!("seed={}", report.seed)));
    }

    #[test]
    fn test_placement_error_is_reported() {
        let network = herdcats_test_helpers::network_from(&[(1, "Lonely")], &[]);
        let err = Simulator::with_network(SimulatorConfig::new(1), network)
            .run(&mut Vec::<u8>::new())
            .unwrap_err();

        assert!(matches!(err, SimulatorError::Placement(_)));
    }

    #[test]
    fn test_missing_map_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimulatorConfig::new(1).with_data_dir(dir.path());

        assert!(matches!(
            Simulator::new(config),
            Err(SimulatorError::Load(LoadError::Io { .. }))
        ));
    }

    #[test]
    fn test_bundled_map_run() {
        let simulator = Simulator::new(SimulatorConfig::new(5).with_seed(2024)).unwrap();
        assert_eq!(simulator.config().num_pairs, 5);

        let mut out = Vec::new();
        let report = simulator.run(&mut out).unwrap();

        assert_eq!(report.summary.total, 5);
        assert!(String::from_utf8(out).unwrap().contains("Total number of cats: 5"));
    }
}
