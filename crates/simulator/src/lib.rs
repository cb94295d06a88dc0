//! Herdcats Simulator
//!
//! Loads a station map, places seekers and their targets, runs the turn
//! engine to completion and prints what happened.
//!
//! # Architecture
//!
//! The simulator builds on `herdcats-simulation` to provide:
//!
//! - **Loading**: station and connection files into a [`Network`]
//! - **Configuration**: pair count, turn cap, seed and map location
//! - **Metrics**: reunion counts, average turns, most visited station, near misses
//! - **Reporting**: the per-reunion lines and the final summary
//!
//! # Example
//!
//! ```ignore
//! use herdcats_simulator::{Simulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::new(10).with_seed(12345);
//! let report = Simulator::new(config)?.run(&mut std::io::stdout().lock())?;
//!
//! println!("found {} of {}", report.summary.found, report.summary.total);
//! ```
//!
//! [`Network`]: herdcats_types::Network

pub mod config;
pub mod loader;
pub mod metrics;
pub mod report;
pub mod runner;

pub use config::{ConfigError, SimulatorConfig};
pub use loader::{load_network, LoadError};
pub use metrics::MetricsError;
pub use report::{ReunionLine, Summary};
pub use runner::{RunReport, Simulator, SimulatorError};
