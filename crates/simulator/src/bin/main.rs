//! Herdcats CLI
//!
//! Simulates owners searching for their lost cats on the London Underground.

use clap::Parser;
use herdcats_simulator::{Simulator, SimulatorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "herdcats")]
#[command(about = "Simulate a search for cats by their owners on the London underground")]
#[command(version)]
struct Cli {
    /// Number of owners and cats in the simulation
    number: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = SimulatorConfig::new(cli.number).with_env()?;
    Simulator::new(config)?.run(&mut std::io::stdout().lock())?;

    Ok(())
}
