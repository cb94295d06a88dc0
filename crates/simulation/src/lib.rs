//! Deterministic turn engine.
//!
//! Pairs of seekers and targets wander a [`Network`] at random until each
//! seeker meets its target. Given the same random source, a run produces
//! identical placements, moves, reunions and closures every time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  SimulationRunner                       │
//! │     RUNNING until all pairs reunited or turn cap        │
//! │                           │                             │
//! │                           ▼ step()                      │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Simulation (TurnStep)                          │ │
//! │  │     pairs: Vec<PlayerPair>, processed in order     │ │
//! │  │     seeker move → target move → reunion check      │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Network: close() on reunion, visible to every  │ │
//! │  │     later move in the same turn                    │ │
//! │  └────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Network`]: herdcats_types::Network

mod engine;
mod pair;
mod placement;
mod policy;
mod runner;

pub use engine::{SeededSimulation, Simulation};
pub use pair::{PlayerPair, Track};
pub use placement::{place_pairs, PlacementError};
pub use policy::Role;
pub use runner::{RunState, SimulationRunner, SimulationStats, StopReason, MAX_TURNS};
