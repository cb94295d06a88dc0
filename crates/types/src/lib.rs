//! Core types for herdcats.
//!
//! Identifiers shared by every crate, and the [`Network`] of stations the
//! simulation walks over.

mod identifiers;
mod network;

pub use identifiers::{PairId, StationId, Turn};
pub use network::{Network, NetworkError, Station};
