//! Domain-specific identifier types.

use std::fmt;

/// Station identifier, as it appears in the station file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a seeker/target pair.
///
/// Pairs are numbered from zero in creation order; that order is also the
/// order in which the turn engine processes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(pub usize);

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Simulation turn number.
///
/// Turn 0 is the placement state before anybody has moved; the first
/// simulated turn is turn 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Turn(pub u64);

impl Turn {
    /// The placement turn.
    pub const START: Self = Turn(0);

    /// Get the next turn.
    pub fn next(self) -> Self {
        Turn(self.0 + 1)
    }

    /// Length a path must have once its walker has moved on every turn
    /// up to and including this one.
    pub fn expected_path_len(self) -> usize {
        self.0 as usize + 1
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
