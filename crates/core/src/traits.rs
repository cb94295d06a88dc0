//! Core traits for turn-based simulations.

use crate::ReunionEvent;
use herdcats_types::Turn;

/// A simulation that advances one turn at a time.
///
/// This is the seam between the turn engine and the termination
/// controller. Implementations are:
///
/// - **Synchronous**: `step` runs a whole turn and returns
/// - **Deterministic**: given the same state and random source, the same
///   events come out
/// - **No I/O**: reporting is done by whoever consumes the events
pub trait TurnStep {
    /// Run the next turn and return the reunions it produced, in the order
    /// the pairs were processed.
    fn step(&mut self) -> Vec<ReunionEvent>;

    /// Check whether every pair has been reunited.
    fn all_reunited(&self) -> bool;

    /// The last turn that was run ([`Turn::START`] before the first step).
    fn turn(&self) -> Turn;
}
