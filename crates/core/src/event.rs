//! Notifications emitted by the turn engine.

use herdcats_types::{PairId, StationId, Turn};

/// A pair was reunited and the station they met at has been closed.
///
/// One event is emitted per newly reunited pair, in the order the pairs
/// were processed within the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReunionEvent {
    /// The pair that was reunited.
    pub pair: PairId,

    /// Where the seeker found the target. Closed by the time the event is seen.
    pub station: StationId,

    /// Turn in which the reunion happened.
    pub turn: Turn,
}
