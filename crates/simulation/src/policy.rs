//! Movement policy for the two sides of a pair.

use crate::Track;
use herdcats_core::ChoiceSource;
use herdcats_types::{Network, StationId};

/// Which side of a pair is moving.
///
/// Both roles only ever move to an open neighbor of their current
/// station, chosen uniformly at random. They differ in how they treat
/// their own history:
///
/// - **Seeker**: prefers stations it has never stood on. Once every open
///   neighbor has been visited it may revisit any of them rather than
///   stand still.
/// - **Target**: ignores its history entirely.
///
/// An empty candidate set means no move this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Seeker,
    Target,
}

impl Role {
    /// Both roles, in the order the turn engine moves them.
    pub const ALL: [Role; 2] = [Role::Seeker, Role::Target];

    /// Stations this role may move to next, in ascending id order.
    pub fn candidates(self, track: &Track, network: &Network) -> Vec<StationId> {
        let open = network.open_neighbors(track.current());
        match self {
            Role::Seeker => {
                let unvisited: Vec<StationId> = open
                    .iter()
                    .copied()
                    .filter(|s| !track.has_visited(*s))
                    .collect();
                if unvisited.is_empty() {
                    open
                } else {
                    unvisited
                }
            }
            Role::Target => open,
        }
    }

    /// Propose the next station, or `None` if boxed in by closures.
    ///
    /// Consumes one draw from `choices` only when there is a candidate.
    pub fn propose<C: ChoiceSource>(
        self,
        track: &Track,
        network: &Network,
        choices: &mut C,
    ) -> Option<StationId> {
        choices.choose(&self.candidates(track, network))
    }
}
