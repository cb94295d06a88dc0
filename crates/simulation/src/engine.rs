//! Turn engine: moves every unresolved pair, detects reunions, closes stations.

use crate::{place_pairs, PlacementError, PlayerPair, Role};
use herdcats_core::{ChoiceSource, ReunionEvent, RngChoices, TurnStep};
use herdcats_types::{Network, Turn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

/// A simulation driven by a seeded ChaCha generator.
pub type SeededSimulation = Simulation<RngChoices<ChaCha8Rng>>;

/// Full simulation state: the network, every pair, and the turn counter.
///
/// The network's closed flags are shared by all pairs with no isolation:
/// a closure caused by one pair is visible to every pair processed after
/// it, in the same turn and in later ones. Pairs are always processed in
/// creation order so runs are reproducible.
pub struct Simulation<C> {
    network: Network,
    pairs: Vec<PlayerPair>,
    turn: Turn,
    choices: C,
}

impl SeededSimulation {
    /// Place `pair_count` pairs and drive every decision from `seed`.
    pub fn seeded(network: Network, pair_count: usize, seed: u64) -> Result<Self, PlacementError> {
        Self::new(
            network,
            pair_count,
            RngChoices::new(ChaCha8Rng::seed_from_u64(seed)),
        )
    }
}

impl<C: ChoiceSource> Simulation<C> {
    /// Place `pair_count` pairs at random and prepare turn 1.
    pub fn new(network: Network, pair_count: usize, mut choices: C) -> Result<Self, PlacementError> {
        let pairs = place_pairs(&network, pair_count, &mut choices)?;
        info!(
            stations = network.len(),
            connections = network.connection_count(),
            pairs = pairs.len(),
            "Simulation created"
        );
        Ok(Self::with_pairs(network, pairs, choices))
    }

    /// Start from pairs that were already placed.
    pub fn with_pairs(network: Network, pairs: Vec<PlayerPair>, choices: C) -> Self {
        Self {
            network,
            pairs,
            turn: Turn::START,
            choices,
        }
    }

    /// The network, with closures applied so far.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Every pair, in processing order.
    pub fn pairs(&self) -> &[PlayerPair] {
        &self.pairs
    }

    /// Number of pairs reunited so far.
    pub fn reunited_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.is_reunited()).count()
    }

    /// Consume the simulation, keeping what reporting needs.
    pub fn into_parts(self) -> (Network, Vec<PlayerPair>) {
        (self.network, self.pairs)
    }

    /// Move one pair for `turn` and check whether it was reunited.
    fn advance_pair(
        pair: &mut PlayerPair,
        network: &mut Network,
        choices: &mut C,
        turn: Turn,
    ) -> Option<ReunionEvent> {
        // The target moves whether or not the seeker managed to.
        for role in Role::ALL {
            if let Some(next) = role.propose(pair.track(role), network, choices) {
                trace!(pair = %pair.id(), ?role, station = %next, "Moved");
                pair.record_move(role, next);
            }
        }

        // Meeting on a stale position from a stalled turn does not count.
        if pair.both_moved_in(turn) && pair.at_same_station() {
            let station = pair.current(Role::Seeker);
            pair.mark_reunited(turn);
            network.close(station);
            debug!(station = %station, "Closed station");
            return Some(ReunionEvent {
                pair: pair.id(),
                station,
                turn,
            });
        }

        if network.are_connected(pair.current(Role::Seeker), pair.current(Role::Target)) {
            pair.record_near_miss();
        }
        None
    }
}

impl<C: ChoiceSource> TurnStep for Simulation<C> {
    fn step(&mut self) -> Vec<ReunionEvent> {
        let turn = self.turn.next();
        self.turn = turn;

        let mut events = Vec::new();
        for pair in self.pairs.iter_mut().filter(|p| !p.is_reunited()) {
            if let Some(event) =
                Self::advance_pair(pair, &mut self.network, &mut self.choices, turn)
            {
                info!(
                    pair = %event.pair,
                    station = %event.station,
                    turn = %turn,
                    "Pair reunited"
                );
                events.push(event);
            }
        }
        events
    }

    fn all_reunited(&self) -> bool {
        self.pairs.iter().all(|p| p.is_reunited())
    }

    fn turn(&self) -> Turn {
        self.turn
    }
}
