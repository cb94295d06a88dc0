//! Per-pair state: where each side has been and whether they have met.

use crate::Role;
use herdcats_types::{PairId, StationId, Turn};
use std::collections::HashSet;

/// The stations one side of a pair has occupied, oldest first.
///
/// Never empty: the first element is the starting station and the last
/// element is the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    path: Vec<StationId>,
    visited: HashSet<StationId>,
}

impl Track {
    fn new(start: StationId) -> Self {
        Self {
            path: vec![start],
            visited: HashSet::from([start]),
        }
    }

    fn from_path(path: Vec<StationId>) -> Option<Self> {
        if path.is_empty() {
            return None;
        }
        let visited = path.iter().copied().collect();
        Some(Self { path, visited })
    }

    /// Every station occupied so far, including the start.
    pub fn path(&self) -> &[StationId] {
        &self.path
    }

    /// Where this side stands now.
    pub fn current(&self) -> StationId {
        self.path[self.path.len() - 1]
    }

    /// Where this side started.
    pub fn start(&self) -> StationId {
        self.path[0]
    }

    /// Check if this side has ever stood on `station`.
    pub fn has_visited(&self, station: StationId) -> bool {
        self.visited.contains(&station)
    }

    /// Number of moves made (path length minus the start).
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }

    fn push(&mut self, station: StationId) {
        self.path.push(station);
        self.visited.insert(station);
    }
}

/// A seeker and the target it is looking for.
///
/// Created at placement and mutated only by the turn engine. Once the
/// reunion turn is set, neither track grows again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPair {
    id: PairId,
    seeker: Track,
    target: Track,
    reunited_at: Option<Turn>,
    /// Turns ended with the two sides on directly connected stations.
    near_misses: u64,
}

impl PlayerPair {
    /// Create a pair at its starting stations.
    pub fn new(id: PairId, seeker_start: StationId, target_start: StationId) -> Self {
        Self {
            id,
            seeker: Track::new(seeker_start),
            target: Track::new(target_start),
            reunited_at: None,
            near_misses: 0,
        }
    }

    /// Rebuild a pair from recorded paths.
    ///
    /// Returns `None` if either path is empty.
    pub fn from_history(
        id: PairId,
        seeker_path: Vec<StationId>,
        target_path: Vec<StationId>,
    ) -> Option<Self> {
        Some(Self {
            id,
            seeker: Track::from_path(seeker_path)?,
            target: Track::from_path(target_path)?,
            reunited_at: None,
            near_misses: 0,
        })
    }

    /// Set the reunion turn of a rebuilt pair.
    pub fn with_reunion(mut self, turn: Turn) -> Self {
        self.reunited_at = Some(turn);
        self
    }

    /// Set the near-miss count of a rebuilt pair.
    pub fn with_near_misses(mut self, near_misses: u64) -> Self {
        self.near_misses = near_misses;
        self
    }

    /// Get the pair's id.
    pub fn id(&self) -> PairId {
        self.id
    }

    /// Get the track of one side.
    pub fn track(&self, role: Role) -> &Track {
        match role {
            Role::Seeker => &self.seeker,
            Role::Target => &self.target,
        }
    }

    /// The seeker's track.
    pub fn seeker(&self) -> &Track {
        &self.seeker
    }

    /// The target's track.
    pub fn target(&self) -> &Track {
        &self.target
    }

    /// Current station of one side.
    pub fn current(&self, role: Role) -> StationId {
        self.track(role).current()
    }

    /// Turn in which the pair was reunited, if it has been.
    pub fn reunited_at(&self) -> Option<Turn> {
        self.reunited_at
    }

    /// Check if the pair has been reunited.
    pub fn is_reunited(&self) -> bool {
        self.reunited_at.is_some()
    }

    /// Turns that ended with the two sides one connection apart.
    pub fn near_misses(&self) -> u64 {
        self.near_misses
    }

    /// Check if both sides stand on the same station.
    pub fn at_same_station(&self) -> bool {
        self.seeker.current() == self.target.current()
    }

    /// Check if both sides moved in every turn up to and including `turn`.
    ///
    /// A side that stalled has a path shorter than the turn counter, so
    /// this is false for the turn it stalled in and every turn after.
    pub fn both_moved_in(&self, turn: Turn) -> bool {
        let expected = turn.expected_path_len();
        self.seeker.path.len() == expected && self.target.path.len() == expected
    }

    /// Append a move for one side. Ignored once the pair is reunited.
    pub(crate) fn record_move(&mut self, role: Role, station: StationId) -> bool {
        if self.is_reunited() {
            return false;
        }
        match role {
            Role::Seeker => self.seeker.push(station),
            Role::Target => self.target.push(station),
        }
        true
    }

    pub(crate) fn mark_reunited(&mut self, turn: Turn) {
        debug_assert!(self.reunited_at.is_none(), "pair reunited twice");
        self.reunited_at = Some(turn);
    }

    pub(crate) fn record_near_miss(&mut self) {
        self.near_misses += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herdcats_test_helpers::sid;

    #[test]
    fn test_new_pair_starts_at_placement() {
        let pair = PlayerPair::new(PairId(0), sid(1), sid(2));

        assert_eq!(pair.seeker().path(), &[sid(1)]);
        assert_eq!(pair.target().path(), &[sid(2)]);
        assert_eq!(pair.current(Role::Seeker), sid(1));
        assert_eq!(pair.current(Role::Target), sid(2));
        assert!(!pair.is_reunited());
        assert_eq!(pair.seeker().moves(), 0);
    }

    #[test]
    fn test_record_move_tracks_visits() {
        let mut pair = PlayerPair::new(PairId(0), sid(1), sid(2));

        assert!(pair.record_move(Role::Seeker, sid(3)));
        assert_eq!(pair.seeker().path(), &[sid(1), sid(3)]);
        assert_eq!(pair.seeker().start(), sid(1));
        assert!(pair.seeker().has_visited(sid(1)));
        assert!(pair.seeker().has_visited(sid(3)));
        assert!(!pair.seeker().has_visited(sid(2)));
        assert_eq!(pair.target().path(), &[sid(2)]);
    }

    #[test]
    fn test_tracks_freeze_after_reunion() {
        let mut pair = PlayerPair::new(PairId(0), sid(1), sid(2));
        pair.record_move(Role::Seeker, sid(3));
        pair.record_move(Role::Target, sid(3));
        pair.mark_reunited(Turn(1));

        assert!(!pair.record_move(Role::Seeker, sid(4)));
        assert!(!pair.record_move(Role::Target, sid(4)));
        assert_eq!(pair.seeker().path().len(), 2);
        assert_eq!(pair.target().path().len(), 2);
        assert_eq!(pair.reunited_at(), Some(Turn(1)));
    }

    #[test]
    fn test_both_moved_in_requires_both_sides() {
        let mut pair = PlayerPair::new(PairId(0), sid(1), sid(2));
        pair.record_move(Role::Seeker, sid(3));
        assert!(!pair.both_moved_in(Turn(1)));

        pair.record_move(Role::Target, sid(3));
        assert!(pair.both_moved_in(Turn(1)));

        // One stalled turn puts the pair behind the counter for good.
        pair.record_move(Role::Seeker, sid(4));
        assert!(!pair.both_moved_in(Turn(2)));
        pair.record_move(Role::Seeker, sid(5));
        pair.record_move(Role::Target, sid(5));
        assert!(!pair.both_moved_in(Turn(3)));
    }

    #[test]
    fn test_at_same_station() {
        let pair =
            PlayerPair::from_history(PairId(3), vec![sid(1), sid(5)], vec![sid(2), sid(5)])
                .unwrap();
        assert!(pair.at_same_station());
        assert_eq!(pair.id(), PairId(3));
    }

    #[test]
    fn test_from_history_rejects_empty_paths() {
        assert!(PlayerPair::from_history(PairId(0), vec![], vec![sid(1)]).is_none());
        assert!(PlayerPair::from_history(PairId(0), vec![sid(1)], vec![]).is_none());
    }

    #[test]
    fn test_rebuilt_pair_builders() {
        let pair = PlayerPair::from_history(PairId(1), vec![sid(1)], vec![sid(2)])
            .unwrap()
            .with_reunion(Turn(4))
            .with_near_misses(2);

        assert_eq!(pair.reunited_at(), Some(Turn(4)));
        assert_eq!(pair.near_misses(), 2);
    }
}
