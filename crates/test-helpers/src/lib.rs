//! Test helpers for herdcats.
//!
//! Fixture networks shared across crates, and [`ScriptedChoices`], a
//! random source whose every draw is decided by the test.

use herdcats_core::ChoiceSource;
use herdcats_types::{Network, StationId};

/// Shorthand for building station ids in tests.
pub fn sid(id: u32) -> StationId {
    StationId(id)
}

/// Build a network from `(id, name)` rows and `(id, id)` connections.
///
/// # Panics
///
/// Panics if the rows do not form a valid network.
pub fn network_from(stations: &[(u32, &str)], connections: &[(u32, u32)]) -> Network {
    Network::new(
        stations
            .iter()
            .map(|(id, name)| (StationId(*id), name.to_string())),
        connections
            .iter()
            .map(|(a, b)| (StationId(*a), StationId(*b))),
    )
    .expect("fixture network should be valid")
}

/// Four stations: foo(1), bar(2), baz(3), qux(4), with connections
/// 1-2, 1-3, 1-4 and 2-4.
pub fn four_station_network() -> Network {
    network_from(
        &[(1, "foo"), (2, "bar"), (3, "baz"), (4, "qux")],
        &[(1, 2), (1, 3), (1, 4), (2, 4)],
    )
}

/// Stations 1..=n joined in a line: 1-2, 2-3, ..., (n-1)-n.
pub fn line_network(n: u32) -> Network {
    let names: Vec<String> = (1..=n).map(|i| format!("Station {i}")).collect();
    let stations: Vec<(u32, &str)> = (1..=n).zip(names.iter().map(String::as_str)).collect();
    let connections: Vec<(u32, u32)> = (1..n).map(|i| (i, i + 1)).collect();
    network_from(&stations, &connections)
}

/// Two stations with no connection between them.
pub fn disconnected_pair_network() -> Network {
    network_from(&[(1, "Isle"), (2, "Islet")], &[])
}

/// Undirected edges {1-2, 2-3, 2-4, 4-5, 3-5} over nodes 1..=5.
pub fn five_node_edges() -> Vec<(u32, u32)> {
    vec![(1, 2), (2, 3), (2, 4), (4, 5), (3, 5)]
}

/// A random source that replays a fixed script of indices, cycling.
///
/// Each draw takes the next scripted index modulo the length being drawn
/// from, so a script never produces an out-of-range pick.
#[derive(Debug, Clone)]
pub struct ScriptedChoices {
    script: Vec<usize>,
    cursor: usize,
    draws: usize,
}

impl ScriptedChoices {
    /// Cycle through `script` forever.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn cycling(script: impl Into<Vec<usize>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script,
            cursor: 0,
            draws: 0,
        }
    }

    /// Always pick the first candidate.
    pub fn first() -> Self {
        Self::cycling(vec![0])
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl ChoiceSource for ScriptedChoices {
    fn pick_index(&mut self, len: usize) -> usize {
        let index = self.script[self.cursor] % len;
        self.cursor = (self.cursor + 1) % self.script.len();
        self.draws += 1;
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_choices_cycle() {
        let mut choices = ScriptedChoices::cycling(vec![0, 1, 2]);
        let items = [sid(1), sid(2), sid(3), sid(4)];

        let picked: Vec<_> = (0..6).map(|_| choices.choose(&items).unwrap()).collect();
        assert_eq!(picked, vec![sid(1), sid(2), sid(3), sid(1), sid(2), sid(3)]);
        assert_eq!(choices.draws(), 6);
    }

    #[test]
    fn test_scripted_index_wraps_to_len() {
        let mut choices = ScriptedChoices::cycling(vec![5]);
        assert_eq!(choices.pick_index(3), 2);
    }

    #[test]
    fn test_empty_choice_consumes_nothing() {
        let mut choices = ScriptedChoices::first();
        let empty: [StationId; 0] = [];
        assert_eq!(choices.choose(&empty), None);
        assert_eq!(choices.draws(), 0);
    }

    #[test]
    fn test_fixtures_are_consistent() {
        assert_eq!(four_station_network().len(), 4);
        assert_eq!(line_network(5).connection_count(), 4);
        assert_eq!(disconnected_pair_network().connection_count(), 0);
    }
}
