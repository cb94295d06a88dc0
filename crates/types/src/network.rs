//! Transit network: stations, connections and closures.

use crate::StationId;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// A node of the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Stable identifier.
    pub id: StationId,

    /// Display name used in reports.
    pub name: String,

    /// Closed stations can neither be entered nor proposed as a move.
    closed: bool,
}

impl Station {
    /// Create an open station.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            closed: false,
        }
    }

    /// Whether the station has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Errors that can occur when building a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Two stations share an identifier.
    #[error("station {0} is defined more than once")]
    DuplicateStation(StationId),

    /// A connection references a station that does not exist.
    #[error("connection {from} - {to} references unknown station {missing}")]
    UnknownEndpoint {
        from: StationId,
        to: StationId,
        missing: StationId,
    },
}

/// Static graph of stations with a mutable open/closed flag per station.
///
/// The topology never changes after construction: connections are
/// bidirectional and stored as two directed adjacency entries, and
/// stations are never removed. The only mutation is [`Network::close`].
///
/// Station lookups take ids that are expected to belong to the network.
/// Passing an unknown id is a programming error and panics.
#[derive(Debug, Clone)]
pub struct Network {
    /// Stations in load order.
    stations: IndexMap<StationId, Station>,

    /// station -> ordered set of adjacent stations.
    adjacency: IndexMap<StationId, BTreeSet<StationId>>,
}

impl Network {
    /// Build a network from station rows and undirected connections.
    ///
    /// Every station gets an adjacency entry, possibly empty. Duplicate
    /// connections collapse into one.
    pub fn new<S, C>(stations: S, connections: C) -> Result<Self, NetworkError>
    where
        S: IntoIterator<Item = (StationId, String)>,
        C: IntoIterator<Item = (StationId, StationId)>,
    {
        let mut registry: IndexMap<StationId, Station> = IndexMap::new();
        let mut adjacency: IndexMap<StationId, BTreeSet<StationId>> = IndexMap::new();

        for (id, name) in stations {
            if registry.insert(id, Station::new(id, name)).is_some() {
                return Err(NetworkError::DuplicateStation(id));
            }
            adjacency.insert(id, BTreeSet::new());
        }

        for (from, to) in connections {
            for endpoint in [from, to] {
                if !registry.contains_key(&endpoint) {
                    return Err(NetworkError::UnknownEndpoint {
                        from,
                        to,
                        missing: endpoint,
                    });
                }
            }
            // Connections go both ways.
            adjacency.entry(from).or_default().insert(to);
            adjacency.entry(to).or_default().insert(from);
        }

        Ok(Self {
            stations: registry,
            adjacency,
        })
    }

    fn entry(&self, id: StationId) -> &Station {
        self.stations
            .get(&id)
            .unwrap_or_else(|| panic!("station {id} is not part of the network"))
    }

    /// Get a station by id.
    pub fn station(&self, id: StationId) -> &Station {
        self.entry(id)
    }

    /// Display name of a station.
    pub fn name(&self, id: StationId) -> &str {
        &self.entry(id).name
    }

    /// Whether a station is still open.
    pub fn is_open(&self, id: StationId) -> bool {
        !self.entry(id).closed
    }

    /// All stations adjacent to `id`, open or not, in ascending order.
    pub fn neighbors(&self, id: StationId) -> &BTreeSet<StationId> {
        self.adjacency
            .get(&id)
            .unwrap_or_else(|| panic!("station {id} is not part of the network"))
    }

    /// Open stations adjacent to `id`, in ascending order.
    pub fn open_neighbors(&self, id: StationId) -> Vec<StationId> {
        self.neighbors(id)
            .iter()
            .copied()
            .filter(|n| self.is_open(*n))
            .collect()
    }

    /// Check if two stations share a connection.
    pub fn are_connected(&self, a: StationId, b: StationId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Close a station. Returns true if it was open before the call.
    ///
    /// Closing an already closed station is a no-op.
    pub fn close(&mut self, id: StationId) -> bool {
        let station = self
            .stations
            .get_mut(&id)
            .unwrap_or_else(|| panic!("station {id} is not part of the network"));
        let was_open = !station.closed;
        station.closed = true;
        was_open
    }

    /// Station ids in load order.
    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        self.stations.keys().copied()
    }

    /// Stations in load order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.stations.values()
    }

    /// Adjacency entries in load order.
    pub fn adjacency(&self) -> impl Iterator<Item = (StationId, &BTreeSet<StationId>)> + '_ {
        self.adjacency.iter().map(|(id, n)| (*id, n))
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Check if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Number of closed stations.
    pub fn closed_count(&self) -> usize {
        self.stations.values().filter(|s| s.closed).count()
    }
}
