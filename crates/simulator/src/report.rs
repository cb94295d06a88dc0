//! User-facing output: one line per reunion, then the run summary.

use crate::metrics::{self, MetricsError};
use herdcats_core::ReunionEvent;
use herdcats_simulation::PlayerPair;
use herdcats_types::{Network, PairId};
use std::fmt;

/// Line printed as soon as a pair is reunited.
///
/// The station is looked up in `network` when the line is formatted, so
/// formatting panics if the station is not part of it.
pub struct ReunionLine<'a> {
    pub event: &'a ReunionEvent,
    pub network: &'a Network,
}

impl fmt::Display for ReunionLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Owner {id} found cat {id} - {name} station is now closed.",
            id = self.event.pair,
            name = self.network.name(self.event.station)
        )
    }
}

/// End-of-run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub found: usize,
    /// Mean reunion turn, truncated. Present only when something was found.
    pub average_turns: Option<u64>,
    pub most_visited: Option<String>,
    pub least_lucky: Option<(PairId, u64)>,
}

impl Summary {
    /// Compute the summary of a finished run.
    pub fn from_run(network: &Network, pairs: &[PlayerPair]) -> Result<Self, MetricsError> {
        let found = metrics::reunited_count(pairs);
        let average_turns = if found > 0 {
            Some(metrics::average_turns_to_reunion(pairs)? as u64)
        } else {
            None
        };

        Ok(Self {
            total: metrics::total_pairs(pairs),
            found,
            average_turns,
            most_visited: metrics::most_visited_station(pairs)
                .map(|station| network.name(station).to_string()),
            least_lucky: metrics::least_lucky_pair(pairs),
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total number of cats: {}", self.total)?;
        writeln!(f, "Number of cats found: {}", self.found)?;
        if let Some(average) = self.average_turns {
            writeln!(f, "Average number of movements required to find a cat: {average}")?;
        }
        if let Some(name) = &self.most_visited {
            writeln!(f, "The most visited station: {name}")?;
        }
        if let Some((pair, misses)) = self.least_lucky {
            writeln!(
                f,
                "The least lucky owner: {pair} ({misses} turns one station away from cat {pair})"
            )?;
        }
        Ok(())
    }
}
