//! Initial placement of seekers and targets.

use crate::PlayerPair;
use herdcats_core::ChoiceSource;
use herdcats_types::{Network, PairId, StationId};
use tracing::debug;

/// Redraws allowed for a single target before placement gives up.
///
/// With a uniform source on two or more stations the odds of hitting this
/// are negligible; it only stops a degenerate source from spinning forever.
const MAX_TARGET_REDRAWS: usize = 1024;

/// Errors that can occur while placing pairs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// A target cannot start apart from its seeker.
    #[error("cannot place {pairs} pairs on a network of {stations} stations")]
    TooFewStations { pairs: usize, stations: usize },

    /// The random source kept drawing the seeker's own station.
    #[error("target of pair {pair} could not be placed apart from its seeker at station {seeker}")]
    TargetStalled { pair: PairId, seeker: StationId },
}

/// Place `count` pairs on random stations.
///
/// Every seeker is placed first, one draw each in pair order, over all
/// stations in network order. Each target is then drawn for its pair,
/// redrawing while it lands on that pair's seeker.
pub fn place_pairs<C: ChoiceSource>(
    network: &Network,
    count: usize,
    choices: &mut C,
) -> Result<Vec<PlayerPair>, PlacementError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if network.len() < 2 {
        return Err(PlacementError::TooFewStations {
            pairs: count,
            stations: network.len(),
        });
    }

    let stations: Vec<StationId> = network.station_ids().collect();
    let seekers: Vec<StationId> = (0..count)
        .map(|_| pick_station(&stations, choices))
        .collect();

    let mut pairs = Vec::with_capacity(count);
    for (index, seeker) in seekers.into_iter().enumerate() {
        let id = PairId(index);
        let target = (0..MAX_TARGET_REDRAWS)
            .map(|_| pick_station(&stations, choices))
            .find(|station| *station != seeker)
            .ok_or(PlacementError::TargetStalled { pair: id, seeker })?;

        debug!(pair = %id, seeker = %seeker, target = %target, "Placed pair");
        pairs.push(PlayerPair::new(id, seeker, target));
    }

    Ok(pairs)
}

fn pick_station<C: ChoiceSource>(stations: &[StationId], choices: &mut C) -> StationId {
    stations[choices.pick_index(stations.len())]
}
