//! Aggregates over the pairs of a finished run.

use hdrhistogram::Histogram;
use herdcats_simulation::PlayerPair;
use herdcats_types::{PairId, StationId};
use indexmap::IndexMap;
use tracing::{info, warn};

/// Errors from metrics that are undefined for some runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    #[error("no reunions occurred")]
    NoReunions,
}

/// Number of pairs in the run.
pub fn total_pairs(pairs: &[PlayerPair]) -> usize {
    pairs.len()
}

/// Number of pairs that were reunited.
pub fn reunited_count(pairs: &[PlayerPair]) -> usize {
    pairs.iter().filter(|p| p.is_reunited()).count()
}

/// Mean reunion turn over the reunited pairs.
pub fn average_turns_to_reunion(pairs: &[PlayerPair]) -> Result<f64, MetricsError> {
    let turns: Vec<u64> = pairs.iter().filter_map(|p| p.reunited_at()).map(|t| t.0).collect();
    if turns.is_empty() {
        return Err(MetricsError::NoReunions);
    }
    Ok(turns.iter().sum::<u64>() as f64 / turns.len() as f64)
}

/// Station that appears most often across every seeker and target path.
///
/// Paths are counted pair by pair, seeker before target. Ties go to the
/// station that was counted first.
pub fn most_visited_station(pairs: &[PlayerPair]) -> Option<StationId> {
    let mut visits: IndexMap<StationId, u64> = IndexMap::new();
    for pair in pairs {
        for station in pair.seeker().path().iter().chain(pair.target().path()) {
            *visits.entry(*station).or_default() += 1;
        }
    }

    let mut best: Option<(StationId, u64)> = None;
    for (station, count) in visits {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((station, count));
        }
    }
    best.map(|(station, _)| station)
}

/// Pair that spent the most turns one connection away from its target.
///
/// Ties go to the lowest pair id. `None` when no pair ever had a near miss.
pub fn least_lucky_pair(pairs: &[PlayerPair]) -> Option<(PairId, u64)> {
    let mut worst: Option<(PairId, u64)> = None;
    for pair in pairs {
        let misses = pair.near_misses();
        if misses > 0 && worst.map_or(true, |(_, top)| misses > top) {
            worst = Some((pair.id(), misses));
        }
    }
    worst
}

/// Log the distribution of reunion turns.
pub fn log_reunion_distribution(pairs: &[PlayerPair]) {
    let mut histogram = match Histogram::<u64>::new(3) {
        Ok(histogram) => histogram,
        Err(e) => {
            warn!(error = %e, "Failed to create reunion histogram");
            return;
        }
    };

    for turn in pairs.iter().filter_map(|p| p.reunited_at()) {
        if let Err(e) = histogram.record(turn.0) {
            warn!(turn = %turn, error = %e, "Failed to record reunion turn");
        }
    }

    if histogram.is_empty() {
        return;
    }
    info!(
        reunions = histogram.len(),
        p50 = histogram.value_at_quantile(0.5),
        p90 = histogram.value_at_quantile(0.9),
        max = histogram.max(),
        "Reunion turns"
    );
}
