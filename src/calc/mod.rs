//! Boost route scoring: enumerate every 2- and 3-boost placement for a seed,
//! charge pacelock, apply timesaves, and rank everything fastest first.

pub mod boostless;
pub mod compare;
pub mod pacelock;
pub mod ranking;
pub mod search;
pub mod sequence;
pub mod timesave;

use crate::error::{CalcError, Result};
use crate::table::TimingTable;
use crate::types::result::SeedResult;
use boostless::boostless_time;
use sequence::StageSequence;
use timesave::timesave;
use tracing::{debug, warn};

/// Rank every boost route for `rooms` against the built-in timing table.
pub fn compute_ranked<S: AsRef<str>>(rooms: &[S]) -> Result<Vec<SeedResult>> {
    compute_ranked_custom(rooms, TimingTable::builtin())
}

/// Rank every boost route for `rooms` against a caller-supplied table.
pub fn compute_ranked_custom<S: AsRef<str>>(
    rooms: &[S],
    table: &TimingTable,
) -> Result<Vec<SeedResult>> {
    let sequence = StageSequence::resolve(rooms, table).map_err(|err| {
        warn!(%err, "could not resolve seed");
        err
    })?;
    rank_sequence(&sequence)
}

pub fn rank_sequence(sequence: &StageSequence<'_>) -> Result<Vec<SeedResult>> {
    let boostless = boostless_time(sequence) - timesave(sequence, &[]);

    let two_boost = search::two_boost(sequence)?;
    if two_boost.is_empty() {
        warn!("two-boost search returned no candidates");
        return Err(CalcError::EmptySearchResult("two-boost"));
    }

    let three_boost = search::three_boost(sequence)?;
    if three_boost.is_empty() {
        warn!("three-boost search returned no candidates");
        return Err(CalcError::EmptySearchResult("three-boost"));
    }

    let ranked = ranking::merge_sorted(two_boost, three_boost)
        .into_iter()
        .map(|candidate| SeedResult::from_candidate(boostless, candidate))
        .collect::<Vec<_>>();
    debug!(results = ranked.len(), boostless, "seed ranked");
    Ok(ranked)
}
