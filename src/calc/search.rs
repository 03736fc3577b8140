//! Exhaustive enumeration of 2- and 3-boost routes.

use crate::calc::boostless::boostless_time;
use crate::calc::pacelock::pacelock;
use crate::calc::ranking::sort_candidates;
use crate::calc::sequence::StageSequence;
use crate::calc::timesave::timesave;
use crate::error::Result;
use crate::types::result::{BoostPlacement, Candidate};
use tracing::{debug, trace, warn};

/// Score a route whose placements already carry their pacelocks.
fn score(
    sequence: &StageSequence<'_>,
    boostless: f64,
    boost_rooms: Vec<BoostPlacement>,
) -> Candidate {
    let mut boost_time = boostless;
    for placement in &boost_rooms {
        boost_time -= sequence.room(placement.index).boost_delta(placement.strat_index);
        boost_time += placement.pacelock;
    }
    boost_time -= timesave(sequence, &boost_rooms);
    Candidate {
        boost_time,
        boost_rooms,
    }
}

fn check_terminal(sequence: &StageSequence<'_>, search: &str) -> Result<()> {
    sequence.ensure_terminal().map_err(|err| {
        warn!(search, %err, "rejected room sequence");
        err
    })
}

/// Every pair of boosted rooms `i < j` with every strat combination, sorted
/// ascending by boosted time.
pub fn two_boost(sequence: &StageSequence<'_>) -> Result<Vec<Candidate>> {
    check_terminal(sequence, "two-boost")?;

    let boostless = boostless_time(sequence);
    let rooms = sequence.rooms();
    let mut candidates = Vec::new();
    let mut best = f64::INFINITY;

    for i in 0..rooms.len() {
        for j in i + 1..rooms.len() {
            let between = sequence.time_between(i, j);
            for (first, first_strat) in rooms[i].boost_strats.iter().enumerate() {
                for (second, second_strat) in rooms[j].boost_strats.iter().enumerate() {
                    let lock = pacelock(between, first_strat, second_strat);
                    let candidate = score(
                        sequence,
                        boostless,
                        vec![
                            BoostPlacement::first(i, first),
                            BoostPlacement {
                                index: j,
                                strat_index: second,
                                pacelock: lock,
                            },
                        ],
                    );
                    if candidate.boost_time < best {
                        best = candidate.boost_time;
                        trace!(
                            boostless,
                            pacelock = lock,
                            boost_time = best,
                            "two-boost improved"
                        );
                    }
                    candidates.push(candidate);
                }
            }
        }
    }

    sort_candidates(&mut candidates);
    debug!(candidates = candidates.len(), best, "two-boost search complete");
    Ok(candidates)
}

/// Every triple of boosted rooms `i < j < k`; pacelocks are computed for
/// `i -> j` and `j -> k`.
pub fn three_boost(sequence: &StageSequence<'_>) -> Result<Vec<Candidate>> {
    check_terminal(sequence, "three-boost")?;

    let boostless = boostless_time(sequence);
    let rooms = sequence.rooms();
    let mut candidates = Vec::new();
    let mut best = f64::INFINITY;

    for i in 0..rooms.len() {
        for j in i + 1..rooms.len() {
            let between_12 = sequence.time_between(i, j);
            for k in j + 1..rooms.len() {
                let between_23 = sequence.time_between(j, k);
                for (first, first_strat) in rooms[i].boost_strats.iter().enumerate() {
                    for (second, second_strat) in rooms[j].boost_strats.iter().enumerate() {
                        let lock_12 = pacelock(between_12, first_strat, second_strat);
                        for (third, third_strat) in rooms[k].boost_strats.iter().enumerate() {
                            let lock_23 = pacelock(between_23, second_strat, third_strat);
                            let candidate = score(
                                sequence,
                                boostless,
                                vec![
                                    BoostPlacement::first(i, first),
                                    BoostPlacement {
                                        index: j,
                                        strat_index: second,
                                        pacelock: lock_12,
                                    },
                                    BoostPlacement {
                                        index: k,
                                        strat_index: third,
                                        pacelock: lock_23,
                                    },
                                ],
                            );
                            if candidate.boost_time < best {
                                best = candidate.boost_time;
                                trace!(
                                    boostless,
                                    pacelock_1 = lock_12,
                                    pacelock_2 = lock_23,
                                    boost_time = best,
                                    "three-boost improved"
                                );
                            }
                            candidates.push(candidate);
                        }
                    }
                }
            }
        }
    }

    sort_candidates(&mut candidates);
    debug!(candidates = candidates.len(), best, "three-boost search complete");
    Ok(candidates)
}
