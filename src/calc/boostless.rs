use crate::calc::sequence::StageSequence;

/// Sum of every room's boostless split, before timesaves.
pub fn boostless_time(sequence: &StageSequence<'_>) -> f64 {
    sequence.rooms().iter().map(|room| room.boostless_time).sum()
}
