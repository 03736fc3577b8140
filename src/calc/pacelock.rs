use crate::types::room::BoostStrat;

/// Minimum spacing between two boost triggers.
pub const BOOST_COOLDOWN: f64 = 60.0;

/// Dead time spent waiting for the boost cooldown before `later` can fire.
///
/// `time_between` is the boostless time of the rooms strictly between the two
/// boosted rooms. The gap is measured trigger to trigger: the rest of the
/// earlier room after its boost, the rooms between, and the run-up in the
/// later room.
pub fn pacelock(time_between: f64, earlier: &BoostStrat, later: &BoostStrat) -> f64 {
    let gap = time_between + earlier.after_boost() + later.boost_time;
    (BOOST_COOLDOWN - gap).max(0.0)
}
