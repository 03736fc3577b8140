use serde::Serialize;

/// One boosted room in a candidate route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoostPlacement {
    /// Position of the room in the 9-room sequence.
    pub index: usize,
    /// Index into that room's `boost_strats`.
    pub strat_index: usize,
    /// Dead time waited before this boost; always 0 for the first boost.
    pub pacelock: f64,
}

impl BoostPlacement {
    pub fn first(index: usize, strat_index: usize) -> Self {
        Self {
            index,
            strat_index,
            pacelock: 0.0,
        }
    }
}

/// A scored route produced by one of the searches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub boost_time: f64,
    pub boost_rooms: Vec<BoostPlacement>,
}

impl Candidate {
    pub fn boost_count(&self) -> usize {
        self.boost_rooms.len()
    }
}

/// Final ranked entry: a candidate paired with the seed's boostless time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedResult {
    pub boostless_time: f64,
    pub boost_time: f64,
    pub boost_rooms: Vec<BoostPlacement>,
}

impl SeedResult {
    pub fn from_candidate(boostless_time: f64, candidate: Candidate) -> Self {
        Self {
            boostless_time,
            boost_time: candidate.boost_time,
            boost_rooms: candidate.boost_rooms,
        }
    }

    pub fn boost_count(&self) -> usize {
        self.boost_rooms.len()
    }

    pub fn time_saved(&self) -> f64 {
        self.boostless_time - self.boost_time
    }
}
