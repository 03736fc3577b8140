use serde::{Deserialize, Serialize};

/// Display tier for a boost strategy. Cosmetic only; scoring never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveQuality {
    #[default]
    Best,
    Great,
    Brilliant,
}

impl MoveQuality {
    pub fn label(self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Great => "great",
            Self::Brilliant => "brilliant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostStrat {
    pub name: String,
    /// Time to clear the room when boosting with this strategy.
    pub time: f64,
    /// Elapsed time into the room at which the boost fires.
    pub boost_time: f64,
    #[serde(default)]
    pub quality: MoveQuality,
}

impl BoostStrat {
    pub fn new(name: &str, time: f64, boost_time: f64, quality: MoveQuality) -> Self {
        Self {
            name: name.to_string(),
            time,
            boost_time,
            quality,
        }
    }

    /// Time spent in the room after the boost has fired.
    pub fn after_boost(&self) -> f64 {
        self.time - self.boost_time
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub boostless_time: f64,
    #[serde(default)]
    pub boost_strats: Vec<BoostStrat>,
}

impl Room {
    pub fn new(name: &str, boostless_time: f64, boost_strats: Vec<BoostStrat>) -> Self {
        Self {
            name: name.to_string(),
            boostless_time,
            boost_strats,
        }
    }

    /// Time saved against the boostless split when boosting with `strat_index`.
    pub fn boost_delta(&self, strat_index: usize) -> f64 {
        self.boostless_time - self.boost_strats[strat_index].time
    }
}
