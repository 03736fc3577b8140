//! Personal splits: a player's own room times, used in place of the built-in table.

use crate::error::{CalcError, Result};
use crate::table::{normalize_room_name, TimingTable};
use crate::types::room::{BoostStrat, MoveQuality, Room};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SplitStrat {
    pub name: String,
    pub time: f64,
    pub boost_time: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SplitRoom {
    pub boostless_time: f64,
    #[serde(default)]
    pub boost_strats: Vec<SplitStrat>,
}

pub type Splits = HashMap<String, SplitRoom>;

impl SplitRoom {
    fn into_room(self, name: &str) -> Room {
        let boost_strats = self
            .boost_strats
            .into_iter()
            .map(|strat| {
                BoostStrat::new(&strat.name, strat.time, strat.boost_time, MoveQuality::Best)
            })
            .collect();
        Room::new(name, self.boostless_time, boost_strats)
    }
}

/// Build a timing table from splits. Later maps win on name collisions; two
/// keys in one map that normalize to the same room are rejected.
pub fn table_from_splits<'a>(layers: impl IntoIterator<Item = &'a Splits>) -> Result<TimingTable> {
    let mut table = TimingTable::default();
    for splits in layers {
        let mut seen = HashSet::new();
        for (name, room) in splits {
            if !seen.insert(normalize_room_name(name)) {
                return Err(CalcError::InvalidTimingTable(format!(
                    "room '{}' is listed more than once",
                    name.trim()
                )));
            }
            table.insert(room.clone().into_room(name));
        }
    }
    table.validate()?;
    Ok(table)
}

pub fn parse_splits(content: &str) -> Result<Splits> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_splits(path: &Path) -> Result<Splits> {
    let content = std::fs::read_to_string(path)?;
    parse_splits(&content)
}
