//! Timing tables: room name -> boostless split and boost strategies.
//!
//! The built-in table is constructed once and shared read-only. Personal
//! tables are independent values built from a splits file and passed
//! explicitly to [`crate::calc::compute_ranked_custom`].

pub mod builtin;
pub mod splits;

use crate::error::{CalcError, Result};
use crate::types::room::Room;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const TERMINAL_ROOM: &str = "Finish Room";

/// Client-side spellings that differ from the table's room names.
const ALIASES: [(&str, &str); 2] = [("early 3-1", "early 3+1"), ("glass neo", "rng skip")];

/// Normalize a room name for lookup: trimmed, lowercase, aliases resolved.
pub fn normalize_room_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(lowered)
}

pub fn is_terminal(name: &str) -> bool {
    normalize_room_name(name) == normalize_room_name(TERMINAL_ROOM)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingTable {
    rooms: HashMap<String, Room>,
}

impl TimingTable {
    pub fn new(rooms: impl IntoIterator<Item = Room>) -> Self {
        Self {
            rooms: rooms
                .into_iter()
                .map(|room| (normalize_room_name(&room.name), room))
                .collect(),
        }
    }

    /// Process-wide reference table.
    pub fn builtin() -> &'static TimingTable {
        static BUILTIN: OnceLock<TimingTable> = OnceLock::new();
        BUILTIN.get_or_init(|| TimingTable::new(builtin::rooms()))
    }

    pub fn get(&self, name: &str) -> Option<&Room> {
        self.rooms.get(&normalize_room_name(name))
    }

    pub fn resolve(&self, name: &str) -> Result<&Room> {
        self.get(name)
            .ok_or_else(|| CalcError::UnknownStage(name.trim().to_string()))
    }

    pub fn insert(&mut self, room: Room) {
        self.rooms.insert(normalize_room_name(&room.name), room);
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Player-selectable room names (everything except the finish room), sorted.
    pub fn room_names(&self) -> Vec<String> {
        let mut names = self
            .rooms
            .values()
            .filter(|room| !is_terminal(&room.name))
            .map(|room| room.name.clone())
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    pub fn validate(&self) -> Result<()> {
        for room in self.rooms.values() {
            if room.name.trim().is_empty() {
                return Err(CalcError::InvalidTimingTable(
                    "room names must be non-empty".to_string(),
                ));
            }
            if !(room.boostless_time.is_finite() && room.boostless_time >= 0.0) {
                return Err(CalcError::InvalidTimingTable(format!(
                    "{}: boostless_time must be finite and >= 0 (found {})",
                    room.name, room.boostless_time
                )));
            }
            for strat in &room.boost_strats {
                if !strat.time.is_finite() {
                    return Err(CalcError::InvalidTimingTable(format!(
                        "{} ({}): time must be finite",
                        room.name, strat.name
                    )));
                }
                if !(strat.boost_time.is_finite() && strat.boost_time >= 0.0) {
                    return Err(CalcError::InvalidTimingTable(format!(
                        "{} ({}): boost_time must be finite and >= 0 (found {})",
                        room.name, strat.name, strat.boost_time
                    )));
                }
            }
        }
        Ok(())
    }
}
