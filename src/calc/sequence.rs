use crate::error::{CalcError, Result};
use crate::table::{is_terminal, normalize_room_name, TimingTable, TERMINAL_ROOM};
use crate::types::room::Room;
use std::collections::HashSet;

/// Rooms in a seed, finish room included.
pub const ROOM_COUNT: usize = 9;
/// Rooms the player draws before the finish room.
pub const PLAYER_ROOM_COUNT: usize = ROOM_COUNT - 1;

/// A seed resolved against a timing table: exactly nine rooms.
#[derive(Debug, Clone)]
pub struct StageSequence<'t> {
    rooms: Vec<&'t Room>,
}

impl<'t> StageSequence<'t> {
    /// Resolve room names against `table`, appending the finish room when the
    /// caller left it off.
    pub fn resolve<S: AsRef<str>>(names: &[S], table: &'t TimingTable) -> Result<Self> {
        let mut rooms = names
            .iter()
            .map(|name| table.resolve(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        if rooms.last().map_or(true, |room| !is_terminal(&room.name)) {
            rooms.push(table.resolve(TERMINAL_ROOM)?);
        }

        let mut seen = HashSet::new();
        for room in &rooms {
            if !seen.insert(normalize_room_name(&room.name)) {
                return Err(CalcError::DuplicateStage(room.name.clone()));
            }
        }

        let sequence = Self::from_rooms(rooms)?;
        sequence.ensure_terminal()?;
        Ok(sequence)
    }

    /// Wrap already-resolved rooms. Only the length is checked; the searches
    /// verify the finish room themselves.
    pub fn from_rooms(rooms: Vec<&'t Room>) -> Result<Self> {
        if rooms.len() != ROOM_COUNT {
            return Err(CalcError::InvalidSequenceLength {
                expected: PLAYER_ROOM_COUNT,
                found: rooms.len().saturating_sub(1),
            });
        }
        Ok(Self { rooms })
    }

    pub fn rooms(&self) -> &[&'t Room] {
        &self.rooms
    }

    pub fn room(&self, index: usize) -> &'t Room {
        self.rooms[index]
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.rooms.iter().map(|room| room.name.clone()).collect()
    }

    pub fn ensure_terminal(&self) -> Result<()> {
        match self.rooms.last() {
            Some(room) if is_terminal(&room.name) => Ok(()),
            Some(room) => Err(CalcError::InvalidTerminalStage(room.name.clone())),
            None => Err(CalcError::InvalidTerminalStage(String::new())),
        }
    }

    /// Boostless time of the rooms strictly between `from` and `to`.
    pub fn time_between(&self, from: usize, to: usize) -> f64 {
        self.rooms[from + 1..to]
            .iter()
            .map(|room| room.boostless_time)
            .sum()
    }
}
