/////////////////////////////
/// MAP STRUCTS AND ENUMS ///
/////////////////////////////

/// Runtime map type used by the game loop.
///
/// Room numbers are 1-based everywhere outside this module; `rooms` is indexed
/// by `number - 1`.
#[derive(Debug, Clone)]
pub struct Map {
    pub rooms: Vec<Room>,
    pub entrance: usize,
    pub exit: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    pub number: usize,
    pub description: String,
    pub connections: Vec<usize>,
    pub has_primary_weapon: bool,
    pub has_secondary_weapon: bool,
    pub currency: u32,
}

impl Map {
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn room(&self, number: usize) -> Option<&Room> {
        number.checked_sub(1).and_then(|i| self.rooms.get(i))
    }

    pub fn room_mut(&mut self, number: usize) -> Option<&mut Room> {
        number.checked_sub(1).and_then(|i| self.rooms.get_mut(i))
    }

    /// True if a door in `from` leads to `to`.
    pub fn is_adjacent(&self, from: usize, to: usize) -> bool {
        self.room(from)
            .map(|r| r.connections.contains(&to))
            .unwrap_or(false)
    }

    pub fn is_exit(&self, number: usize) -> bool {
        self.exit == number
    }
}

impl Room {
    pub fn new(number: usize) -> Self {
        Room {
            number,
            ..Room::default()
        }
    }
}
