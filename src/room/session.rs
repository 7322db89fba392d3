//! Per-client view of a room

use super::{BoardSide, RoomHandle};

/// Which room a client is in and which board it is looking at
#[derive(Debug, Clone)]
pub struct Session {
    room: RoomHandle,
    side: BoardSide,
}

impl Session {
    /// New sessions start on the player's own board
    pub fn new(room: RoomHandle) -> Self {
        Self {
            room,
            side: BoardSide::Own,
        }
    }

    pub fn room(&self) -> &RoomHandle {
        &self.room
    }

    pub fn side(&self) -> BoardSide {
        self.side
    }

    /// Toggle between the two boards and return the one now shown
    pub fn switch_board(&mut self) -> BoardSide {
        self.side = self.side.other();
        self.side
    }
}
