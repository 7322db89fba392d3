//! A room holds the hidden board and the guess board of one game

use crate::board::{layouts_equal, Arrangement};
use crate::core::error::{OrapaError, Result};
use crate::spatial::validation::LayoutVerdict;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two boards in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardSide {
    /// The board a player hides
    Own,
    /// The board where the opponent's layout is guessed
    Opponent,
}

impl BoardSide {
    pub fn other(self) -> Self {
        match self {
            BoardSide::Own => BoardSide::Opponent,
            BoardSide::Opponent => BoardSide::Own,
        }
    }

    fn index(self) -> usize {
        match self {
            BoardSide::Own => 0,
            BoardSide::Opponent => 1,
        }
    }
}

impl fmt::Display for BoardSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardSide::Own => f.write_str("Your board"),
            BoardSide::Opponent => f.write_str("Opponent's board"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    code: String,
    boards: [Arrangement; 2],
    /// Frozen copies taken on commit
    committed: [Option<Arrangement>; 2],
}

impl Room {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            boards: [Arrangement::new(), Arrangement::new()],
            committed: [None, None],
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn board(&self, side: BoardSide) -> &Arrangement {
        &self.boards[side.index()]
    }

    pub fn committed(&self, side: BoardSide) -> Option<&Arrangement> {
        self.committed[side.index()].as_ref()
    }

    pub fn is_locked(&self, side: BoardSide) -> bool {
        self.committed[side.index()].is_some()
    }

    /// Mutable access to a board that has not been committed
    pub fn board_mut(&mut self, side: BoardSide) -> Result<&mut Arrangement> {
        if self.is_locked(side) {
            return Err(OrapaError::BoardLocked(format!("{} in room {}", side, self.code)));
        }
        Ok(&mut self.boards[side.index()])
    }

    /// Run the layout check on a board. Allowed on locked boards.
    pub fn check(&mut self, side: BoardSide) -> LayoutVerdict {
        self.boards[side.index()].check()
    }

    /// Validate and freeze a board. Illegal layouts are refused.
    pub fn commit(&mut self, side: BoardSide) -> Result<&Arrangement> {
        if self.is_locked(side) {
            return Err(OrapaError::BoardLocked(format!("{} in room {}", side, self.code)));
        }
        let verdict = self.check(side);
        if !verdict.legal {
            return Err(OrapaError::IllegalLayout(verdict.message));
        }
        tracing::info!("Room {}: {} committed", self.code, side);
        let frozen = self.boards[side.index()].clone();
        Ok(&*self.committed[side.index()].insert(frozen))
    }

    /// True when both boards are committed and their layouts agree
    pub fn guess_matches(&self) -> bool {
        layouts_equal(self.committed(BoardSide::Own), self.committed(BoardSide::Opponent))
    }

    /// Start a board over, dropping its commit
    pub fn reset(&mut self, side: BoardSide) {
        self.boards[side.index()] = Arrangement::new();
        self.committed[side.index()] = None;
        tracing::info!("Room {}: {} reset", self.code, side);
    }
}
