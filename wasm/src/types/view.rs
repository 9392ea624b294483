use serde::Serialize;

use crate::data::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress = 0,
    Won = 1,
}

impl GameStatus {
    pub fn from_solved(solved: bool) -> Self {
        if solved {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_won(self) -> bool {
        matches!(self, GameStatus::Won)
    }
}

impl From<GameStatus> for u32 {
    fn from(status: GameStatus) -> u32 {
        status as u32
    }
}

impl From<u32> for GameStatus {
    fn from(value: u32) -> GameStatus {
        match value {
            1 => GameStatus::Won,
            _ => GameStatus::InProgress,
        }
    }
}

/// What the presentation layer renders after each activation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub grid: Grid,
    pub won: bool,
}
