//! Board positions.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::types::Board;

/// One of the nine cells, row-major: `index = row * 3 + col`.
///
/// Cell addresses are a closed enum rather than a bare index, so an
/// out-of-range index is unrepresentable inside the engine. Frontends
/// translate raw indices at the boundary with [`Position::from_index`],
/// which is where a malformed binding dies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
#[repr(usize)]
pub enum Position {
    /// Index 0.
    TopLeft = 0,
    /// Index 1.
    TopCenter = 1,
    /// Index 2.
    TopRight = 2,
    /// Index 3.
    MidLeft = 3,
    /// Index 4.
    Center = 4,
    /// Index 5.
    MidRight = 5,
    /// Index 6.
    BottomLeft = 6,
    /// Index 7.
    BottomCenter = 7,
    /// Index 8.
    BottomRight = 8,
}

impl Position {
    /// All nine positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MidLeft,
        Position::Center,
        Position::MidRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from a board index, or `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Board index (0-8).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row (0-2, top to bottom).
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    /// Column (0-2, left to right).
    pub const fn col(self) -> usize {
        self.index() % 3
    }

    /// Positions whose cells are still empty on the given board.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    /// Prints the 1-based cell number shown to players.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}
