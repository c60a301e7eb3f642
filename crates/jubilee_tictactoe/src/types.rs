//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// A player's mark. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

/// 3x3 board, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Occupies the cell with the given mark. Only the engine writes cells.
    pub(crate) fn set(&mut self, pos: Position, mark: Player) {
        self.squares[pos.index()] = Square::Occupied(mark);
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Counts the cells occupied by the given mark.
    pub fn count(&self, mark: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Returns all cells as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.squares[row * 3 + col] {
                    Square::Empty => write!(f, ".")?,
                    Square::Occupied(mark) => write!(f, "{mark}")?,
                }
            }
        }
        Ok(())
    }
}

/// Terminal status of the game.
///
/// At most one of `Won`/`Draw` ever holds; once the game leaves
/// `InProgress`, no further moves are accepted until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// One snapshot of the whole game: board, turn indicator, status.
///
/// The engine owns a single value of this type and replaces it wholesale
/// on reset; interface layers read it and never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
    status: GameStatus,
}

impl GameState {
    /// Creates the initial state: empty board, X to move, in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark is placed next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the current player's mark and flips the turn indicator.
    ///
    /// The turn flips even on a terminal move, so the parity of marks on
    /// the board always determines `to_move`.
    pub(crate) fn place(&mut self, pos: Position) -> Player {
        let mark = self.to_move;
        self.board.set(pos, mark);
        self.to_move = mark.opponent();
        mark
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
