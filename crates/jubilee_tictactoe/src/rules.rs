//! Win and draw evaluation.
//!
//! The board is only nine cells, so evaluation rechecks the full board
//! after every move rather than updating incrementally from the moved
//! cell. Both are O(1) here and the exhaustive recheck is simpler to
//! verify.

use crate::position::Position;
use crate::types::{Board, GameStatus, Player, Square};

/// A winning triple of cells, in board order.
pub type Line = [Position; 3];

/// The eight lines that decide the game, checked in this order:
/// rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MidLeft, Position::Center, Position::MidRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MidLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MidRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its mark, if any.
///
/// At most one mark can complete a line per move, so the enumeration
/// order never changes the winner; it only pins down which line is
/// reported when one move completes two.
pub fn winner(board: &Board) -> Option<(Player, Line)> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == Square::Occupied(mark)
            && board.get(c) == Square::Occupied(mark)
        {
            return Some((mark, line));
        }
    }
    None
}

/// Computes the status the board warrants, from scratch.
pub fn evaluate(board: &Board) -> GameStatus {
    match winner(board) {
        Some((mark, _)) => GameStatus::Won(mark),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set(*pos, *mark);
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_row_win() {
        let board = board_with(&[
            (Position::MidLeft, Player::O),
            (Position::Center, Player::O),
            (Position::MidRight, Player::O),
        ]);
        assert_eq!(
            winner(&board),
            Some((Player::O, [Position::MidLeft, Position::Center, Position::MidRight]))
        );
    }

    #[test]
    fn test_column_win() {
        let board = board_with(&[
            (Position::TopCenter, Player::X),
            (Position::Center, Player::X),
            (Position::BottomCenter, Player::X),
        ]);
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_with(&[
            (Position::TopRight, Player::X),
            (Position::Center, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(
            winner(&board),
            Some((Player::X, [Position::TopRight, Position::Center, Position::BottomLeft]))
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_double_line_reports_first_in_order() {
        // X holds both the top row and the left column; rows are
        // enumerated first.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MidLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(
            winner(&board),
            Some((Player::X, [Position::TopLeft, Position::TopCenter, Position::TopRight]))
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MidLeft, Player::X),
            (Position::Center, Player::O),
            (Position::MidRight, Player::O),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }
}
