//! Signals pushed to interface layers.

use crate::position::Position;
use crate::rules::Line;
use crate::types::Player;

/// Notification emitted while the engine accepts a move.
///
/// Every accepted move emits `MoveApplied` first; if the move ends the
/// game, `Victory` or `Drawn` follows in the same dispatch. Ignored
/// moves and `reset()` emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSignal {
    /// A mark was placed on the board.
    MoveApplied {
        /// Cell the mark was placed in.
        position: Position,
        /// The mark that was placed.
        mark: Player,
    },
    /// The placed mark completed `line` and won the game.
    Victory {
        /// The winning mark.
        mark: Player,
        /// The completed triple, for highlighting.
        line: Line,
    },
    /// The board filled without a winner.
    Drawn,
}
