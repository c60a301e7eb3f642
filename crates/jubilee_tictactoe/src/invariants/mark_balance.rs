//! Mark-balance invariant: X moves first, so X never trails and never
//! leads by more than one.

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// Every cell is written at most once and players strictly alternate,
/// so the mark counts can only differ by the first-mover advantage.
pub struct MarkBalance;

impl Invariant<GameState> for MarkBalance {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "count(X) - count(O) is 0 or 1"
    }
}
