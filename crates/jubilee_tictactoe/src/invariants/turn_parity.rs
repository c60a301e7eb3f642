//! Turn-parity invariant: the turn indicator follows the mark counts.

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: X is to move iff the mark counts are equal.
///
/// The engine flips the turn on every accepted move, including a
/// terminal one, so this holds for won and drawn states as well.
pub struct TurnParity;

impl Invariant<GameState> for TurnParity {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        let expected = if x == o { Player::X } else { Player::O };
        state.to_move() == expected
    }

    fn description() -> &'static str {
        "X is to move iff count(X) equals count(O)"
    }
}
