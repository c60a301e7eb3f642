//! Status-consistency invariant: the stored status matches the board.

use super::Invariant;
use crate::rules;
use crate::types::GameState;

/// Invariant: the stored status equals the status recomputed from the
/// board by the rules module.
///
/// This also rules out a state that is simultaneously won and drawn:
/// the status enum holds one variant, and that variant must be what the
/// board warrants.
pub struct StatusConsistent;

impl Invariant<GameState> for StatusConsistent {
    fn holds(state: &GameState) -> bool {
        state.status() == rules::evaluate(state.board())
    }

    fn description() -> &'static str {
        "stored status equals the status recomputed from the board"
    }
}
