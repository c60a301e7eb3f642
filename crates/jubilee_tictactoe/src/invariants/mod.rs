//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold for every state the
//! engine can reach. They are testable independently and serve as
//! documentation of system guarantees.

mod mark_balance;
mod status_consistent;
mod turn_parity;

pub use mark_balance::MarkBalance;
pub use status_consistent::StatusConsistent;
pub use turn_parity::TurnParity;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples so related invariants
/// compose into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (MarkBalance, TurnParity, StatusConsistent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        let engine = Engine::new();
        assert!(EngineInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_every_move() {
        let mut engine = Engine::new();
        for index in [4, 0, 8, 2, 6] {
            engine.apply(Position::from_index(index).unwrap());
            assert!(EngineInvariants::check_all(engine.state()).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut engine = Engine::new();
        engine.apply(Position::Center);

        // Hand O an extra mark behind the engine's back.
        let mut state = engine.state().clone();
        state.board_mut().set(Position::TopLeft, Player::O);
        state.board_mut().set(Position::TopRight, Player::O);

        let violations = EngineInvariants::check_all(&state).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = Engine::new();
        type TwoInvariants = (MarkBalance, TurnParity);
        assert!(TwoInvariants::check_all(engine.state()).is_ok());
    }
}
