//! The game engine: one state value plus subscribers.

use tracing::{debug, instrument};

use crate::position::Position;
use crate::rules;
use crate::signal::GameSignal;
use crate::types::{GameState, GameStatus};

/// Why a move was ignored.
///
/// Ignored moves are normal UI races (double activation, activation
/// after the game ends), not failures, so they are plain values rather
/// than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// The cell is already occupied.
    #[display("cell is already occupied")]
    Occupied,
    /// The game is already over.
    #[display("game is already over")]
    GameOver,
}

/// Result of an [`Engine::apply`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was accepted; carries the status it produced.
    Applied(GameStatus),
    /// The move had no effect.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// Checks if the move changed the game state.
    pub fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

type Subscriber = Box<dyn FnMut(&GameSignal)>;

/// Tic-tac-toe game engine.
///
/// Owns a single [`GameState`] and dispatches [`GameSignal`]s to
/// subscribers as moves are accepted. All mutation happens through
/// [`Engine::apply`] and [`Engine::reset`]; no external caller can
/// corrupt the state, the worst case is a silently ignored call.
pub struct Engine {
    state: GameState,
    subscribers: Vec<Subscriber>,
}

impl Engine {
    /// Creates an engine with a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            subscribers: Vec::new(),
        }
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers a subscriber invoked synchronously for every signal.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameSignal) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies the current player's mark at `position`.
    ///
    /// If the cell is occupied or the game is over, nothing changes and
    /// the call reports `Ignored`. Otherwise the mark is placed, the
    /// turn flips, and the status is re-evaluated from the full board;
    /// subscribers see `MoveApplied`, then `Victory` or `Drawn` if the
    /// move ended the game.
    #[instrument(skip(self), fields(mark = %self.state.to_move()))]
    pub fn apply(&mut self, position: Position) -> MoveOutcome {
        if self.state.status().is_terminal() {
            debug!("move after game end ignored");
            return MoveOutcome::Ignored(IgnoredMove::GameOver);
        }
        if !self.state.board().is_empty(position) {
            debug!("move to occupied cell ignored");
            return MoveOutcome::Ignored(IgnoredMove::Occupied);
        }

        let mark = self.state.place(position);
        self.emit(GameSignal::MoveApplied { position, mark });

        if let Some((winner, line)) = rules::winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(winner));
            self.emit(GameSignal::Victory { mark: winner, line });
        } else if self.state.board().is_full() {
            self.state.set_status(GameStatus::Draw);
            self.emit(GameSignal::Drawn);
        }

        debug!(board = %self.state.board(), status = ?self.state.status(), "move applied");
        MoveOutcome::Applied(self.state.status())
    }

    /// Convenience for frontends that address cells by raw index.
    ///
    /// `None` means the index was outside 0-8, which is a binding bug
    /// in the caller; valid frontends bind exactly nine cells.
    pub fn apply_index(&mut self, index: usize) -> Option<MoveOutcome> {
        Position::from_index(index).map(|pos| self.apply(pos))
    }

    /// Reinitializes the game: empty board, X to move, in progress.
    ///
    /// Reset is a silent reinitialization, not a move; no signals.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }

    fn emit(&mut self, signal: GameSignal) {
        for subscriber in &mut self.subscribers {
            subscriber(&signal);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_apply_index_bounds() {
        let mut engine = Engine::new();
        assert!(engine.apply_index(0).is_some());
        assert!(engine.apply_index(8).is_some());
        assert_eq!(engine.apply_index(9), None);
    }

    #[test]
    fn test_subscribers_see_move_applied() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut engine = Engine::new();
        engine.subscribe(move |signal| sink.borrow_mut().push(*signal));
        engine.apply(Position::Center);

        assert_eq!(
            seen.borrow().as_slice(),
            &[GameSignal::MoveApplied {
                position: Position::Center,
                mark: crate::Player::X,
            }]
        );
    }

    #[test]
    fn test_ignored_move_emits_nothing() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut engine = Engine::new();
        engine.apply(Position::Center);
        engine.subscribe(move |signal| sink.borrow_mut().push(*signal));
        engine.apply(Position::Center);

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_reset_emits_nothing() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut engine = Engine::new();
        engine.subscribe(move |signal| sink.borrow_mut().push(*signal));
        engine.apply(Position::Center);
        seen.borrow_mut().clear();

        engine.reset();
        assert!(seen.borrow().is_empty());
        assert_eq!(engine.state(), &GameState::new());
    }
}
