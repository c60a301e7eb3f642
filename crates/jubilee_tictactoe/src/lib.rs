//! Pure tic-tac-toe game engine with observable state transitions.
//!
//! # Architecture
//!
//! - **Engine**: holds one [`GameState`] value and applies moves to it.
//!   Illegal moves (occupied cell, game already over) are silently ignored,
//!   never errors.
//! - **Signals**: interface layers subscribe to the engine and receive a
//!   [`GameSignal`] for every accepted move, decoupling presentation from
//!   the state machine.
//! - **Rules**: win and draw evaluation over the full board.
//! - **Invariants**: first-class runtime properties checked in tests.
//!
//! # Example
//!
//! ```
//! use jubilee_tictactoe::{Engine, GameStatus, MoveOutcome, Position};
//!
//! let mut engine = Engine::new();
//! let outcome = engine.apply(Position::Center);
//! assert!(matches!(outcome, MoveOutcome::Applied(GameStatus::InProgress)));
//!
//! // Center is now occupied, so a second activation is a no-op.
//! let outcome = engine.apply(Position::Center);
//! assert!(!outcome.is_applied());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod signal;
mod types;

pub use engine::{Engine, IgnoredMove, MoveOutcome};
pub use position::Position;
pub use rules::{LINES, Line};
pub use signal::GameSignal;
pub use types::{Board, GameState, GameStatus, Player, Square};
