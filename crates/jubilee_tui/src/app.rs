//! Application state: the engine plus its collaborators.
//!
//! The app subscribes to the engine with an mpsc sender and reacts to
//! drained signals, so the presentation layer never reaches into the
//! state machine.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use jubilee_tictactoe::{Engine, GameSignal, Line, Player, Position};
use ratatui::{Frame, layout::Rect};
use std::sync::mpsc::{Receiver, channel};
use tracing::debug;

use crate::confetti::Confetti;
use crate::cues::Cues;
use crate::{input, ui};

/// Main application state.
pub struct App {
    engine: Engine,
    signals: Receiver<GameSignal>,
    cursor: Position,
    confetti: Confetti,
    cues: Cues,
    status_line: String,
    winning_line: Option<Line>,
    viewport: Rect,
    cell_areas: [Rect; 9],
}

impl App {
    /// Creates the app and wires it to a fresh engine.
    pub fn new(pieces: usize, sound: bool) -> Self {
        let mut engine = Engine::new();
        let (tx, rx) = channel();
        engine.subscribe(move |signal| {
            let _ = tx.send(*signal);
        });

        Self {
            engine,
            signals: rx,
            cursor: Position::Center,
            confetti: Confetti::new(pieces),
            cues: Cues::new(sound),
            status_line: Self::turn_line(Player::X),
            winning_line: None,
            viewport: Rect::new(0, 0, 80, 24),
            cell_areas: [Rect::default(); 9],
        }
    }

    fn turn_line(mark: Player) -> String {
        format!("Player {mark}'s turn")
    }

    /// Current game state snapshot, for rendering.
    pub fn state(&self) -> &jubilee_tictactoe::GameState {
        self.engine.state()
    }

    /// Cell the keyboard cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The completed triple to highlight, once the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Status line under the board.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// The confetti burst, if one is in flight.
    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    /// Handles a key press. Returns `false` when the user quits.
    pub fn on_key(&mut self, code: KeyCode) -> bool {
        self.cues.arm();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Keys 1-9 map to cells left to right, top to bottom.
                let index = c.to_digit(10).map(|d| d as usize);
                if let Some(position) = index
                    .and_then(|i| i.checked_sub(1))
                    .and_then(Position::from_index)
                {
                    self.activate(position);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor),
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
        true
    }

    /// Handles a mouse event; a left click on a cell activates it.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        self.cues.arm();
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
            && let Some(position) = self.cell_at(mouse.column, mouse.row)
        {
            self.cursor = position;
            self.activate(position);
        }
    }

    fn cell_at(&self, x: u16, y: u16) -> Option<Position> {
        Position::ALL.iter().copied().find(|pos| {
            let r = self.cell_areas[pos.index()];
            x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height
        })
    }

    fn activate(&mut self, position: Position) {
        let outcome = self.engine.apply(position);
        debug!(?position, ?outcome, "cell activated");
        self.drain_signals();
    }

    fn drain_signals(&mut self) {
        while let Ok(signal) = self.signals.try_recv() {
            match signal {
                GameSignal::MoveApplied { .. } => {
                    self.cues.click();
                    self.status_line = Self::turn_line(self.engine.state().to_move());
                }
                GameSignal::Victory { mark, line } => {
                    self.winning_line = Some(line);
                    self.status_line = format!("Player {mark} wins! Press 'r' to play again");
                    self.cues.victory();
                    self.confetti.burst(self.viewport);
                }
                GameSignal::Drawn => {
                    self.status_line = "It's a draw! Press 'r' to play again".to_string();
                }
            }
        }
    }

    fn reset(&mut self) {
        debug!("reset requested");
        self.engine.reset();
        self.winning_line = None;
        self.confetti.clear();
        self.status_line = Self::turn_line(Player::X);
    }

    /// Advances animations by one frame.
    pub fn tick(&mut self) {
        self.confetti.tick();
    }

    /// Renders one frame and records the cell hit-boxes for the mouse.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.viewport = frame.area();
        self.cell_areas = ui::draw(frame, self);
    }

    /// Releases the sound transport. Idempotent.
    pub fn shutdown(&mut self) {
        self.cues.disarm();
    }
}
