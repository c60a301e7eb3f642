//! Terminal-bell sound cues.
//!
//! The transport arms once, on the first user interaction, and disarms
//! idempotently on teardown. Until armed, cue calls are no-ops, which
//! mirrors how desktop audio backends refuse to play before a user
//! gesture.

use std::io::{self, Write};
use tracing::debug;

/// Sound-cue collaborator. Owns its whole lifecycle: arm, ring, disarm.
pub struct Cues {
    enabled: bool,
    armed: bool,
}

impl Cues {
    /// Creates the collaborator; `enabled = false` mutes it entirely.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            armed: false,
        }
    }

    /// One-shot arming on first interaction. Subsequent calls are no-ops.
    pub fn arm(&mut self) {
        if self.enabled && !self.armed {
            self.armed = true;
            debug!("sound cues armed");
        }
    }

    /// Releases the transport. Safe to call repeatedly.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Checks whether cues will currently sound.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Short click for an accepted move.
    pub fn click(&mut self) {
        self.ring(1);
    }

    /// Longer celebration on a win.
    pub fn victory(&mut self) {
        self.ring(3);
    }

    fn ring(&mut self, count: usize) {
        if !self.enabled || !self.armed {
            return;
        }
        let mut out = io::stdout();
        for _ in 0..count {
            let _ = out.write_all(b"\x07");
        }
        let _ = out.flush();
    }
}
