//! Victory confetti: a one-shot particle burst over the viewport.
//!
//! Particles rain in from above the visible area, drift sideways, and
//! are dropped once they fall past the bottom edge; the burst ends when
//! none remain. Nothing here touches game state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

const GLYPHS: [&str; 5] = ["*", "o", "+", ".", "x"];
const COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
];
const GRAVITY: f32 = 0.06;

struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    glyph: &'static str,
    color: Color,
}

/// A non-recycling confetti burst.
pub struct Confetti {
    particles: Vec<Particle>,
    pieces: usize,
    floor: f32,
    rng: StdRng,
}

impl Confetti {
    /// Creates an idle confetti emitter firing `pieces` particles per burst.
    pub fn new(pieces: usize) -> Self {
        Self::seeded(pieces, rand::random())
    }

    /// Seeded variant so the scatter is reproducible in tests.
    pub fn seeded(pieces: usize, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            pieces,
            floor: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Launches a burst across the top of `area`, replacing any burst
    /// still in flight.
    pub fn burst(&mut self, area: Rect) {
        let width = area.width.max(1) as f32;
        let height = area.height.max(1) as f32;
        self.floor = height;
        self.particles = (0..self.pieces)
            .map(|_| Particle {
                x: self.rng.gen_range(0.0..width),
                // Stagger spawn heights above the screen so the burst
                // rains in rather than landing as one sheet.
                y: -self.rng.gen_range(0.0..height),
                vx: self.rng.gen_range(-0.4..0.4),
                vy: self.rng.gen_range(0.1..0.6),
                glyph: GLYPHS[self.rng.gen_range(0..GLYPHS.len())],
                color: COLORS[self.rng.gen_range(0..COLORS.len())],
            })
            .collect();
    }

    /// Drops all particles immediately.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Checks if any particles are still falling.
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Advances the animation by one frame.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.vy += GRAVITY;
            p.x += p.vx;
            p.y += p.vy;
        }
        let floor = self.floor;
        self.particles.retain(|p| p.y < floor);
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for p in &self.particles {
            if p.x < 0.0 || p.y < 0.0 {
                continue;
            }
            let x = area.x.saturating_add(p.x as u16);
            let y = area.y.saturating_add(p.y as u16);
            if x < area.right() && y < area.bottom() {
                buf[(x, y)].set_symbol(p.glyph).set_fg(p.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_burst_spawns_requested_pieces() {
        let mut confetti = Confetti::seeded(50, 7);
        assert!(!confetti.is_active());
        confetti.burst(AREA);
        assert!(confetti.is_active());
        assert_eq!(confetti.particles.len(), 50);
    }

    #[test]
    fn test_particles_fall_and_are_not_recycled() {
        let mut confetti = Confetti::seeded(50, 7);
        confetti.burst(AREA);
        // Worst case: spawned a full screen above, slowest initial fall.
        // Velocity grows by GRAVITY each frame, so a few hundred frames
        // clear the screen with a wide margin.
        for _ in 0..600 {
            confetti.tick();
        }
        assert!(!confetti.is_active());
    }

    #[test]
    fn test_clear_stops_the_burst() {
        let mut confetti = Confetti::seeded(10, 1);
        confetti.burst(AREA);
        confetti.clear();
        assert!(!confetti.is_active());
    }

    #[test]
    fn test_render_stays_inside_area() {
        let mut confetti = Confetti::seeded(200, 42);
        confetti.burst(AREA);
        for _ in 0..10 {
            confetti.tick();
        }
        let mut buf = Buffer::empty(AREA);
        // Out-of-bounds writes would panic the buffer indexing.
        (&confetti).render(AREA, &mut buf);
    }
}
