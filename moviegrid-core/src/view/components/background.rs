//! src/view/components/background.rs
//! ============================================================================
//! # Background: Decorative Particle Field
//!
//! Cosmetic drifting-starfield effect shown while the result surface is
//! idle or showing an error. Stateless per frame: particle positions are a
//! pure function of the tick counter, so equal state draws an equal
//! buffer. Carries no correctness requirements; the start/stop interface
//! is the whole contract.

use ratatui::prelude::*;

use crate::view::theme;

const GLYPHS: [char; 4] = ['·', '✦', '+', '·'];
const PARTICLE_DENSITY: u16 = 48; // one particle per this many cells

pub struct Background {
    active: bool,
}

impl Background {
    pub fn new() -> Self {
        Self { active: true }
    }

    /// Start/stop boundary. The search state machine decides activity;
    /// this component only obeys.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn render(&self, frame: &mut Frame<'_>, tick: u64, area: Rect) {
        if !self.active || area.width == 0 || area.height == 0 {
            return;
        }

        let buffer = frame.buffer_mut();
        let cells = u32::from(area.width) * u32::from(area.height);
        let count = (cells / u32::from(PARTICLE_DENSITY)).max(1);

        for i in 0..u64::from(count) {
            let seed = splitmix(i.wrapping_mul(0x9E37_79B9));
            let x = area.x + (seed % u64::from(area.width)) as u16;

            // Slow downward drift, each particle at its own phase.
            let fall = (seed >> 16).wrapping_add(tick / (2 + i % 3));
            let y = area.y + (fall % u64::from(area.height)) as u16;

            let glyph = GLYPHS[(seed >> 8) as usize % GLYPHS.len()];
            buffer.set_string(x, y, glyph.to_string(), theme::particle_style());
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

/// SplitMix64 step, enough randomness for a cosmetic scatter.
fn splitmix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_background_draws_nothing() {
        let mut bg = Background::new();
        bg.set_active(false);

        let backend = ratatui::backend::TestBackend::new(40, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                bg.render(f, 7, area);
            })
            .unwrap();

        let empty = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .all(|cell| cell.symbol() == " ");
        assert!(empty);
    }

    #[test]
    fn same_tick_draws_the_same_field() {
        let bg = Background::new();

        let render_at = |tick: u64| {
            let backend = ratatui::backend::TestBackend::new(40, 12);
            let mut terminal = ratatui::Terminal::new(backend).unwrap();
            terminal
                .draw(|f| {
                    let area = f.area();
                    bg.render(f, tick, area);
                })
                .unwrap();
            terminal.backend().buffer().clone()
        };

        assert_eq!(render_at(7), render_at(7));
        assert_ne!(render_at(7), render_at(100));
    }
}
