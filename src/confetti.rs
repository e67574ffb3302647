/// Terminal confetti: a small particle system fed by celebration bursts.
use rand::RngExt;

use crate::celebrate::{BurstParams, Effect};
use crate::color::PALETTE;

/// Particles live on a fixed virtual canvas and are scaled onto the
/// terminal area when drawn.
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

const GRAVITY: f64 = 3.0;
const DECAY: f64 = 0.9;
const LAUNCH_ANGLE: f64 = 90.0;
const GLYPHS: &[char] = &['*', '+', 'o', '•', '▪', '◆', '~'];

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    angle: f64,
    velocity: f64,
    tick: u32,
    total_ticks: u32,
    pub glyph: char,
    pub color: &'static str,
    pub scalar: f64,
}

impl Particle {
    fn step(&mut self) {
        self.x += self.angle.cos() * self.velocity;
        self.y += self.angle.sin() * self.velocity + GRAVITY;
        self.velocity *= DECAY;
        self.tick += 1;
    }

    fn alive(&self) -> bool {
        self.tick < self.total_ticks
    }

    /// Position on the unit canvas, `None` once it has left the visible area.
    pub fn unit_position(&self) -> Option<(f64, f64)> {
        let x = self.x / CANVAS_WIDTH;
        let y = self.y / CANVAS_HEIGHT;
        ((0.0..1.0).contains(&x) && (0.0..1.0).contains(&y)).then_some((x, y))
    }
}

/// All live confetti, advanced once per animation frame.
#[derive(Debug, Default)]
pub struct ConfettiField {
    particles: Vec<Particle>,
}

impl ConfettiField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move every particle one frame and drop the expired ones.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.step();
        }
        self.particles.retain(Particle::alive);
    }

    pub fn is_live(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Effect for ConfettiField {
    fn burst(&mut self, params: BurstParams) {
        let mut rng = rand::rng();
        let start_x = params.origin.x * CANVAS_WIDTH;
        let start_y = params.origin.y * CANVAS_HEIGHT;
        let spread = params.spread.to_radians();
        log::debug!(
            "burst of {} at ({:.2}, {:.2})",
            params.particle_count,
            params.origin.x,
            params.origin.y
        );

        self.particles.extend((0..params.particle_count).map(|_| Particle {
            x: start_x,
            y: start_y,
            angle: -LAUNCH_ANGLE.to_radians() + (0.5 * spread - rng.random_range(0.0..1.0) * spread),
            velocity: params.start_velocity * 0.5
                + rng.random_range(0.0..1.0) * params.start_velocity,
            tick: 0,
            total_ticks: params.ticks,
            glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            scalar: params.scalar,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celebrate::Origin;

    fn small(count: u32, ticks: u32) -> BurstParams {
        BurstParams {
            particle_count: count,
            ticks,
            ..BurstParams::default()
        }
    }

    #[test]
    fn burst_adds_particles_at_origin() {
        let mut field = ConfettiField::new();
        field.burst(BurstParams {
            origin: Origin { x: 0.25, y: 0.5 },
            ..small(10, 5)
        });
        assert_eq!(field.particles().len(), 10);
        for particle in field.particles() {
            assert_eq!(particle.unit_position(), Some((0.25, 0.5)));
        }
    }

    #[test]
    fn particles_expire_after_their_ticks() {
        let mut field = ConfettiField::new();
        field.burst(small(4, 3));
        field.burst(small(2, 10));
        field.step();
        field.step();
        assert_eq!(field.particles().len(), 6);
        field.step();
        assert_eq!(field.particles().len(), 2);
        for _ in 0..7 {
            field.step();
        }
        assert!(!field.is_live());
    }

    #[test]
    fn launch_goes_upward() {
        let mut field = ConfettiField::new();
        field.burst(BurstParams {
            spread: 0.0,
            start_velocity: 40.0,
            ..small(1, 10)
        });
        let start = field.particles()[0].y;
        field.step();
        assert!(field.particles()[0].y < start);
    }

    #[test]
    fn offscreen_particles_have_no_position() {
        let mut field = ConfettiField::new();
        field.burst(BurstParams {
            origin: Origin { x: 0.5, y: -0.2 },
            ..small(1, 10)
        });
        assert_eq!(field.particles()[0].unit_position(), None);
    }
}
