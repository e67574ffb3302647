/// Celebration bursts fired once when the countdown completes.
use chrono::{DateTime, TimeDelta, Utc};
use rand::RngExt;

/// Length of the window in which small bursts repeat every animation frame.
const BURST_WINDOW_MS: i64 = 1000;

/// Where a burst is launched from, in unit canvas coordinates.
/// `(0, 0)` is the top left corner, `(1, 1)` the bottom right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// Parameters of a single burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstParams {
    pub particle_count: u32,
    /// Cone width in degrees around the upward launch direction.
    pub spread: f64,
    pub start_velocity: f64,
    /// Particle lifetime in animation frames.
    pub ticks: u32,
    pub scalar: f64,
    pub origin: Origin,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            particle_count: 50,
            spread: 45.0,
            start_velocity: 45.0,
            ticks: 200,
            scalar: 1.0,
            origin: Origin { x: 0.5, y: 0.5 },
        }
    }
}

/// Something that can draw a burst of particles.
pub trait Effect {
    fn burst(&mut self, params: BurstParams);
}

/// Small burst from a random spot, repeated on every frame of the window.
pub fn sparkle() -> BurstParams {
    let mut rng = rand::rng();
    BurstParams {
        particle_count: 6,
        start_velocity: 40.0,
        spread: 70.0,
        ticks: 60,
        origin: Origin {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0) - 0.2,
        },
        ..BurstParams::default()
    }
}

/// The two large pops fired right after the first sparkle.
pub fn pops() -> [BurstParams; 2] {
    [
        BurstParams {
            particle_count: 200,
            spread: 80.0,
            origin: Origin { x: 0.5, y: 0.6 },
            ..BurstParams::default()
        },
        BurstParams {
            particle_count: 200,
            spread: 120.0,
            scalar: 1.2,
            origin: Origin { x: 0.5, y: 0.4 },
            ..BurstParams::default()
        },
    ]
}

/// A running burst sequence. Bounded by wall clock, not by frame count.
#[derive(Clone, Copy, Debug)]
pub struct Celebration {
    until: DateTime<Utc>,
    active: bool,
}

impl Celebration {
    /// Fire the first sparkle and both pops, and open the repeat window.
    pub fn start<E: Effect + ?Sized>(now: DateTime<Utc>, effect: &mut E) -> Self {
        effect.burst(sparkle());
        for params in pops() {
            effect.burst(params);
        }
        let until = now + TimeDelta::milliseconds(BURST_WINDOW_MS);
        log::debug!("celebration started, repeating sparkles until {until}");
        Self {
            until,
            active: true,
        }
    }

    /// One animation frame: sparkle, then stop once the window has passed.
    /// Returns whether further frames are wanted.
    pub fn frame<E: Effect + ?Sized>(&mut self, now: DateTime<Utc>, effect: &mut E) -> bool {
        if !self.active {
            return false;
        }
        effect.burst(sparkle());
        if now >= self.until {
            self.active = false;
        }
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
