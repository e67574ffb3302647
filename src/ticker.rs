/// The once-per-second countdown driver and its completion latch.
use chrono::{DateTime, Utc};

use crate::celebrate::{Celebration, Effect};
use crate::countdown::{self, Snapshot};
use crate::deadline::Deadline;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Completed,
}

/// A single display slot: its text and whether it is hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Surface {
    pub text: String,
    pub hidden: bool,
}

/// The surfaces a tick writes into. Any of them may be absent,
/// in which case that part of the update is skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    pub days: Option<Surface>,
    pub hours: Option<Surface>,
    pub minutes: Option<Surface>,
    pub seconds: Option<Surface>,
    pub grid: Option<Surface>,
    pub done: Option<Surface>,
}

impl Board {
    /// Every surface present; the done message starts hidden.
    pub fn new(done_text: &str) -> Self {
        Self {
            days: Some(Surface::default()),
            hours: Some(Surface::default()),
            minutes: Some(Surface::default()),
            seconds: Some(Surface::default()),
            grid: Some(Surface::default()),
            done: Some(Surface {
                text: done_text.to_string(),
                hidden: true,
            }),
        }
    }

    fn show(&mut self, snapshot: &Snapshot, has_time: bool) {
        let slots = [
            (&mut self.days, &snapshot.days),
            (&mut self.hours, &snapshot.hours),
            (&mut self.minutes, &snapshot.minutes),
            (&mut self.seconds, &snapshot.seconds),
        ];
        for (slot, value) in slots {
            if let Some(surface) = slot {
                surface.text.clone_from(value);
            }
        }
        if let Some(grid) = &mut self.grid {
            grid.hidden = !has_time;
        }
        if let Some(done) = &mut self.done {
            done.hidden = has_time;
        }
    }
}

/// What a single tick produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    pub snapshot: Snapshot,
    pub has_time: bool,
    /// True only on the tick that moved the ticker to `Completed`.
    pub completed_now: bool,
}

/// Owns the completion latch and, optionally, the celebration effect.
///
/// Whether an effect exists is decided when the ticker is built; a ticker
/// without one completes normally and simply skips the celebration.
pub struct Ticker<E: Effect> {
    deadline: Deadline,
    confetti: bool,
    effect: Option<E>,
    phase: Phase,
    celebration: Option<Celebration>,
}

impl<E: Effect> Ticker<E> {
    pub fn new(deadline: Deadline, confetti: bool, effect: Option<E>) -> Self {
        Self {
            deadline,
            confetti,
            effect,
            phase: Phase::Running,
            celebration: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn effect(&self) -> Option<&E> {
        self.effect.as_ref()
    }

    pub fn effect_mut(&mut self) -> Option<&mut E> {
        self.effect.as_mut()
    }

    /// True while the celebration still wants animation frames.
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some_and(|c| c.is_active())
    }

    /// Recompute the countdown for `now` and push it onto `board`.
    pub fn tick(&mut self, now: DateTime<Utc>, board: &mut Board) -> TickOutcome {
        let snapshot = countdown::format_remaining(self.deadline, now);
        let has_time = snapshot.has_time();
        board.show(&snapshot, has_time);

        let completed_now = !has_time && self.phase == Phase::Running;
        if completed_now {
            self.phase = Phase::Completed;
            log::info!("countdown completed at {now}");
            self.celebrate(now);
        }

        TickOutcome {
            snapshot,
            has_time,
            completed_now,
        }
    }

    /// Advance a running celebration by one animation frame.
    pub fn frame(&mut self, now: DateTime<Utc>) -> bool {
        match (&mut self.celebration, &mut self.effect) {
            (Some(celebration), Some(effect)) => celebration.frame(now, effect),
            _ => false,
        }
    }

    fn celebrate(&mut self, now: DateTime<Utc>) {
        if !self.confetti {
            return;
        }
        let Some(effect) = self.effect.as_mut() else {
            log::debug!("confetti enabled but no effect available");
            return;
        };
        self.celebration = Some(Celebration::start(now, effect));
    }
}
