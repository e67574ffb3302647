use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use crossterm::event::KeyCode;

use crate::confetti::ConfettiField;
use crate::config::Config;
use crate::deadline::{self, Deadline};
use crate::ticker::{Board, Phase, Ticker};
use crate::ui::Theme;

use super::AppEvent;

const TICK_PERIOD_MS: i64 = 1000;
/// Roughly one animation frame at 60 Hz.
const FRAME_PERIOD_MS: i64 = 16;
const FRAME_INTERVAL: Duration = Duration::from_millis(FRAME_PERIOD_MS as u64);
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub config: Config,
    pub deadline: Deadline,
    /// The deadline as shown under the title.
    pub deadline_text: String,
    pub board: Board,
    pub theme: Theme,
    ticker: Ticker<ConfettiField>,
    next_tick: DateTime<Utc>,
    next_frame: DateTime<Utc>,
}

impl App {
    pub fn new(config: Config, effect: Option<ConfettiField>) -> Self {
        Self::new_at(config, effect, Utc::now())
    }

    /// Build the app and paint the first tick immediately.
    pub fn new_at(config: Config, effect: Option<ConfettiField>, now: DateTime<Utc>) -> Self {
        let deadline = deadline::parse(&config.deadline);
        if let Some(at) = deadline.instant() {
            log::info!("counting down to {at}");
        }

        let mut app = Self {
            running: true,
            show_help: false,
            deadline_text: deadline.describe(&config.deadline),
            board: Board::new(&config.done_text),
            theme: Theme::from_config(&config),
            ticker: Ticker::new(deadline, config.confetti, effect),
            deadline,
            config,
            next_tick: now,
            next_frame: now,
        };
        app.tick(now);
        app
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        self.update_at(event, Utc::now());
    }

    pub fn update_at(&mut self, event: AppEvent, now: DateTime<Utc>) {
        if let AppEvent::KeyPress(key) = event {
            self.handle_key(key);
        }
        self.advance(now);
    }

    pub fn phase(&self) -> Phase {
        self.ticker.phase()
    }

    pub fn confetti(&self) -> Option<&ConfettiField> {
        self.ticker.effect()
    }

    /// True while confetti is being launched or still on screen.
    pub fn is_animating(&self) -> bool {
        self.ticker.is_celebrating() || self.confetti().is_some_and(ConfettiField::is_live)
    }

    /// How long the event loop may wait for input before the next update.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval_at(Utc::now())
    }

    fn poll_interval_at(&self, now: DateTime<Utc>) -> Duration {
        if self.is_animating() {
            return (self.next_frame - now)
                .to_std()
                .unwrap_or(Duration::ZERO)
                .min(FRAME_INTERVAL);
        }
        (self.next_tick - now)
            .to_std()
            .unwrap_or(Duration::ZERO)
            .min(IDLE_INTERVAL)
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc if self.show_help => self.show_help = false,
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            _ => {}
        }
    }

    /// Run the animation frame if one is due, then the countdown tick once
    /// a full period has passed. Input arriving between frames does not
    /// advance the animation.
    fn advance(&mut self, now: DateTime<Utc>) {
        if now >= self.next_frame {
            self.ticker.frame(now);
            if let Some(field) = self.ticker.effect_mut() {
                field.step();
            }
            self.next_frame = now + TimeDelta::milliseconds(FRAME_PERIOD_MS);
        }
        if now >= self.next_tick {
            self.tick(now);
        }
    }

    fn tick(&mut self, now: DateTime<Utc>) {
        let outcome = self.ticker.tick(now, &mut self.board);
        log::trace!(
            "tick {:?} has_time={}",
            outcome.snapshot.fields(),
            outcome.has_time
        );
        if outcome.completed_now && self.config.confetti && self.confetti().is_none() {
            log::info!("confetti requested but no effect is available");
        }

        let period = TimeDelta::milliseconds(TICK_PERIOD_MS);
        self.next_tick += period;
        if self.next_tick <= now {
            self.next_tick = now + period;
        }
    }
}
