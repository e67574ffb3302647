/// Remaining-time breakdown shown on every tick.
use chrono::{DateTime, Utc};

use crate::deadline::Deadline;

const PLACEHOLDER: &str = "--";
const ZERO: &str = "00";

/// Days/hours/minutes/seconds left, already padded for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub positive: bool,
}

impl Snapshot {
    fn filled(text: &str) -> Self {
        Self {
            days: text.to_string(),
            hours: text.to_string(),
            minutes: text.to_string(),
            seconds: text.to_string(),
            positive: false,
        }
    }

    /// Shown while the deadline could not be parsed.
    pub fn placeholder() -> Self {
        Self::filled(PLACEHOLDER)
    }

    /// The terminal "arrived" state.
    pub fn arrived() -> Self {
        Self::filled(ZERO)
    }

    /// True while there is at least one whole second left.
    /// A sub-second remainder is positive but reads as all zeros.
    pub fn has_time(&self) -> bool {
        self.positive && self.fields().iter().any(|field| *field != ZERO)
    }

    pub fn fields(&self) -> [&str; 4] {
        [
            self.days.as_str(),
            self.hours.as_str(),
            self.minutes.as_str(),
            self.seconds.as_str(),
        ]
    }
}

fn pad2(value: i64) -> String {
    format!("{value:02}")
}

/// Break `deadline - now` down into a snapshot. Pure: same inputs, same output.
pub fn format_remaining(deadline: Deadline, now: DateTime<Utc>) -> Snapshot {
    let Some(at) = deadline.instant() else {
        return Snapshot::placeholder();
    };
    let ms = (at - now).num_milliseconds();
    if ms <= 0 {
        return Snapshot::arrived();
    }

    let total = ms / 1000;
    let days = total / 86_400;
    let rem = total % 86_400;
    let hours = rem / 3600;
    let rem = rem % 3600;
    let minutes = rem / 60;
    let seconds = rem % 60;
    Snapshot {
        days: pad2(days),
        hours: pad2(hours),
        minutes: pad2(minutes),
        seconds: pad2(seconds),
        positive: true,
    }
}
