/// Timer module: duration parsing, deadlines and the polling ticker
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::CountdownError;

/// Source of wall time for the countdown loop.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Longest accepted duration: 999 999 999 days.
pub const MAX_SECONDS: u64 = 999_999_999 * 86_400;

/// Parses `<digits><unit>` where unit is one of `s`, `m`, `h`.
pub fn parse_duration(input: &str) -> Result<u64, CountdownError> {
    let invalid = || CountdownError::InvalidFormat {
        input: input.to_string(),
    };

    let mut chars = input.chars();
    let unit = chars.next_back().ok_or_else(invalid)?;
    let digits = chars.as_str();

    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(invalid());
    }

    let factor = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        _ => return Err(invalid()),
    };

    let value: u64 = digits.parse().map_err(|_| invalid())?;
    value
        .checked_mul(factor)
        .filter(|&seconds| seconds <= MAX_SECONDS)
        .ok_or_else(invalid)
}

/// `HH:MM:SS` when there are hours to show, `MM:SS` otherwise.
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Absolute point at which the countdown reaches zero.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Instant);

impl Deadline {
    /// `None` when the deadline is past what `Instant` can represent.
    pub fn after(now: Instant, seconds: u64) -> Option<Self> {
        now.checked_add(Duration::from_secs(seconds)).map(Self)
    }

    /// Whole seconds left, rounding a partial second up. Zero at or past the deadline.
    pub fn remaining(&self, now: Instant) -> u64 {
        let left = self.0.saturating_duration_since(now);
        left.as_secs() + u64::from(left.subsec_nanos() > 0)
    }
}

/// Poll cadence for the next tick after showing `remaining`.
pub fn tick_interval(remaining: u64, config: &Config) -> Duration {
    if config.is_final(remaining) {
        config.final_tick_interval
    } else {
        config.tick_interval
    }
}

/// Yields remaining seconds once per poll, ending after the single zero.
pub struct Ticker<'a, C: Clock> {
    clock: &'a C,
    config: &'a Config,
    deadline: Deadline,
    last: Option<u64>,
}

impl<'a, C: Clock> Ticker<'a, C> {
    pub fn new(clock: &'a C, config: &'a Config, deadline: Deadline) -> Self {
        Self {
            clock,
            config,
            deadline,
            last: None,
        }
    }
}

impl<C: Clock> Iterator for Ticker<'_, C> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match self.last {
            Some(0) => return None,
            Some(previous) => self.clock.sleep(tick_interval(previous, self.config)),
            None => {}
        }

        let remaining = self.deadline.remaining(self.clock.now());
        self.last = Some(remaining);
        Some(remaining)
    }
}
