//! The render loop: tick, compose, draw, then hand off to the celebration.

use std::io::Write;

use crossterm::style::Color;

use crate::celebrate::celebrate;
use crate::config::Config;
use crate::console::Console;
use crate::error::CountdownError;
use crate::frame::{FrameComposer, Layout};
use crate::interrupt::Interrupt;
use crate::timer::{Clock, Deadline, Ticker};

pub const INTERRUPTED_NOTICE: &str = "Countdown interrupted.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Interrupted,
}

/// Counts `duration_secs` down to zero and celebrates.
///
/// Interruption at any point clears the screen, prints a notice and is
/// reported as `Outcome::Interrupted`. Only terminal I/O failures are errors.
pub fn run<W: Write, C: Clock>(
    console: &mut Console<W>,
    clock: &C,
    interrupt: &Interrupt,
    config: &Config,
    duration_secs: u64,
) -> Result<Outcome, CountdownError> {
    let result = count_down(console, clock, interrupt, config, duration_secs)
        .and_then(|()| celebrate(console, clock, interrupt, config));

    match result {
        Ok(()) => Ok(Outcome::Completed),
        Err(CountdownError::Interrupted) => {
            console.clear()?;
            console.notice(INTERRUPTED_NOTICE, Color::Yellow)?;
            Ok(Outcome::Interrupted)
        }
        Err(err) => Err(err),
    }
}

fn count_down<W: Write, C: Clock>(
    console: &mut Console<W>,
    clock: &C,
    interrupt: &Interrupt,
    config: &Config,
    duration_secs: u64,
) -> Result<(), CountdownError> {
    let composer = FrameComposer::new(config, Layout::choose(duration_secs, console.width(), config));
    let deadline = Deadline::after(clock.now(), duration_secs).ok_or_else(|| {
        CountdownError::InvalidFormat {
            input: format!("{duration_secs}s"),
        }
    })?;

    for remaining in Ticker::new(clock, config, deadline) {
        interrupt.check()?;
        if remaining == 0 {
            break;
        }
        console.present(&composer.compose(remaining))?;
    }

    console.clear()?;
    Ok(())
}
