mod art;
mod celebrate;
mod config;
mod console;
mod countdown;
mod error;
mod font;
mod frame;
mod interrupt;
mod panel;
mod timer;

use std::env;
use std::io;
use std::process;

use anyhow::{Context, Result};
use tracing::Level;

use crate::config::Config;
use crate::console::{Console, HiddenCursor};
use crate::interrupt::Interrupt;
use crate::timer::{SystemClock, parse_duration};

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: countdown <duration>");
        eprintln!("  <duration> format: 30s, 10m, 2h");
        process::exit(1);
    }

    if let Err(e) = run(&args[1]) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(input: &str) -> Result<()> {
    let duration_secs = parse_duration(input)?;
    let config = Config::new();

    let interrupt = Interrupt::new();
    interrupt
        .install()
        .context("Failed to install Ctrl+C handler")?;

    let mut console = Console::stdout();
    let _cursor = HiddenCursor::hide().context("Failed to hide cursor")?;

    countdown::run(&mut console, &SystemClock, &interrupt, &config, duration_secs)
        .context("Failed to draw countdown")?;
    Ok(())
}

/// Diagnostics go to stderr; stdout belongs to the clock.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .without_time()
        .init();
}
