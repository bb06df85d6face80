//! Completion sequence: fireworks, the `COMPLETED!` banner, a color
//! flourish and the bell. Runs once, start to finish, unless interrupted.

use std::io::Write;

use crossterm::style::Color;
use tracing::warn;

use crate::art::{self, Art};
use crate::config::Config;
use crate::console::Console;
use crate::error::CountdownError;
use crate::font::{Font, select_font, width_budget};
use crate::interrupt::Interrupt;
use crate::panel::{BorderKind, Panel, StyledLine, style};
use crate::timer::Clock;

pub const BANNER_TEXT: &str = "COMPLETED!";
pub const BANNER_TITLE: &str = "Time's Up";

/// Fireworks frame framing the banner above and below.
const BANNER_FIREWORKS: Art = art::FIREWORKS[0];

#[derive(Debug, Clone, PartialEq)]
pub enum Banner {
    Glyphs(Vec<String>),
    /// Plain text. Cannot fail.
    Plain,
}

impl Banner {
    /// Largest banner font within the width budget, else the smallest font.
    /// Plain text only when the font cannot render the banner.
    pub fn choose(terminal_width: u16, config: &Config) -> Self {
        let budget = width_budget(terminal_width, config.banner_width_ratio);
        let font =
            select_font(&Font::BANNER_PREFERENCE, BANNER_TEXT, budget).unwrap_or(Font::SMALLEST);

        match font.render(BANNER_TEXT) {
            Ok(lines) => Banner::Glyphs(lines),
            Err(err) => {
                warn!(%err, "banner falls back to plain text");
                Banner::Plain
            }
        }
    }

    /// The banner panel with its fireworks drawn in `fireworks_color`.
    pub fn panel(&self, fireworks_color: Color) -> Panel {
        let text_style = style(Color::DarkGreen, true);
        let (body, padding) = match self {
            Banner::Glyphs(lines) => {
                let mut body = colored(BANNER_FIREWORKS, fireworks_color);
                body.push(StyledLine::blank());
                body.extend(lines.iter().map(|line| StyledLine::new(line.clone(), text_style)));
                body.push(StyledLine::blank());
                body.extend(colored(BANNER_FIREWORKS, fireworks_color));
                (body, (2, 4))
            }
            Banner::Plain => (vec![StyledLine::new(BANNER_TEXT, text_style)], (3, 6)),
        };

        Panel {
            body,
            title: BANNER_TITLE.to_string(),
            border: BorderKind::Double,
            border_color: Color::DarkGreen,
            padding,
            width: None,
        }
    }
}

pub fn celebrate<W: Write, C: Clock>(
    console: &mut Console<W>,
    clock: &C,
    interrupt: &Interrupt,
    config: &Config,
) -> Result<(), CountdownError> {
    for cycle in 0..config.firework_cycles {
        let color = art::pick(&art::FIREWORKS_PALETTE, cycle as u64);
        for frame in art::FIREWORKS {
            interrupt.check()?;
            console.present_block(&colored(frame, color))?;
            clock.sleep(config.firework_frame_delay);
        }
    }

    interrupt.check()?;
    let banner = Banner::choose(console.width(), config);
    console.present(&banner.panel(Color::Yellow))?;

    for redraw in 0..config.flourish_redraws {
        clock.sleep(config.flourish_delay);
        interrupt.check()?;
        let color = art::pick(&art::FLOURISH_PALETTE, redraw as u64);
        console.present(&banner.panel(color))?;
    }

    console.bell(&config.bell)?;
    Ok(())
}

fn colored(art: Art, color: Color) -> Vec<StyledLine> {
    art.iter()
        .map(|line| StyledLine::new(*line, style(color, false)))
        .collect()
}
